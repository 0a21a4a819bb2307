pub mod cta_section;
pub mod cursor;
pub mod hero;
pub mod nav;
pub mod reveal_grid;

pub use cta_section::CtaSection;
pub use cursor::CustomCursor;
pub use hero::Hero;
pub use nav::Nav;
pub use reveal_grid::RevealGrid;

#[cfg(test)]
mod tests {
    const RENDERERS: &[(&str, &str)] = &[
        ("components/hero.rs", include_str!("hero.rs")),
        ("components/cta_section.rs", include_str!("cta_section.rs")),
        ("components/reveal_grid.rs", include_str!("reveal_grid.rs")),
        ("pages/home.rs", include_str!("../pages/home.rs")),
        ("pages/services.rs", include_str!("../pages/services.rs")),
        ("pages/contact.rs", include_str!("../pages/contact.rs")),
        ("pages/not_found.rs", include_str!("../pages/not_found.rs")),
    ];

    fn marks_reveal(source: &str) -> bool {
        source.contains("class=\"reveal") || source.contains("classes!(REVEAL_CLASS")
    }

    // `.reveal` starts at opacity 0; markup outside an observed container
    // would never become visible.
    #[test]
    fn reveal_markup_is_always_observed_by_its_own_component() {
        for (path, source) in RENDERERS {
            if marks_reveal(source) {
                assert!(source.contains("use_scroll_reveal("), "{path} marks .reveal without observing it");
            }
        }
    }

    #[test]
    fn service_grids_reveal_through_the_grid() {
        for (path, source) in RENDERERS.iter().filter(|(path, _)| path.starts_with("pages/")) {
            if source.contains("<ServiceCard") {
                assert!(source.contains("<RevealGrid"), "{path} renders service cards outside a RevealGrid");
            }
        }
    }
}
