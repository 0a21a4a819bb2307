pub mod page_view;
pub mod reveal;
pub mod seo;

pub use page_view::{use_page_view, PageViewRecorder, RecorderHandle};
pub use reveal::use_scroll_reveal;
pub use seo::{use_seo, SeoConfig};

use yew::prelude::*;

/// Scroll to top only on initial mount.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::page_view::tests::StubRecorder;
    use super::page_view::track_page_view;
    use super::seo::tests::MemoryDocument;
    use super::seo::apply_seo;
    use super::SeoConfig;

    /// Runs both route effects in hook mount order: SEO first, then page view.
    fn navigate(document: &mut MemoryDocument, recorder: &Rc<StubRecorder>, path: &str, user_id: Option<&str>) {
        apply_seo(document, &SeoConfig::new().resolve(), path);
        block_on(track_page_view(
            recorder.clone(),
            path.to_string(),
            user_id.map(str::to_string),
        ));
    }

    #[test]
    fn navigating_to_services_records_once_and_moves_canonical() {
        let mut document = MemoryDocument::default();
        let recorder = Rc::new(StubRecorder::default());

        navigate(&mut document, &recorder, "/", Some("user-7"));
        navigate(&mut document, &recorder, "/services", Some("user-7"));

        let services_calls: Vec<_> = recorder
            .calls
            .borrow()
            .iter()
            .filter(|(path, _)| path == "/services")
            .cloned()
            .collect();
        assert_eq!(services_calls, vec![("/services".to_string(), Some("user-7".to_string()))]);

        let canonical = document.canonical_links();
        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical[0].attr("href"), Some("https://infi-net.net/services"));
    }

    #[test]
    fn failing_recorder_does_not_block_metadata() {
        let mut document = MemoryDocument::default();
        let recorder = Rc::new(StubRecorder::failing());

        navigate(&mut document, &recorder, "/contact", None);

        assert_eq!(*recorder.calls.borrow(), vec![("/contact".to_string(), None::<String>)]);
        assert_eq!(
            document.canonical_links()[0].attr("href"),
            Some("https://infi-net.net/contact")
        );
    }
}
