//! Style-variant resolution shared by the UI primitives.
//!
//! A primitive declares its base tokens plus one enum per styling axis. Each
//! enum maps its options to a fixed token string, so an unknown option key
//! cannot be expressed at all. Caller supplied classes are merged last and
//! win over axis tokens that style the same property.

use yew::Classes;

/// One styling axis of a primitive (variant, size, animation, ...).
pub trait VariantAxis: Copy + Default + PartialEq + 'static {
    const NAME: &'static str;

    fn tokens(self) -> &'static str;
}

#[derive(Clone, Debug, Default)]
pub struct VariantResolver {
    parts: Vec<&'static str>,
    overrides: Vec<String>,
}

impl VariantResolver {
    pub fn new(base: &'static str) -> Self {
        Self {
            parts: vec![base],
            overrides: Vec::new(),
        }
    }

    pub fn axis<A: VariantAxis>(mut self, option: A) -> Self {
        self.parts.push(option.tokens());
        self
    }

    pub fn overrides(mut self, classes: &Classes) -> Self {
        self.overrides.push(class_tokens(classes));
        self
    }

    pub fn to_class_string(&self) -> String {
        let mut all: Vec<&str> = self.parts.clone();
        all.extend(self.overrides.iter().map(String::as_str));
        merge_classes(&all)
    }

    pub fn build(&self) -> Classes {
        Classes::from(self.to_class_string())
    }
}

pub fn class_tokens(classes: &Classes) -> String {
    classes.clone().into_iter().collect::<Vec<_>>().join(" ")
}

/// Merges whitespace separated token lists. A later token replaces an earlier
/// one from the same conflict group; identical tokens collapse.
pub fn merge_classes(inputs: &[&str]) -> String {
    let mut kept: Vec<(String, &str)> = Vec::new();
    for token in inputs.iter().flat_map(|input| input.split_whitespace()) {
        let key = conflict_key(token);
        kept.retain(|(existing, _)| *existing != key);
        kept.push((key, token));
    }
    kept.iter()
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden", "contents",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_POSITIONS: &[&str] = &[
    "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top",
];

// Per side: (side, width group, color group).
const BORDER_SIDES: &[(&str, &str, &str)] = &[
    ("t", "border-width-t", "border-color-t"),
    ("b", "border-width-b", "border-color-b"),
    ("l", "border-width-l", "border-color-l"),
    ("r", "border-width-r", "border-color-r"),
    ("x", "border-width-x", "border-color-x"),
    ("y", "border-width-y", "border-color-y"),
    ("s", "border-width-s", "border-color-s"),
    ("e", "border-width-e", "border-color-e"),
];

// Longest prefixes first so `min-h-` is not read as `m-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("underline-offset-", "underline-offset"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("backdrop-blur-", "backdrop-blur"),
    ("min-h-", "min-h"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("max-h-", "max-h"),
    ("duration-", "duration"),
    ("rounded-", "rounded"),
    ("opacity-", "opacity"),
    ("animate-", "animate"),
    ("tracking-", "tracking"),
    ("leading-", "leading"),
    ("scale-", "scale"),
    ("ease-", "ease"),
    ("gap-", "gap"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("pr-", "pr"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mb-", "mb"),
    ("z-", "z"),
    ("p-", "p"),
    ("m-", "m"),
    ("h-", "h"),
    ("w-", "w"),
];

fn conflict_key(token: &str) -> String {
    let (modifiers, utility) = match token.rfind(':') {
        Some(index) => token.split_at(index + 1),
        None => ("", token),
    };
    let utility = utility.trim_start_matches('!').trim_start_matches('-');
    format!("{}{}", modifiers, property_group(utility).unwrap_or(utility))
}

fn property_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    match utility {
        "border" => return Some("border-width"),
        "rounded" => return Some("rounded"),
        "shadow" => return Some("shadow"),
        "ring" => return Some("ring-width"),
        "underline" | "no-underline" | "line-through" => return Some("text-decoration"),
        _ => {}
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return Some(border_group(rest));
    }
    if let Some(rest) = utility.strip_prefix("ring-offset-") {
        return Some(if is_width(rest) { "ring-offset-width" } else { "ring-offset-color" });
    }
    if let Some(rest) = utility.strip_prefix("ring-") {
        return Some(if is_width(rest) { "ring-width" } else { "ring-color" });
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&rest) || rest.starts_with('[') {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return Some(background_group(rest));
    }
    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn border_group(rest: &str) -> &'static str {
    if is_width(rest) {
        return "border-width";
    }
    if BORDER_STYLES.contains(&rest) {
        return "border-style";
    }
    let (head, tail) = rest.split_once('-').unwrap_or((rest, ""));
    match BORDER_SIDES.iter().find(|(side, _, _)| *side == head) {
        Some((_, width, _)) if tail.is_empty() || is_width(tail) => width,
        Some((_, _, color)) => color,
        None => "border-color",
    }
}

fn background_group(rest: &str) -> &'static str {
    if rest == "none" || rest.starts_with("gradient-") || rest.starts_with("[url(") {
        "bg-image"
    } else if BG_SIZES.contains(&rest) {
        "bg-size"
    } else if BG_POSITIONS.contains(&rest) {
        "bg-position"
    } else {
        "bg-color"
    }
}

fn is_width(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Copy, Default, PartialEq)]
    enum Tone {
        #[default]
        Calm,
        Loud,
    }

    impl VariantAxis for Tone {
        const NAME: &'static str = "tone";

        fn tokens(self) -> &'static str {
            match self {
                Tone::Calm => "bg-slate-100 text-slate-900",
                Tone::Loud => "bg-red-600 text-white font-bold",
            }
        }
    }

    #[test]
    fn later_tokens_win_within_a_group() {
        assert_eq!(merge_classes(&["px-4 py-2 bg-blue-600", "bg-red-500"]), "px-4 py-2 bg-red-500");
    }

    #[test]
    fn modifiers_keep_groups_apart() {
        assert_eq!(
            merge_classes(&["bg-blue-600 hover:bg-blue-700", "bg-white"]),
            "hover:bg-blue-700 bg-white"
        );
    }

    #[test]
    fn text_size_and_color_do_not_conflict() {
        assert_eq!(
            merge_classes(&["text-sm text-white", "text-lg"]),
            "text-white text-lg"
        );
        assert_eq!(merge_classes(&["border border-gray-200", "border-2"]), "border-gray-200 border-2");
    }

    #[test]
    fn longer_prefixes_are_matched_first() {
        assert_eq!(merge_classes(&["min-h-screen m-2", "m-4"]), "min-h-screen m-4");
    }

    #[test]
    fn border_sides_keep_apart_from_border_color() {
        assert_eq!(merge_classes(&["border-t border-red-500"]), "border-t border-red-500");
        assert_eq!(
            merge_classes(&["border-x-2 border-b border-gray-200 border-dashed"]),
            "border-x-2 border-b border-gray-200 border-dashed"
        );
        assert_eq!(merge_classes(&["border-t border-t-4"]), "border-t-4");
        assert_eq!(
            merge_classes(&["border-t-red-500 border-t-blue-500 border-t-2"]),
            "border-t-blue-500 border-t-2"
        );
    }

    #[test]
    fn ring_offset_keeps_apart_from_ring_color() {
        assert_eq!(
            merge_classes(&["focus-visible:ring-offset-2", "focus-visible:ring-blue-500"]),
            "focus-visible:ring-offset-2 focus-visible:ring-blue-500"
        );
        assert_eq!(
            merge_classes(&["ring-offset-2 ring-offset-white", "ring-offset-4"]),
            "ring-offset-white ring-offset-4"
        );
    }

    #[test]
    fn background_image_keeps_apart_from_background_color() {
        assert_eq!(merge_classes(&["bg-gradient-to-r bg-blue-600"]), "bg-gradient-to-r bg-blue-600");
        assert_eq!(
            merge_classes(&["bg-[url(/hero.jpg)] bg-cover bg-center bg-slate-900"]),
            "bg-[url(/hero.jpg)] bg-cover bg-center bg-slate-900"
        );
        assert_eq!(merge_classes(&["bg-gradient-to-r", "bg-none"]), "bg-none");
    }

    #[test]
    fn shadow_size_and_color_and_modifiers_keep_apart() {
        assert_eq!(merge_classes(&["hover:shadow-lg shadow-md"]), "hover:shadow-lg shadow-md");
        assert_eq!(
            merge_classes(&["shadow-md shadow-blue-500/50", "shadow-xl"]),
            "shadow-blue-500/50 shadow-xl"
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(merge_classes(&["flex flex items-center"]), "flex items-center");
    }

    #[test]
    fn resolver_uses_axis_default_and_overrides() {
        let resolved = VariantResolver::new("rounded px-2")
            .axis(Tone::default())
            .overrides(&Classes::from("text-blue-500"))
            .to_class_string();
        assert_eq!(resolved, "rounded px-2 bg-slate-100 text-blue-500");

        let loud = VariantResolver::new("rounded px-2").axis(Tone::Loud).to_class_string();
        assert_eq!(loud, "rounded px-2 bg-red-600 text-white font-bold");
        assert_eq!(Tone::NAME, "tone");
    }
}
