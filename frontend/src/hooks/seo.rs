use web_sys::{Document, Element};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;

/// Page specific metadata. Unset fields fall back to the site defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
}

impl SeoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn og_image(mut self, og_image: impl Into<String>) -> Self {
        self.og_image = Some(og_image.into());
        self
    }

    pub fn og_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    pub fn resolve(&self) -> ResolvedSeo {
        let or_default = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };
        ResolvedSeo {
            title: or_default(&self.title, config::DEFAULT_TITLE),
            description: or_default(&self.description, config::DEFAULT_DESCRIPTION),
            keywords: or_default(&self.keywords, config::DEFAULT_KEYWORDS),
            og_image: or_default(&self.og_image, config::DEFAULT_OG_IMAGE),
            og_type: or_default(&self.og_type, config::DEFAULT_OG_TYPE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSeo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
    pub og_type: String,
}

/// How a `<meta>` node is identified: by its `name` or `property` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    pub fn attribute(self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MetaKey::Name(key) | MetaKey::Property(key) => key,
        }
    }
}

pub fn meta_entries(seo: &ResolvedSeo, url: &str) -> Vec<(MetaKey, String)> {
    vec![
        (MetaKey::Name("description"), seo.description.clone()),
        (MetaKey::Name("keywords"), seo.keywords.clone()),
        (MetaKey::Property("og:title"), seo.title.clone()),
        (MetaKey::Property("og:description"), seo.description.clone()),
        (MetaKey::Property("og:type"), seo.og_type.clone()),
        (MetaKey::Property("og:url"), url.to_string()),
        (MetaKey::Property("og:image"), seo.og_image.clone()),
        (MetaKey::Name("twitter:title"), seo.title.clone()),
        (MetaKey::Name("twitter:description"), seo.description.clone()),
    ]
}

/// Document level metadata surface. Nodes are found or created once and then
/// only have their attributes overwritten.
pub trait SeoDocument {
    fn set_title(&mut self, title: &str);
    fn upsert_meta(&mut self, key: MetaKey, content: &str);
    fn upsert_canonical(&mut self, href: &str);
}

pub fn apply_seo<D: SeoDocument + ?Sized>(document: &mut D, seo: &ResolvedSeo, path: &str) {
    let url = config::absolute_url(path);
    document.set_title(&seo.title);
    for (key, content) in meta_entries(seo, &url) {
        document.upsert_meta(key, &content);
    }
    document.upsert_canonical(&url);
}

pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn find_or_create(&self, selector: &str, tag: &str, identity: (&str, &str)) -> Option<Element> {
        if let Some(existing) = self.document.query_selector(selector).ok().flatten() {
            return Some(existing);
        }
        let element = self.document.create_element(tag).ok()?;
        element.set_attribute(identity.0, identity.1).ok()?;
        self.document.head()?.append_child(&element).ok()?;
        Some(element)
    }
}

impl SeoDocument for DomDocument {
    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn upsert_meta(&mut self, key: MetaKey, content: &str) {
        let selector = format!("meta[{}=\"{}\"]", key.attribute(), key.key());
        if let Some(meta) = self.find_or_create(&selector, "meta", (key.attribute(), key.key())) {
            let _ = meta.set_attribute("content", content);
        }
    }

    fn upsert_canonical(&mut self, href: &str) {
        if let Some(link) = self.find_or_create("link[rel=\"canonical\"]", "link", ("rel", "canonical")) {
            let _ = link.set_attribute("href", href);
        }
    }
}

/// Keeps the document title, meta tags and canonical link in sync with the
/// current route. Re-applies whenever the config or path changes.
#[hook]
pub fn use_seo(config: SeoConfig) {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let resolved = config.resolve();

    use_effect_with_deps(
        move |(seo, path): &(ResolvedSeo, String)| {
            if let Some(mut document) = DomDocument::current() {
                apply_seo(&mut document, seo, path);
            }
            || ()
        },
        (resolved, path),
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Node {
        pub tag: &'static str,
        pub attrs: Vec<(String, String)>,
    }

    impl Node {
        pub fn attr(&self, name: &str) -> Option<&str> {
            self.attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }

        fn set(&mut self, name: &str, value: &str) {
            match self.attrs.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => self.attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    /// In-memory head: a title plus a flat list of nodes.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryDocument {
        pub title: String,
        pub nodes: Vec<Node>,
    }

    impl MemoryDocument {
        fn find_or_create(&mut self, tag: &'static str, attr: &str, value: &str) -> &mut Node {
            let index = match self
                .nodes
                .iter()
                .position(|node| node.tag == tag && node.attr(attr) == Some(value))
            {
                Some(index) => index,
                None => {
                    let mut node = Node { tag, attrs: Vec::new() };
                    node.set(attr, value);
                    self.nodes.push(node);
                    self.nodes.len() - 1
                }
            };
            &mut self.nodes[index]
        }

        pub fn canonical_links(&self) -> Vec<&Node> {
            self.nodes
                .iter()
                .filter(|node| node.tag == "link" && node.attr("rel") == Some("canonical"))
                .collect()
        }

        pub fn meta(&self, key: MetaKey) -> Option<&str> {
            self.nodes
                .iter()
                .find(|node| node.tag == "meta" && node.attr(key.attribute()) == Some(key.key()))
                .and_then(|node| node.attr("content"))
        }
    }

    impl SeoDocument for MemoryDocument {
        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }

        fn upsert_meta(&mut self, key: MetaKey, content: &str) {
            self.find_or_create("meta", key.attribute(), key.key())
                .set("content", content);
        }

        fn upsert_canonical(&mut self, href: &str) {
            self.find_or_create("link", "rel", "canonical").set("href", href);
        }
    }

    #[test]
    fn unset_fields_use_site_defaults() {
        let seo = SeoConfig::new().title("Services").resolve();
        assert_eq!(seo.title, "Services");
        assert_eq!(seo.description, config::DEFAULT_DESCRIPTION);
        assert_eq!(seo.og_type, "website");
        assert_eq!(SeoConfig::new().resolve().title, config::DEFAULT_TITLE);
    }

    #[test]
    fn sets_title_and_every_meta_key() {
        let mut document = MemoryDocument::default();
        let seo = SeoConfig::new().title("A").description("About A").resolve();
        apply_seo(&mut document, &seo, "/contact");

        assert_eq!(document.title, "A");
        assert_eq!(document.meta(MetaKey::Name("description")), Some("About A"));
        assert_eq!(document.meta(MetaKey::Property("og:title")), Some("A"));
        assert_eq!(document.meta(MetaKey::Name("twitter:title")), Some("A"));
        assert_eq!(
            document.meta(MetaKey::Property("og:url")),
            Some("https://infi-net.net/contact")
        );
        assert_eq!(document.nodes.iter().filter(|node| node.tag == "meta").count(), 9);
    }

    #[test]
    fn second_call_updates_the_same_canonical_node() {
        let mut document = MemoryDocument::default();
        apply_seo(&mut document, &SeoConfig::new().title("A").resolve(), "/");
        assert_eq!(document.title, "A");

        apply_seo(&mut document, &SeoConfig::new().title("B").resolve(), "/services");
        assert_eq!(document.title, "B");

        let canonical = document.canonical_links();
        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical[0].attr("href"), Some("https://infi-net.net/services"));
    }

    #[test]
    fn repeated_identical_calls_change_nothing() {
        let mut document = MemoryDocument::default();
        let seo = SeoConfig::new().title("Contact").resolve();
        apply_seo(&mut document, &seo, "/contact");
        let before = document.nodes.clone();

        apply_seo(&mut document, &seo, "/contact");
        assert_eq!(document.nodes, before);
    }

    #[test]
    fn meta_keys_use_the_right_attribute() {
        assert_eq!(MetaKey::Property("og:type").attribute(), "property");
        assert_eq!(MetaKey::Name("keywords").attribute(), "name");
        assert_eq!(MetaKey::Name("keywords").key(), "keywords");
    }
}
