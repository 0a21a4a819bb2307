#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Public origin every absolute URL (canonical, og:url) is built from.
pub const SITE_ORIGIN: &str = "https://infi-net.net";

pub const SITE_NAME: &str = "Infi-Net";

pub const DEFAULT_TITLE: &str = "Infi-Net | Fiber Optic & Low Voltage Installation";
pub const DEFAULT_DESCRIPTION: &str =
    "Professional fiber optic, structured cabling and low voltage installation for businesses and homes.";
pub const DEFAULT_KEYWORDS: &str =
    "fiber optic installation, low voltage contractor, structured cabling, network cabling, security camera installation";
pub const DEFAULT_OG_IMAGE: &str = "https://infi-net.net/og-image.jpg";
pub const DEFAULT_OG_TYPE: &str = "website";

pub const CONTACT_PHONE: &str = "+1 (555) 010-4477";
pub const CONTACT_EMAIL: &str = "info@infi-net.net";

pub fn absolute_url(path: &str) -> String {
    format!("{}{}", SITE_ORIGIN, path)
}
