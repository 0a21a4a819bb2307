//! Infi-Net marketing site: UI primitives, route side-effect hooks and pages.

use yew_router::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod ui;
pub mod pages {
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_targets_resolve_to_expected_paths() {
        assert_eq!(Route::Contact.to_path(), "/contact");
        assert_eq!(Route::Services.to_path(), "/services");
        assert_eq!(Route::recognize("/services"), Some(Route::Services));
    }
}
