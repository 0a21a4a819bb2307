use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

use infinet_frontend::{
    config,
    Route,
    api::HttpPageViewRecorder,
    auth::{use_current_user_id, AuthProvider},
    components::{CustomCursor, Nav},
    hooks::{use_page_view, RecorderHandle},
    pages::{
        contact::Contact,
        home::Home,
        not_found::NotFound,
        services::Services,
    },
};


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


/// Records a page view per route change. Lives inside the router and the
/// auth provider so it sees both the path and the current user.
#[function_component(RouteEffects)]
fn route_effects() -> Html {
    let recorder = use_context::<RecorderHandle>()
        .unwrap_or_else(|| RecorderHandle::new(HttpPageViewRecorder));
    let user_id = use_current_user_id();
    use_page_view(recorder, user_id);
    html! {}
}


#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer bg-slate-950 py-10 text-sm text-slate-400">
            <div class="mx-auto flex max-w-6xl flex-col gap-2 px-6 sm:flex-row sm:justify-between">
                <span>{ format!("© {} {}", chrono::Utc::now().format("%Y"), config::SITE_NAME) }</span>
                <span>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                    {" · "}
                    <a href={format!("tel:{}", config::CONTACT_PHONE)}>{ config::CONTACT_PHONE }</a>
                </span>
            </div>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    let recorder = use_state(|| RecorderHandle::new(HttpPageViewRecorder));

    html! {
        <AuthProvider>
            <ContextProvider<RecorderHandle> context={(*recorder).clone()}>
                <BrowserRouter>
                    <RouteEffects />
                    <CustomCursor />
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </BrowserRouter>
            </ContextProvider<RecorderHandle>>
        </AuthProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::error!("error initializing log");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
