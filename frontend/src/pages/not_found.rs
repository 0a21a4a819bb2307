use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_seo, SeoConfig};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_seo(SeoConfig::new().title("Page not found | Infi-Net"));

    html! {
        <div class="not-found-page mx-auto max-w-3xl px-6 py-32 text-center">
            <h1 class="text-5xl font-bold text-slate-900">{"404"}</h1>
            <p class="mt-4 text-lg text-slate-600">{"We couldn't find that page."}</p>
            <Link<Route> to={Route::Home} classes="mt-8 inline-block text-blue-600 underline">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
