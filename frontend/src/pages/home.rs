use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{CtaSection, Hero, RevealGrid};
use crate::hooks::{use_scroll_to_top, use_seo, SeoConfig};
use crate::pages::services::{ServiceCard, SERVICES};
use crate::ui::{Button, ButtonVariant};
use crate::Route;

const FEATURED_SERVICES: usize = 3;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    use_seo(SeoConfig::new());

    let navigator = use_navigator();
    let view_all = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Services);
        }
    });

    html! {
        <div class="home-page">
            <Hero />
            <section class="mx-auto max-w-6xl px-6 py-20">
                <h2 class="text-3xl font-bold text-slate-900">{"What we install"}</h2>
                <p class="mt-3 max-w-2xl text-slate-600">
                    {"Licensed low voltage contractors serving commercial, industrial and residential sites."}
                </p>
                <RevealGrid class="mt-10 grid gap-6 md:grid-cols-3">
                    { for (0..FEATURED_SERVICES.min(SERVICES.len())).map(|index| html! {
                        <ServiceCard index={index} />
                    }) }
                </RevealGrid>
                <div class="mt-10 text-center">
                    <Button variant={ButtonVariant::Link} onclick={view_all}>
                        {"See all services"}
                    </Button>
                </div>
            </section>
            <CtaSection />
        </div>
    }
}
