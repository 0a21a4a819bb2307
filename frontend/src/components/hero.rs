use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_scroll_reveal;
use crate::ui::{Button, ButtonAnimation, ButtonSize, ButtonVariant};
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone());

    let navigator = use_navigator();
    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <section ref={section_ref} class="hero relative overflow-hidden bg-slate-950 text-white">
            <div class="hero-background absolute inset-0 bg-gradient-to-br from-blue-900/60 via-slate-950 to-slate-950"></div>
            <div class="relative mx-auto flex min-h-[80vh] max-w-6xl flex-col justify-center px-6 py-24">
                <p class="reveal text-sm font-semibold uppercase tracking-widest text-blue-400">
                    {"Fiber Optic & Low Voltage Specialists"}
                </p>
                <h1 class="reveal mt-4 text-4xl font-bold leading-tight md:text-6xl">
                    {"Infrastructure that keeps your business connected"}
                </h1>
                <p class="reveal mt-6 max-w-2xl text-lg text-slate-300">
                    {"From fiber splicing and structured cabling to security cameras and access control, we design, install and certify the networks your operations depend on."}
                </p>
                <div class="reveal mt-10 flex flex-col gap-4 sm:flex-row">
                    <Button size={ButtonSize::Lg} animation={ButtonAnimation::Glow} onclick={go_to(Route::Contact)}>
                        {"Get a Free Quote"}
                    </Button>
                    <Button
                        variant={ButtonVariant::Outline}
                        size={ButtonSize::Lg}
                        animation={ButtonAnimation::Subtle}
                        class={classes!("border-white", "text-white", "hover:bg-white/10")}
                        onclick={go_to(Route::Services)}
                    >
                        {"Explore Services"}
                    </Button>
                </div>
            </div>
        </section>
    }
}
