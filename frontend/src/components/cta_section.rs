use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::hooks::use_scroll_reveal;
use crate::ui::{Button, ButtonAnimation, ButtonSize, ButtonVariant};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    #[prop_or(AttrValue::Static("Ready to upgrade your network?"))]
    pub heading: AttrValue,
    #[prop_or(AttrValue::Static("Tell us about your site and we will put together a clear, itemized proposal within two business days."))]
    pub subheading: AttrValue,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
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
        <section ref={section_ref} class="cta-section bg-blue-700 py-20 text-white">
            <div class="mx-auto max-w-4xl px-6 text-center">
                <h2 class="reveal text-3xl font-bold md:text-4xl">{ props.heading.to_string() }</h2>
                <p class="reveal mx-auto mt-4 max-w-2xl text-lg text-blue-100">{ props.subheading.to_string() }</p>
                <div class="reveal mt-8 flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <Button
                        variant={ButtonVariant::Accent}
                        size={ButtonSize::Lg}
                        animation={ButtonAnimation::Subtle}
                        onclick={go_to(Route::Contact)}
                    >
                        {"Contact Us"}
                    </Button>
                    <Button
                        variant={ButtonVariant::Ghost}
                        size={ButtonSize::Lg}
                        class={classes!("text-white", "hover:bg-white/10")}
                        onclick={go_to(Route::Services)}
                    >
                        {"View Services"}
                    </Button>
                </div>
                <p class="reveal mt-6 text-sm text-blue-200">
                    {"Or call us directly at "}
                    <a href={format!("tel:{}", config::CONTACT_PHONE)} class="underline">{ config::CONTACT_PHONE }</a>
                </p>
            </div>
        </section>
    }
}
