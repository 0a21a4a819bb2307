use yew::prelude::*;

use crate::config;
use crate::hooks::{use_scroll_to_top, use_seo, SeoConfig};
use crate::ui::{Button, ButtonAnimation, ButtonVariant, CardText, CardVariant, InteractiveCard};

fn open_link(href: String) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&href);
        }
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    use_seo(
        SeoConfig::new()
            .title("Contact | Infi-Net")
            .description("Request a quote for fiber optic, structured cabling or low voltage work. Call or email Infi-Net today.")
            .og_type("business.business"),
    );

    let footer = html! {
        <div class="flex w-full flex-col gap-3 sm:flex-row">
            <Button animation={ButtonAnimation::Subtle} onclick={open_link(format!("tel:{}", config::CONTACT_PHONE))}>
                {"Call "}{ config::CONTACT_PHONE }
            </Button>
            <Button variant={ButtonVariant::Outline} onclick={open_link(format!("mailto:{}", config::CONTACT_EMAIL))}>
                {"Email "}{ config::CONTACT_EMAIL }
            </Button>
        </div>
    };

    html! {
        <div class="contact-page mx-auto max-w-3xl px-6 pb-24 pt-32">
            <h1 class="text-4xl font-bold text-slate-900">{"Let's talk about your project"}</h1>
            <p class="mt-4 text-lg text-slate-600">
                {"Send us the address, a rough scope and your timeline. We usually reply the same business day."}
            </p>
            <div class="mt-10">
                <InteractiveCard
                    title={Some(CardText::from("Contact details"))}
                    description={Some(CardText::Markup(html! {
                        <p class="text-sm text-slate-500">
                            {"Serving the greater metro area. "}
                            <strong>{"Monday to Friday, 7am to 5pm."}</strong>
                        </p>
                    }))}
                    interactive={false}
                    variant={CardVariant::Default}
                    footer={Some(footer)}
                >
                    <ul class="space-y-2 text-slate-700">
                        <li>{"Phone: "}{ config::CONTACT_PHONE }</li>
                        <li>{"Email: "}{ config::CONTACT_EMAIL }</li>
                    </ul>
                </InteractiveCard>
            </div>
        </div>
    }
}
