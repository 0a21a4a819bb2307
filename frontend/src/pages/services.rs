use yew::prelude::*;

use crate::components::{CtaSection, RevealGrid};
use crate::hooks::{use_scroll_to_top, use_seo, SeoConfig};
use crate::ui::{CardAnimation, CardText, HoverEffect, InteractiveCard};

pub struct ServiceOffering {
    pub name: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        name: "Fiber Optic Installation",
        summary: "Single-mode and multi-mode fiber runs, fusion splicing and OTDR certification for campuses and data rooms.",
        highlights: &["Fusion splicing and termination", "OTDR testing and certification", "Aerial and underground runs"],
    },
    ServiceOffering {
        name: "Structured Cabling",
        summary: "Cat6 and Cat6A cabling, patch panels and rack builds that stay labeled and serviceable.",
        highlights: &["Cat6 / Cat6A drops", "Rack and patch panel builds", "Cable management and labeling"],
    },
    ServiceOffering {
        name: "Security Cameras",
        summary: "IP camera systems with PoE switching, NVR setup and remote viewing.",
        highlights: &["PoE camera installation", "NVR configuration", "Remote monitoring setup"],
    },
    ServiceOffering {
        name: "Access Control",
        summary: "Card, fob and mobile credential systems wired into your existing network.",
        highlights: &["Door controllers and readers", "Credential enrollment", "Integration with cameras"],
    },
    ServiceOffering {
        name: "Wireless Networks",
        summary: "Site surveys and enterprise Wi-Fi deployments with reliable coverage wall to wall.",
        highlights: &["Predictive and on-site surveys", "Access point mounting", "Controller configuration"],
    },
    ServiceOffering {
        name: "Audio / Visual",
        summary: "Conference rooms, paging and distributed audio installed and tested end to end.",
        highlights: &["Conference room AV", "Overhead paging", "Distributed audio"],
    },
];

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub index: usize,
    #[prop_or_default]
    pub show_highlights: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let Some(service) = SERVICES.get(props.index) else {
        return html! {};
    };
    let title = Some(CardText::from(service.name));
    let description = Some(CardText::from(service.summary));

    // No highlights means no children, so the card renders no content region.
    if props.show_highlights {
        html! {
            <InteractiveCard {title} {description} hover_effect={HoverEffect::Raise} animation={CardAnimation::FadeIn}>
                <ul class="list-disc space-y-1 pl-5 text-sm text-slate-700">
                    { for service.highlights.iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            </InteractiveCard>
        }
    } else {
        html! {
            <InteractiveCard {title} {description} hover_effect={HoverEffect::Raise} animation={CardAnimation::FadeIn} />
        }
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();
    use_seo(
        SeoConfig::new()
            .title("Services | Infi-Net Fiber Optic & Low Voltage")
            .description("Fiber optic installation, structured cabling, security cameras, access control, wireless and AV services from Infi-Net.")
            .keywords("fiber optic services, structured cabling, security camera installation, access control, wireless networks")
            .og_image("https://infi-net.net/og-services.jpg"),
    );

    html! {
        <div class="services-page">
            <section class="mx-auto max-w-6xl px-6 pb-16 pt-32">
                <h1 class="text-4xl font-bold text-slate-900">{"Our Services"}</h1>
                <p class="mt-4 max-w-3xl text-lg text-slate-600">
                    {"Every project is planned, installed and certified by our own technicians. No subcontracted shortcuts."}
                </p>
                <RevealGrid class="mt-12 grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    { for (0..SERVICES.len()).map(|index| html! {
                        <ServiceCard index={index} show_highlights={true} />
                    }) }
                </RevealGrid>
            </section>
            <CtaSection heading="Have a project in mind?" />
        </div>
    }
}
