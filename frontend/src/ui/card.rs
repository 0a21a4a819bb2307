use yew::prelude::*;

use crate::ui::variants::{class_tokens, merge_classes};

/// Title or description content: plain text gets the default typography,
/// pre-built markup is rendered as given.
#[derive(Clone, Debug, PartialEq)]
pub enum CardText {
    Text(AttrValue),
    Markup(Html),
}

impl From<&'static str> for CardText {
    fn from(value: &'static str) -> Self {
        CardText::Text(AttrValue::Static(value))
    }
}

impl From<String> for CardText {
    fn from(value: String) -> Self {
        CardText::Text(AttrValue::from(value))
    }
}

impl From<Html> for CardText {
    fn from(value: Html) -> Self {
        CardText::Markup(value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverEffect {
    #[default]
    Raise,
    Glow,
    Border,
    None,
}

impl HoverEffect {
    fn tokens(self) -> &'static str {
        match self {
            HoverEffect::Raise => "hover:-translate-y-1 hover:shadow-xl",
            HoverEffect::Glow => "hover:shadow-[0_0_25px_rgba(37,99,235,0.35)]",
            HoverEffect::Border => "hover:border-blue-500",
            HoverEffect::None => "",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardAnimation {
    FadeIn,
    SlideUp,
    #[default]
    None,
}

impl CardAnimation {
    fn tokens(self) -> &'static str {
        match self {
            CardAnimation::FadeIn => "animate-fade-in",
            CardAnimation::SlideUp => "animate-slide-up",
            CardAnimation::None => "",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Glass,
}

impl CardVariant {
    fn tokens(self) -> &'static str {
        match self {
            CardVariant::Default => "bg-white border-slate-200",
            CardVariant::Glass => "bg-white/10 backdrop-blur-md border-white/20 text-white",
        }
    }
}

const CARD_BASE: &str = "rounded-xl border shadow-sm transition-all duration-300";

pub fn card_classes(
    interactive: bool,
    hover_effect: HoverEffect,
    animation: CardAnimation,
    variant: CardVariant,
    overrides: &str,
) -> String {
    let hover = if interactive { hover_effect.tokens() } else { "" };
    let pointer = if interactive { "cursor-pointer" } else { "" };
    merge_classes(&[
        CARD_BASE,
        variant.tokens(),
        hover,
        pointer,
        animation.tokens(),
        overrides,
    ])
}

/// Which of the three layout regions a card renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardRegions {
    pub header: bool,
    pub content: bool,
    pub footer: bool,
}

impl CardRegions {
    pub fn for_inputs(has_title: bool, has_description: bool, has_children: bool, has_footer: bool) -> Self {
        Self {
            header: has_title || has_description,
            content: has_children,
            footer: has_footer,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct InteractiveCardProps {
    #[prop_or_default]
    pub title: Option<CardText>,
    #[prop_or_default]
    pub description: Option<CardText>,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or(true)]
    pub interactive: bool,
    #[prop_or_default]
    pub hover_effect: HoverEffect,
    #[prop_or_default]
    pub animation: CardAnimation,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

fn render_title(title: &CardText) -> Html {
    match title {
        CardText::Text(text) => html! {
            <h3 class="text-xl font-semibold leading-none tracking-tight">{ text.to_string() }</h3>
        },
        CardText::Markup(markup) => markup.clone(),
    }
}

fn render_description(description: &CardText) -> Html {
    match description {
        CardText::Text(text) => html! {
            <p class="text-sm text-slate-500">{ text.to_string() }</p>
        },
        CardText::Markup(markup) => markup.clone(),
    }
}

#[function_component(InteractiveCard)]
pub fn interactive_card(props: &InteractiveCardProps) -> Html {
    let regions = CardRegions::for_inputs(
        props.title.is_some(),
        props.description.is_some(),
        !props.children.is_empty(),
        props.footer.is_some(),
    );
    let overrides = class_tokens(&props.class);
    let classes = card_classes(
        props.interactive,
        props.hover_effect,
        props.animation,
        props.variant,
        &overrides,
    );

    html! {
        <div class={classes} onclick={props.onclick.clone()}>
            if regions.header {
                <div class="flex flex-col space-y-1.5 p-6">
                    if let Some(title) = &props.title {
                        { render_title(title) }
                    }
                    if let Some(description) = &props.description {
                        { render_description(description) }
                    }
                </div>
            }
            if regions.content {
                <div class="p-6 pt-0">
                    { for props.children.iter() }
                </div>
            }
            if let Some(footer) = &props.footer {
                <div class="flex items-center p-6 pt-0">
                    { footer.clone() }
                </div>
            }
        </div>
    }
}
