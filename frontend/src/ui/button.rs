use yew::prelude::*;

use crate::ui::variants::{VariantAxis, VariantResolver};

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all duration-300 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Link,
    Secondary,
    Destructive,
    Accent,
}

impl VariantAxis for ButtonVariant {
    const NAME: &'static str = "variant";

    fn tokens(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-blue-600 text-white hover:bg-blue-700 shadow-md",
            ButtonVariant::Outline => "border border-blue-600 bg-transparent text-blue-600 hover:bg-blue-50",
            ButtonVariant::Ghost => "bg-transparent text-slate-800 hover:bg-slate-100",
            ButtonVariant::Link => "bg-transparent text-blue-600 underline-offset-4 hover:underline",
            ButtonVariant::Secondary => "bg-slate-200 text-slate-900 hover:bg-slate-300",
            ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-700",
            ButtonVariant::Accent => "bg-orange-500 text-white hover:bg-orange-600 shadow-md",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl VariantAxis for ButtonSize {
    const NAME: &'static str = "size";

    fn tokens(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Sm => "h-9 rounded-md px-3",
            ButtonSize::Lg => "h-12 rounded-lg px-8 text-base",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonAnimation {
    #[default]
    None,
    Subtle,
    Glow,
}

impl VariantAxis for ButtonAnimation {
    const NAME: &'static str = "animation";

    fn tokens(self) -> &'static str {
        match self {
            ButtonAnimation::None => "",
            ButtonAnimation::Subtle => "hover:-translate-y-0.5 hover:shadow-lg",
            ButtonAnimation::Glow => "hover:shadow-[0_0_20px_rgba(37,99,235,0.6)]",
        }
    }
}

pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    animation: ButtonAnimation,
    overrides: &Classes,
) -> Classes {
    VariantResolver::new(BUTTON_BASE)
        .axis(variant)
        .axis(size)
        .axis(animation)
        .overrides(overrides)
        .build()
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub animation: ButtonAnimation,
    #[prop_or_default]
    pub class: Classes,
    /// Reference to the rendered `<button>`, for focus or measurement.
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = button_classes(props.variant, props.size, props.animation, &props.class);
    let onclick = props.onclick.clone();

    html! {
        <button
            ref={props.node_ref.clone()}
            type={props.button_type.clone()}
            class={classes}
            id={props.id.clone()}
            title={props.title.clone()}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
            onclick={onclick}
        >
            { for props.children.iter() }
        </button>
    }
}
