use yew::prelude::*;

use crate::hooks::reveal::REVEAL_CLASS;
use crate::hooks::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealGridProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps each child in a `.reveal` cell and observes them from the grid
/// itself, so the cells fade in as the grid scrolls into view.
#[function_component(RevealGrid)]
pub fn reveal_grid(props: &RevealGridProps) -> Html {
    let grid_ref = use_node_ref();
    use_scroll_reveal(grid_ref.clone());

    html! {
        <div ref={grid_ref} class={props.class.clone()}>
            { for props.children.iter().map(|child| html! {
                <div class={classes!(REVEAL_CLASS)}>{ child }</div>
            }) }
        </div>
    }
}
