use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_events::EventListener;
use stylist::css;
use stylist::yew::Global;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

// Only one overlay may own the global listeners at a time.
static CURSOR_MOUNTED: AtomicBool = AtomicBool::new(false);

// Native cursors are suppressed everywhere, so pointer styling is read from
// what the element is rather than from its computed `cursor`.
pub const POINTER_TARGETS: &str = "a, button, [role=button], .cursor-pointer";

const RING_SIZE: f64 = 32.0;
const DOT_SIZE: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub pointer: bool,
    pub clicking: bool,
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorAction {
    Move { x: f64, y: f64 },
    Press,
    Release,
    Leave,
    Enter,
    /// Pointer crossed into another element; re-read the flag in place.
    Hover,
}

impl CursorState {
    /// `shows_pointer` answers whether the element at a point is a pointer
    /// target. On a move it is asked about the position held *before* the
    /// move, so the pointer flag trails the real position by one event.
    pub fn apply(&self, action: CursorAction, shows_pointer: impl FnOnce(f64, f64) -> bool) -> Self {
        let mut next = *self;
        match action {
            CursorAction::Move { x, y } => {
                next.pointer = shows_pointer(self.x, self.y);
                next.x = x;
                next.y = y;
            }
            CursorAction::Press => next.clicking = true,
            CursorAction::Release => next.clicking = false,
            CursorAction::Leave => next.hidden = true,
            CursorAction::Enter => next.hidden = false,
            CursorAction::Hover => next.pointer = shows_pointer(self.x, self.y),
        }
        next
    }
}

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action, element_shows_pointer))
    }
}

fn element_shows_pointer(x: f64, y: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .document()
        .and_then(|document| document.element_from_point(x as f32, y as f32))
        .and_then(|element| element.closest(POINTER_TARGETS).ok().flatten())
        .is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Ring,
    Dot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayShape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub scale: f64,
    pub fill_opacity: f64,
}

impl OverlayShape {
    fn class(&self) -> &'static str {
        match self.kind {
            ShapeKind::Ring => "custom-cursor custom-cursor-ring",
            ShapeKind::Dot => "custom-cursor custom-cursor-dot",
        }
    }

    fn style(&self) -> String {
        format!(
            "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; \
             transform: translate(-50%, -50%) scale({}); \
             background-color: rgba(37, 99, 235, {}); pointer-events: none; z-index: 9999;",
            self.x, self.y, self.size, self.size, self.scale, self.fill_opacity
        )
    }
}

/// Ring and dot at the current position, or nothing while hidden.
pub fn overlay_shapes(state: &CursorState) -> Option<[OverlayShape; 2]> {
    if state.hidden {
        return None;
    }
    let ring = OverlayShape {
        kind: ShapeKind::Ring,
        x: state.x,
        y: state.y,
        size: RING_SIZE,
        scale: if state.clicking { 0.8 } else { 1.0 },
        fill_opacity: if state.pointer { 0.35 } else { 0.1 },
    };
    let dot = OverlayShape {
        kind: ShapeKind::Dot,
        x: state.x,
        y: state.y,
        size: DOT_SIZE,
        scale: 1.0,
        fill_opacity: 1.0,
    };
    Some([ring, dot])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListenOn {
    Document,
    Root,
}

const LISTENED_EVENTS: [(ListenOn, &str); 6] = [
    (ListenOn::Document, "mousemove"),
    (ListenOn::Document, "mousedown"),
    (ListenOn::Document, "mouseup"),
    (ListenOn::Document, "mouseover"),
    (ListenOn::Root, "mouseleave"),
    (ListenOn::Root, "mouseenter"),
];

fn cursor_action(event_type: &str, position: Option<(f64, f64)>) -> Option<CursorAction> {
    match event_type {
        "mousemove" => position.map(|(x, y)| CursorAction::Move { x, y }),
        "mousedown" => Some(CursorAction::Press),
        "mouseup" => Some(CursorAction::Release),
        "mouseover" => Some(CursorAction::Hover),
        "mouseleave" => Some(CursorAction::Leave),
        "mouseenter" => Some(CursorAction::Enter),
        _ => None,
    }
}

fn attach_listeners(dispatcher: UseReducerDispatcher<CursorState>) -> Vec<EventListener> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let root = document.document_element();

    LISTENED_EVENTS
        .iter()
        .filter_map(|&(on, event_type)| {
            let target: &web_sys::EventTarget = match on {
                ListenOn::Document => &document,
                ListenOn::Root => root.as_ref()?,
            };
            let dispatcher = dispatcher.clone();
            Some(EventListener::new(target, event_type, move |event| {
                let position = event
                    .dyn_ref::<MouseEvent>()
                    .map(|event| (f64::from(event.client_x()), f64::from(event.client_y())));
                if let Some(action) = cursor_action(event_type, position) {
                    dispatcher.dispatch(action);
                }
            }))
        })
        .collect()
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let owner = use_state(|| !CURSOR_MOUNTED.swap(true, Ordering::SeqCst));
    let cursor = use_reducer(CursorState::default);

    {
        let dispatcher = cursor.dispatcher();
        let owner = *owner;
        use_effect_with_deps(
            move |_| {
                let listeners = if owner { attach_listeners(dispatcher) } else { Vec::new() };
                move || {
                    // Dropping an EventListener removes it.
                    drop(listeners);
                    if owner {
                        CURSOR_MOUNTED.store(false, Ordering::SeqCst);
                    }
                }
            },
            (),
        );
    }

    if !*owner {
        return html! {};
    }

    html! {
        <>
            <Global css={css!(r#"
                @media (min-width: 768px) {
                    *, *::before, *::after {
                        cursor: none !important;
                    }
                }
                @media (max-width: 767px) {
                    .custom-cursor {
                        display: none;
                    }
                }
                .custom-cursor {
                    border-radius: 9999px;
                    transition: transform 0.15s ease-out, background-color 0.2s ease;
                }
                .custom-cursor-ring {
                    border: 2px solid rgba(37, 99, 235, 0.8);
                }
            "#)} />
            if let Some(shapes) = overlay_shapes(&*cursor) {
                { for shapes.iter().map(|shape| html! {
                    <div class={shape.class()} style={shape.style()} aria-hidden="true"></div>
                }) }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use pretty_assertions::assert_eq;

    fn never(_: f64, _: f64) -> bool {
        false
    }

    #[test]
    fn move_updates_position() {
        let state = CursorState::default().apply(CursorAction::Move { x: 40.0, y: 25.0 }, never);
        assert_eq!((state.x, state.y), (40.0, 25.0));
    }

    #[test]
    fn pointer_flag_reads_previous_position() {
        let asked = Cell::new(None);
        let start = CursorState { x: 10.0, y: 20.0, ..CursorState::default() };
        let next = start.apply(CursorAction::Move { x: 300.0, y: 400.0 }, |x, y| {
            asked.set(Some((x, y)));
            true
        });
        // One event behind: the element under (10, 20) decided the flag.
        assert_eq!(asked.get(), Some((10.0, 20.0)));
        assert!(next.pointer);
        assert_eq!((next.x, next.y), (300.0, 400.0));
    }

    #[test]
    fn press_and_release_toggle_clicking() {
        let pressed = CursorState::default().apply(CursorAction::Press, never);
        assert!(pressed.clicking);
        assert!(!pressed.apply(CursorAction::Release, never).clicking);
    }

    #[test]
    fn leaving_hides_and_entering_restores_at_last_position() {
        let state = CursorState::default()
            .apply(CursorAction::Move { x: 120.0, y: 80.0 }, never)
            .apply(CursorAction::Leave, never);
        assert!(overlay_shapes(&state).is_none());

        let state = state.apply(CursorAction::Enter, never);
        let shapes = overlay_shapes(&state).expect("overlay visible after enter");
        assert_eq!(shapes.len(), 2);
        for shape in &shapes {
            assert_eq!((shape.x, shape.y), (120.0, 80.0));
        }
        assert_eq!(shapes[0].kind, ShapeKind::Ring);
        assert_eq!(shapes[1].kind, ShapeKind::Dot);
    }

    #[test]
    fn ring_reflects_pointer_and_clicking() {
        let idle = overlay_shapes(&CursorState::default()).unwrap();
        let active = overlay_shapes(&CursorState { pointer: true, clicking: true, ..CursorState::default() }).unwrap();
        assert!(active[0].fill_opacity > idle[0].fill_opacity);
        assert!(active[0].scale < idle[0].scale);
        assert_eq!(active[1], idle[1]);
    }

    #[test]
    fn overlay_never_takes_pointer_events() {
        let shapes = overlay_shapes(&CursorState::default()).unwrap();
        assert!(shapes.iter().all(|shape| shape.style().contains("pointer-events: none")));
    }

    #[test]
    fn hover_rechecks_pointer_at_current_position() {
        let asked = Cell::new(None);
        let start = CursorState { x: 55.0, y: 66.0, ..CursorState::default() };
        let next = start.apply(CursorAction::Hover, |x, y| {
            asked.set(Some((x, y)));
            true
        });
        assert_eq!(asked.get(), Some((55.0, 66.0)));
        assert!(next.pointer);
        assert_eq!((next.x, next.y), (55.0, 66.0));
    }

    #[test]
    fn six_listeners_each_map_to_an_action() {
        assert_eq!(LISTENED_EVENTS.len(), 6);
        for (i, (_, event_type)) in LISTENED_EVENTS.iter().enumerate() {
            assert!(cursor_action(event_type, Some((1.0, 2.0))).is_some(), "{event_type}");
            assert!(LISTENED_EVENTS[..i].iter().all(|(_, seen)| seen != event_type));
        }
        assert_eq!(cursor_action("mousemove", None), None);
        assert_eq!(cursor_action("click", Some((1.0, 2.0))), None);
        let on_root: Vec<_> = LISTENED_EVENTS
            .iter()
            .filter(|(on, _)| *on == ListenOn::Root)
            .map(|(_, event_type)| *event_type)
            .collect();
        assert_eq!(on_root, vec!["mouseleave", "mouseenter"]);
    }

    #[test]
    fn pointer_targets_cover_links_buttons_and_clickable_cards() {
        let selectors: Vec<&str> = POINTER_TARGETS.split(',').map(str::trim).collect();
        for expected in ["a", "button", "[role=button]", ".cursor-pointer"] {
            assert!(selectors.contains(&expected), "{expected}");
        }
        let card = crate::ui::card::card_classes(
            true,
            Default::default(),
            Default::default(),
            Default::default(),
            "",
        );
        assert!(card.split_whitespace().any(|token| token == "cursor-pointer"));
    }
}
