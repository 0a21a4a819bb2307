use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Marker class for elements that animate in once visible.
pub const REVEAL_CLASS: &str = "reveal";
pub const ACTIVE_CLASS: &str = "active";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Browsers may report a ratio just under the threshold on the crossing entry.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Active,
}

/// Per-element reveal state. Active is terminal.
#[derive(Debug)]
pub struct RevealTracker<T> {
    entries: Vec<(T, RevealState)>,
}

impl<T: PartialEq> RevealTracker<T> {
    pub fn new(targets: Vec<T>) -> Self {
        Self {
            entries: targets
                .into_iter()
                .map(|target| (target, RevealState::Pending))
                .collect(),
        }
    }

    /// Returns `true` only for the event that moves `target` to active.
    pub fn on_intersection(&mut self, target: &T, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio < REVEAL_THRESHOLD - RATIO_TOLERANCE {
            return false;
        }
        match self.entries.iter_mut().find(|(tracked, _)| tracked == target) {
            Some((_, state)) if *state == RevealState::Pending => {
                *state = RevealState::Active;
                true
            }
            _ => false,
        }
    }

    /// Removes and returns every element that never became active.
    pub fn take_pending(&mut self) -> Vec<T> {
        let (pending, active): (Vec<_>, Vec<_>) = self
            .entries
            .drain(..)
            .partition(|(_, state)| *state == RevealState::Pending);
        self.entries = active;
        pending.into_iter().map(|(target, _)| target).collect()
    }
}

#[cfg(test)]
impl<T: PartialEq> RevealTracker<T> {
    fn state(&self, target: &T) -> Option<RevealState> {
        self.entries
            .iter()
            .find(|(tracked, _)| tracked == target)
            .map(|(_, state)| *state)
    }

    fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, state)| *state == RevealState::Pending)
            .count()
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker<Element>>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach(root: &Element) -> Option<Self> {
        let nodes = root.query_selector_all(&format!(".{}", REVEAL_CLASS)).ok()?;
        let targets: Vec<Element> = (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.clone())));
        let callback_tracker = tracker.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let activated = callback_tracker.borrow_mut().on_intersection(
                    &target,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if activated {
                    let _ = target.class_list().add_1(ACTIVE_CLASS);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for target in &targets {
            observer.observe(target);
        }

        Some(Self {
            observer,
            tracker,
            _callback: callback,
        })
    }

    fn release(self) {
        for target in self.tracker.borrow_mut().take_pending() {
            self.observer.unobserve(&target);
        }
        self.observer.disconnect();
    }
}

/// Adds the `active` class to every `.reveal` descendant of `container` the
/// first time it scrolls into view. Elements are collected once, on mount.
#[hook]
pub fn use_scroll_reveal(container: NodeRef) {
    use_effect_with_deps(
        move |container: &NodeRef| {
            let observer = container
                .cast::<Element>()
                .and_then(|root| RevealObserver::attach(&root));
            move || {
                if let Some(observer) = observer {
                    observer.release();
                }
            }
        },
        container,
    );
}
