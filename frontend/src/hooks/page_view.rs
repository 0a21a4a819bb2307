use std::rc::Rc;

use futures::future::LocalBoxFuture;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::error::ApiError;

/// External analytics sink for page views.
pub trait PageViewRecorder {
    fn record(&self, path: String, user_id: Option<String>) -> LocalBoxFuture<'static, Result<(), ApiError>>;
}

/// Shareable recorder for Yew context; equal only to clones of itself.
#[derive(Clone)]
pub struct RecorderHandle(pub Rc<dyn PageViewRecorder>);

impl RecorderHandle {
    pub fn new(recorder: impl PageViewRecorder + 'static) -> Self {
        Self(Rc::new(recorder))
    }
}

impl PartialEq for RecorderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Records one page view. Failures are logged and swallowed.
pub async fn track_page_view(recorder: Rc<dyn PageViewRecorder>, path: String, user_id: Option<String>) {
    match recorder.record(path.clone(), user_id).await {
        Ok(()) => info!("Recorded page view for {}", path),
        Err(err) => error!("Failed to record page view for {}: {}", path, err),
    }
}

/// Fires a page view on every change of path or user id. The call is never
/// awaited by rendering and is not cancelled on unmount.
#[hook]
pub fn use_page_view(recorder: RecorderHandle, user_id: Option<String>) {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    use_effect_with_deps(
        move |(path, user_id): &(String, Option<String>)| {
            spawn_local(track_page_view(recorder.0.clone(), path.clone(), user_id.clone()));
            || ()
        },
        (path, user_id),
    );
}
