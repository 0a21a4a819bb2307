use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::api::{self, AuthUser};

/// Current authentication state, shared through Yew context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
}

impl AuthContext {
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.id.clone())
    }
}

pub fn stored_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item("token").ok())
        .flatten()
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_state(AuthContext::default);

    {
        let auth = auth.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(token) = stored_token() {
                    spawn_local(async move {
                        match api::fetch_current_user(&token).await {
                            Ok(user) => {
                                info!("Resolved current user {}", user.id);
                                auth.set(AuthContext { user: Some(user) });
                            }
                            Err(err) => warn!("Could not resolve current user: {}", err),
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<AuthContext> context={(*auth).clone()}>
            { for props.children.iter() }
        </ContextProvider<AuthContext>>
    }
}

/// Id of the signed in user, if any. Reads context synchronously.
#[hook]
pub fn use_current_user_id() -> Option<String> {
    use_context::<AuthContext>().and_then(|auth| auth.user_id())
}
