use chrono::Utc;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;
use crate::hooks::PageViewRecorder;

#[derive(Serialize, Debug, PartialEq)]
struct PageViewPayload<'a> {
    path: &'a str,
    user_id: Option<&'a str>,
    viewed_at: String,
    referrer: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

fn document_referrer() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.document())
        .map(|document| document.referrer())
        .filter(|referrer| !referrer.is_empty())
}

async fn post_page_view(path: &str, user_id: Option<&str>) -> Result<(), ApiError> {
    let payload = PageViewPayload {
        path,
        user_id,
        viewed_at: Utc::now().to_rfc3339(),
        referrer: document_referrer(),
    };
    let body = serde_json::to_string(&payload)?;
    let response = Request::post(&format!("{}/api/page-views", config::get_backend_url()))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// Posts page views to the backend analytics endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpPageViewRecorder;

impl PageViewRecorder for HttpPageViewRecorder {
    fn record(&self, path: String, user_id: Option<String>) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        async move { post_page_view(&path, user_id.as_deref()).await }.boxed_local()
    }
}

pub async fn fetch_current_user(token: &str) -> Result<AuthUser, ApiError> {
    let response = Request::get(&format!("{}/api/auth/me", config::get_backend_url()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<AuthUser>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anonymous_page_view_serializes_null_user() {
        let payload = PageViewPayload {
            path: "/services",
            user_id: None,
            viewed_at: "2026-10-16T12:00:00+00:00".to_string(),
            referrer: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "path": "/services",
                "user_id": null,
                "viewed_at": "2026-10-16T12:00:00+00:00",
                "referrer": null,
            })
        );
    }

    #[test]
    fn auth_user_email_is_optional() {
        let user: AuthUser = serde_json::from_str(r#"{"id":"u-1"}"#).unwrap();
        assert_eq!(user, AuthUser { id: "u-1".into(), email: None });
    }
}
