//! HTTP routes.

use crate::config::ServerConfig;
use crate::error::RenderError;
use crate::render::render_document;
use axum::Router;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::{get, post};
use leptos::prelude::LeptosOptions;
use speezy_theme_core::mock::{mock_context, mock_context_with};
use speezy_theme_core::{PageId, RenderContext, ThemeOptions};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state for the routes. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub theme: Arc<ThemeOptions>,
    pub preview_enabled: bool,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, leptos_options: LeptosOptions) -> Self {
        Self {
            theme: Arc::new(config.theme),
            preview_enabled: config.preview_enabled,
            leptos_options,
        }
    }
}

/// Builds the router.
pub fn router(state: AppState) -> Router {
    let pkg_dir = format!(
        "{}/{}",
        state.leptos_options.site_root, state.leptos_options.site_pkg_dir
    );

    Router::new()
        .route("/render", post(render_payload))
        .route(
            "/preview/{page_id}",
            get(preview_page).post(preview_page_with_overrides),
        )
        .route("/health", get(health))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Renders the page for a payload posted by the identity server.
async fn render_payload(
    State(state): State<AppState>,
    body: String,
) -> Result<Html<String>, RenderError> {
    let kc_context = RenderContext::from_json(&body).map_err(|e| RenderError::InvalidPayload {
        details: e.to_string(),
    })?;
    render_for(&state, &kc_context)
}

/// Renders a page from mock data.
async fn preview_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> Result<Html<String>, RenderError> {
    if !state.preview_enabled {
        return Err(RenderError::PreviewDisabled);
    }
    let kc_context = mock_context(&PageId::from(page_id));
    render_for(&state, &kc_context)
}

/// Renders a page from mock data with JSON overrides merged over it.
async fn preview_page_with_overrides(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    body: String,
) -> Result<Html<String>, RenderError> {
    if !state.preview_enabled {
        return Err(RenderError::PreviewDisabled);
    }
    let overrides: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| RenderError::InvalidPayload {
            details: e.to_string(),
        })?;
    let kc_context = mock_context_with(&PageId::from(page_id), overrides).map_err(|e| {
        RenderError::InvalidPayload {
            details: e.to_string(),
        }
    })?;
    render_for(&state, &kc_context)
}

async fn health() -> &'static str {
    "ok"
}

fn render_for(state: &AppState, kc_context: &RenderContext) -> Result<Html<String>, RenderError> {
    if !state.theme.accepts(kc_context.theme_type) {
        return Err(RenderError::UnsupportedThemeType {
            theme_type: kc_context.theme_type.as_str().to_string(),
        });
    }

    tracing::info!(
        page_id = %kc_context.page_id,
        realm = %kc_context.realm.name,
        "Rendering page"
    );
    render_document(kc_context, &state.theme, &state.leptos_options).map(Html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use speezy_theme_core::AccountThemeImplementation;
    use tower::ServiceExt;

    fn app(preview_enabled: bool) -> Router {
        let config = ServerConfig {
            preview_enabled,
            ..ServerConfig::default()
        };
        router(AppState::new(
            config,
            LeptosOptions::builder().output_name("speezy-theme").build(),
        ))
    }

    async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        let response = app.oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    const LOGIN_PAYLOAD: &str = r#"{
        "pageId": "login.ftl",
        "realm": {"name": "acme", "registrationAllowed": true},
        "url": {"loginAction": "https://idp.example/login-actions/authenticate"}
    }"#;

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = send(app(false), "GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn renders_posted_payload() {
        let (status, body) = send(app(false), "POST", "/render", LOGIN_PAYLOAD).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="kc-form-login""#));
        assert!(body.contains(r#"action="https://idp.example/login-actions/authenticate""#));
        assert!(body.contains("Sign in to acme"));
    }

    #[tokio::test]
    async fn unknown_page_renders_fallback() {
        let payload = r#"{"pageId": "passkeys-setup.ftl", "realm": {"name": "acme"}}"#;
        let (status, body) = send(app(false), "POST", "/render", payload).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="kc-generic-page""#));
    }

    #[tokio::test]
    async fn malformed_payload_is_bad_request() {
        let (status, body) = send(app(false), "POST", "/render", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid render payload");
    }

    #[tokio::test]
    async fn account_payload_rejected_without_account_theme() {
        let payload = r#"{"pageId": "account.ftl", "themeType": "account", "realm": {"name": "acme"}}"#;
        let (status, _) = send(app(false), "POST", "/render", payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn account_payload_accepted_with_account_theme() {
        let mut config = ServerConfig::default();
        config.theme.account_theme_implementation = AccountThemeImplementation::SinglePage;
        let app = router(AppState::new(
            config,
            LeptosOptions::builder().output_name("speezy-theme").build(),
        ));
        let payload = r#"{"pageId": "account.ftl", "themeType": "account", "realm": {"name": "acme"}}"#;
        let (status, _) = send(app, "POST", "/render", payload).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn preview_disabled_by_default() {
        let (status, _) = send(app(false), "GET", "/preview/login.ftl", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn preview_renders_mock() {
        let (status, body) = send(app(true), "GET", "/preview/login.ftl", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="kc-social-providers""#));
        assert!(body.contains("Sign in to myrealm"));
    }

    #[tokio::test]
    async fn preview_applies_overrides() {
        let overrides = r#"{"realm": {"registrationAllowed": false}, "social": {"providers": []}}"#;
        let (status, body) = send(app(true), "POST", "/preview/login.ftl", overrides).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains(r#"id="kc-registration""#));
        assert!(!body.contains(r#"id="kc-social-providers""#));
    }

    #[tokio::test]
    async fn preview_rejects_non_object_overrides() {
        let (status, _) = send(app(true), "POST", "/preview/login.ftl", "[1, 2]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
