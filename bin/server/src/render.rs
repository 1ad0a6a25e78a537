//! Server-side document rendering.

use crate::app::{KC_CONTEXT_ELEMENT_ID, KC_THEME_ELEMENT_ID, KcPage};
use crate::error::RenderError;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use speezy_theme_core::{ClassKey, I18n, Page, RenderContext, ThemeOptions};
use std::sync::Arc;

/// Escapes JSON for embedding in a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `<` decodes to the same
/// text, so the element cannot be closed early.
fn embed_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Renders the full HTML document for a payload.
///
/// # Errors
///
/// Returns `RenderError::Encoding` if the payload or options cannot be
/// serialized for the hydration script.
pub fn render_document(
    kc_context: &RenderContext,
    theme: &ThemeOptions,
    options: &LeptosOptions,
) -> Result<String, RenderError> {
    let payload = kc_context.to_json().map_err(|e| RenderError::Encoding {
        details: e.to_string(),
    })?;
    let theme_json = serde_json::to_string(theme).map_err(|e| RenderError::Encoding {
        details: e.to_string(),
    })?;

    tracing::debug!(page_id = %kc_context.page_id, "Rendering document");

    let kc_context = Arc::new(kc_context.clone());
    let theme = Arc::new(theme.clone());
    let options = options.clone();

    let owner = Owner::new();
    let html = owner.with(move || {
        shell(kc_context, theme, options, embed_json(&payload), embed_json(&theme_json))
            .to_html()
    });
    Ok(html)
}

fn shell(
    kc_context: Arc<RenderContext>,
    theme: Arc<ThemeOptions>,
    options: LeptosOptions,
    payload: String,
    theme_json: String,
) -> impl IntoView {
    let page = Page::for_id(&kc_context.page_id);
    let kc_clsx = theme.kc_clsx(!page.uses_theme_css());
    let i18n = I18n::from_context(&kc_context);
    let title = i18n.document_title(&kc_context);
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);

    view! {
        <!DOCTYPE html>
        <html lang=i18n.current_language().to_string() class=kc_clsx.class(ClassKey::HtmlClass)>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="robots" content="noindex, nofollow"/>
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet/>
                <script id=KC_CONTEXT_ELEMENT_ID type="application/json" inner_html=payload></script>
                <script id=KC_THEME_ELEMENT_ID type="application/json" inner_html=theme_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
            </head>
            <body class=kc_clsx.class(ClassKey::BodyClass)>
                <KcPage kc_context theme/>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speezy_theme_core::mock::mock_context;
    use speezy_theme_core::{MessagesPerField, PageId};

    fn options() -> LeptosOptions {
        LeptosOptions::builder().output_name("speezy-theme").build()
    }

    fn render(ctx: &RenderContext) -> String {
        render_document(ctx, &ThemeOptions::default(), &options()).expect("renders")
    }

    /// Returns the markup following the first occurrence of `marker`.
    fn after<'a>(html: &'a str, marker: &str) -> &'a str {
        let start = html.find(marker).expect("marker present");
        &html[start..]
    }

    #[test]
    fn login_page_renders_form() {
        let html = render(&mock_context(&PageId::Login));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sign in to myrealm</title>"));
        assert!(html.contains(r#"id="kc-form-login""#));
        assert!(html.contains(r#"id="username""#));
        assert!(html.contains(r#"id="password""#));
        assert!(html.contains(r#"id="rememberMe""#));
        assert!(html.contains(r#"id="kc-registration""#));
        assert!(html.contains(r#"id="kc-social-providers""#));
        assert!(html.contains("fa-brands fa-google"));
        assert!(html.contains("fa-brands fa-github"));
    }

    #[test]
    fn every_known_page_renders() {
        for id in PageId::KNOWN {
            let html = render(&mock_context(id));
            let title = after(&html, r#"id="kc-page-title""#);
            let end = title.find("</h").expect("title closes");
            assert!(!title[..end].contains('{'), "{id} title has an unfilled placeholder");
        }
    }

    #[test]
    fn idp_link_title_names_the_provider() {
        let html = render(&mock_context(&PageId::LoginIdpLinkEmail));
        assert!(after(&html, r#"id="kc-page-title""#).contains("Link github"));
    }

    #[test]
    fn provider_icons_are_inline_svg() {
        let html = render(&mock_context(&PageId::Login));
        let social = after(&html, r#"id="kc-social-providers""#);
        let google = after(social, r#"id="social-google""#);
        let end = google.find("</a>").expect("button closes");
        assert!(google[..end].contains("<svg"));
        assert!(!google[..end].contains("<i "));
        assert!(!html.to_lowercase().contains("fontawesome"));
    }

    #[test]
    fn login_field_icons_and_autocomplete() {
        let html = render(&mock_context(&PageId::Login));
        let username = after(&html, r#"id="username""#);
        let tag_end = username.find('>').expect("tag closes");
        assert!(username[..tag_end].contains(r#"autocomplete="username""#));

        let button = after(&html, r#"id="kc-login""#);
        let end = button.find("</button>").expect("button closes");
        assert!(button[..end].contains("Sign In"));
        assert!(button[..end].contains("<svg"));
    }

    #[test]
    fn password_input_never_carries_a_value() {
        let mut ctx = mock_context(&PageId::Login);
        ctx.login.username = Some("alice".to_string());
        let html = render(&ctx);
        let password = after(&html, r#"<input id="password""#);
        let tag_end = password.find('>').expect("tag closes");
        assert!(!password[..tag_end].contains("value="));
    }

    #[test]
    fn unknown_page_renders_fallback() {
        let html = render(&RenderContext::new(PageId::from("brand-new.ftl")));
        assert!(html.contains(r#"id="kc-generic-page""#));
        assert!(!html.contains(r#"id="kc-form-login""#));
    }

    #[test]
    fn login_drops_default_classes_but_fallback_keeps_them() {
        let login = render(&mock_context(&PageId::Login));
        assert!(!login.contains("login-pf-page"));

        let error = render(&mock_context(&PageId::Error));
        assert!(error.contains("login-pf-page"));
        assert!(error.contains(r#"class="login-pf""#));
    }

    #[test]
    fn payload_is_embedded_for_hydration() {
        let mut ctx = mock_context(&PageId::Login);
        ctx.login.username = Some("</script><script>alert(1)</script>".to_string());
        let html = render(&ctx);

        let script = after(&html, r#"id="kc-context""#);
        let end = script.find("</script>").expect("script closes");
        let embedded = &script[script.find('>').expect("tag closes") + 1..end];
        let parsed = RenderContext::from_json(embedded).expect("embedded payload parses");
        assert_eq!(parsed.login.username, ctx.login.username);
    }

    #[test]
    fn host_text_is_escaped() {
        let mut ctx = mock_context(&PageId::Error);
        ctx.message = Some(speezy_theme_core::Message {
            message_type: speezy_theme_core::MessageType::Error,
            summary: "<b>bold</b>".to_string(),
        });
        let html = render(&ctx);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn credential_error_under_username_field() {
        let mut ctx = mock_context(&PageId::Login);
        ctx.messages_per_field = MessagesPerField::new().with_error("password", "Invalid credentials");
        let html = render(&ctx);

        assert_eq!(html.matches(r#"id="input-error""#).count(), 1);
        let username = html.find(r#"id="username""#).expect("username field");
        let password = html.find(r#"id="password""#).expect("password field");
        let error = html.find(r#"id="input-error""#).expect("error rendered");
        assert!(username < error && error < password);
        assert!(after(&html, r#"id="input-error""#).contains("Invalid credentials"));
        assert!(html.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn credential_error_under_password_when_username_hidden() {
        let mut ctx = mock_context(&PageId::Login);
        ctx.username_hidden = true;
        ctx.messages_per_field = MessagesPerField::new().with_error("username", "Account disabled");
        let html = render(&ctx);

        assert!(!html.contains(r#"id="username""#));
        assert_eq!(html.matches(r#"id="input-error""#).count(), 1);
        let password = html.find(r#"id="password""#).expect("password field");
        let error = html.find(r#"id="input-error""#).expect("error rendered");
        assert!(password < error);
    }

    #[test]
    fn banner_hidden_when_field_error_shown() {
        let mut ctx = mock_context(&PageId::Login);
        ctx.message = Some(speezy_theme_core::Message {
            message_type: speezy_theme_core::MessageType::Error,
            summary: "Invalid username or password.".to_string(),
        });
        ctx.messages_per_field = MessagesPerField::new().with_error("username", "Invalid username or password.");
        let html = render(&ctx);
        assert!(!html.contains(r#"role="alert""#));
    }

    #[test]
    fn password_starts_masked_and_submit_enabled() {
        let html = render(&mock_context(&PageId::Login));
        let password = after(&html, r#"id="password""#);
        let tag_end = password.find('>').expect("tag closes");
        assert!(password[..tag_end].contains(r#"type="password""#));
        assert!(html.contains(r#"aria-label="Show password""#));

        let button = after(&html, r#"id="kc-login""#);
        let tag_end = button.find('>').expect("tag closes");
        assert!(!button[..tag_end].contains("disabled"));
    }

    #[test]
    fn language_selector_lists_locales() {
        let html = render(&mock_context(&PageId::Login));
        assert!(html.contains(r#"id="kc-locale-select""#));
        assert!(html.contains("Fran\u{e7}ais"));
    }

    #[test]
    fn french_payload_renders_french() {
        let mut ctx = mock_context(&PageId::Login);
        if let Some(locale) = ctx.locale.as_mut() {
            locale.current_language_tag = "fr".to_string();
        }
        let html = render(&ctx);
        assert!(html.contains(r#"lang="fr""#));
        assert!(html.contains("Connexion"));
    }

    #[test]
    fn logout_confirm_posts_session_code() {
        let html = render(&mock_context(&PageId::LogoutConfirm));
        assert!(html.contains(r#"name="session_code""#));
        assert!(html.contains("mock-session-code"));
        assert!(html.contains(r#"id="kc-logout""#));
    }

    #[test]
    fn info_lists_required_actions() {
        let html = render(&mock_context(&PageId::Info));
        assert!(html.contains("Update Password, Verify Email"));
        assert!(html.contains("Perform the following action(s)"));
    }
}
