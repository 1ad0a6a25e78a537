//! Page dispatch.

use crate::pages::{DefaultPage, Login};
use leptos::prelude::*;
use speezy_theme_core::{I18n, Page, RenderContext, ThemeOptions};
use std::sync::Arc;

/// `id` of the script element carrying the render payload.
pub const KC_CONTEXT_ELEMENT_ID: &str = "kc-context";

/// `id` of the script element carrying the theme options.
pub const KC_THEME_ELEMENT_ID: &str = "kc-theme";

/// Renders the page component for the payload's page id.
///
/// Unrecognized page ids render the generic page.
#[component]
pub fn KcPage(kc_context: Arc<RenderContext>, theme: Arc<ThemeOptions>) -> impl IntoView {
    let i18n = Arc::new(I18n::from_context(&kc_context));

    match Page::for_id(&kc_context.page_id) {
        Page::Login => view! { <Login kc_context i18n theme/> }.into_any(),
        Page::Default(page_id) => view! { <DefaultPage page_id kc_context i18n theme/> }.into_any(),
    }
}
