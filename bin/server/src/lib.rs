//! speezy login theme renderer and web server.
//!
//! The identity server posts a render payload; this crate renders the
//! matching page to HTML and ships a WASM client that hydrates it for the
//! interactive parts (password reveal, submit debounce, language switch).

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod pages;
pub mod template;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod render;
#[cfg(feature = "ssr")]
pub mod routes;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::{KC_CONTEXT_ELEMENT_ID, KC_THEME_ELEMENT_ID, KcPage};
    use leptos::prelude::*;
    use speezy_theme_core::{RenderContext, ThemeOptions};
    use std::sync::Arc;

    console_error_panic_hook::set_once();

    let Some(kc_context) = read_embedded::<RenderContext>(KC_CONTEXT_ELEMENT_ID) else {
        leptos::logging::error!("No render payload in the document, skipping hydration");
        return;
    };
    let theme = read_embedded::<ThemeOptions>(KC_THEME_ELEMENT_ID).unwrap_or_default();

    let kc_context = Arc::new(kc_context);
    let theme = Arc::new(theme);
    leptos::mount::hydrate_body(move || view! { <KcPage kc_context theme/> });
}

/// Reads JSON embedded in a script element by the server renderer.
#[cfg(feature = "hydrate")]
fn read_embedded<T: serde::de::DeserializeOwned>(element_id: &str) -> Option<T> {
    let text = leptos::prelude::document()
        .get_element_by_id(element_id)?
        .text_content()?;
    serde_json::from_str(&text)
        .map_err(|e| leptos::logging::error!("Invalid JSON in #{element_id}: {e}"))
        .ok()
}
