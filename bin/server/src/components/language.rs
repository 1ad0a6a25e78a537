//! Language selector.

use crate::components::icons::{Icon, UiIcon};
use leptos::prelude::*;
use speezy_theme_core::{I18n, LanguageSwitcher};
use std::sync::Arc;

/// Dropdown of the realm's languages. Choosing one navigates the whole
/// window to that language's URL.
#[component]
pub fn LanguageSelect(switcher: LanguageSwitcher, i18n: Arc<I18n>) -> impl IntoView {
    let current = switcher.current_tag().to_string();
    let options = switcher
        .languages()
        .iter()
        .map(|language| {
            view! {
                <option
                    value=language.language_tag.clone()
                    selected=language.language_tag == current
                >
                    {language.label.clone()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div id="kc-locale" class="absolute end-4 top-4 flex items-center gap-2 text-sm">
            <Icon icon=UiIcon::Globe class="size-4 text-muted-foreground"/>
            <label for="kc-locale-select" class="sr-only">
                {i18n.msg("selectLanguage")}
            </label>
            <select
                id="kc-locale-select"
                class="rounded-md border bg-transparent px-2 py-1"
                on:change=move |ev| {
                    let tag = event_target_value(&ev);
                    match switcher.href_for(&tag) {
                        Some(href) => navigate_to(href),
                        None => tracing::warn!(language = %tag, "No URL for selected language"),
                    }
                }
            >
                {options}
            </select>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn navigate_to(href: &str) {
    if let Err(e) = window().location().set_href(href) {
        leptos::logging::error!("Failed to switch language: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn navigate_to(href: &str) {
    tracing::debug!(href, "Language navigation requested outside the browser");
}
