//! Password input with a show/hide toggle.

use crate::components::icons::{Icon, UiIcon};
use crate::pages::login::FIELD_ICON_CLASS;
use leptos::prelude::*;
use speezy_theme_core::{I18n, PasswordReveal};
use std::sync::Arc;

/// Wraps a password input with a button that reveals or masks its value.
///
/// The reveal state lives only in this component. Switching the input type
/// leaves the typed value alone.
#[component]
pub fn PasswordWrapper(
    i18n: Arc<I18n>,
    /// `id` of the wrapped input; the toggle points at it via `aria-controls`.
    #[prop(into)]
    password_input_id: String,
    #[prop(into)] input_class: String,
    #[prop(into)] placeholder: String,
    invalid: bool,
) -> impl IntoView {
    let reveal = RwSignal::new(PasswordReveal::default());

    view! {
        <div class="relative">
            <Icon icon=UiIcon::Lock class=FIELD_ICON_CLASS/>
            <input
                id=password_input_id.clone()
                name="password"
                type=move || reveal.get().input_type()
                tabindex="3"
                class=input_class
                autocomplete="current-password"
                placeholder=placeholder
                aria-invalid=invalid.then_some("true")
            />
            <button
                type="button"
                class="absolute inset-y-0 end-0 flex items-center px-3 text-muted-foreground hover:text-foreground"
                aria-label=move || i18n.msg(reveal.get().toggle_label_key())
                aria-controls=password_input_id
                on:click=move |_| reveal.update(PasswordReveal::toggle)
            >
                {move || {
                    if reveal.get().is_revealed() {
                        view! { <Icon icon=UiIcon::Eye/> }.into_any()
                    } else {
                        view! { <Icon icon=UiIcon::EyeOff/> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}
