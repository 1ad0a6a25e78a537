//! Username/password login page.

use crate::components::{Icon, PasswordWrapper, ProviderIcon, UiIcon};
use crate::template::Template;
use leptos::prelude::*;
use speezy_theme_core::{
    ClassKey, ErrorPlacement, I18n, IdentityLabel, KcClsx, LoginDisplay, RenderContext,
    SocialLayout, SocialProvider, SubmitLatch, ThemeOptions, cn, resolve_icon,
};
use std::sync::Arc;

/// Icon drawn inside the left edge of a credential input.
pub(crate) const FIELD_ICON_CLASS: &str =
    "pointer-events-none absolute left-4 top-1/2 size-5 -translate-y-1/2 text-muted-foreground";

/// Login form with remember-me, password reset, registration and identity
/// provider buttons, each shown according to the realm settings.
#[component]
pub fn Login(
    kc_context: Arc<RenderContext>,
    i18n: Arc<I18n>,
    theme: Arc<ThemeOptions>,
) -> impl IntoView {
    let kc_clsx = Arc::new(theme.kc_clsx(false));
    let display = LoginDisplay::derive(&kc_context);
    let latch = RwSignal::new(SubmitLatch::default());

    let input_class = cn(&[
        "w-full rounded-md border bg-transparent px-3 py-2 text-sm",
        &kc_clsx.class(ClassKey::InputClass),
    ]);

    let username_field = display.show_username.then(|| {
        let label = i18n.msg(display.identity_label.message_key());
        let placeholder = IdentityLabel::placeholder(&label);
        view! {
            <div class=cn(&["flex flex-col gap-2", &kc_clsx.class(ClassKey::FormGroupClass)])>
                <label for="username" class=cn(&["text-sm font-medium", &kc_clsx.class(ClassKey::LabelClass)])>
                    {label}
                </label>
                <div class="relative">
                    <Icon icon=UiIcon::Mail class=FIELD_ICON_CLASS/>
                    <input
                        id="username"
                        name="username"
                        type="text"
                        tabindex="2"
                        class=cn(&[&input_class, "pl-11"])
                        value=kc_context.login.username.clone().unwrap_or_default()
                        autofocus=true
                        autocomplete="username"
                        placeholder=placeholder
                        aria-invalid=display.credentials_invalid().then_some("true")
                    />
                </div>
                <FieldErrorText text=display.error_for(ErrorPlacement::Username).map(str::to_string) kc_clsx=kc_clsx.clone()/>
            </div>
        }
    });

    let remember_me = display.show_remember_me.then(|| {
        view! {
            <div id="kc-form-options">
                <label class="flex items-center gap-2 text-sm">
                    <input
                        id="rememberMe"
                        name="rememberMe"
                        type="checkbox"
                        tabindex="5"
                        checked=kc_context.login.remember_me_checked()
                    />
                    {i18n.msg("rememberMe")}
                </label>
            </div>
        }
    });

    let forgot_password = display.show_forgot_password.then(|| {
        view! {
            <div class=kc_clsx.kc_clsx(&[ClassKey::FormOptionsWrapperClass])>
                <a
                    tabindex="6"
                    href=kc_context.url.login_reset_credentials_url.clone()
                    class="text-sm font-medium text-primary underline-offset-4 hover:underline"
                >
                    {i18n.msg("doForgotPassword")}
                </a>
            </div>
        }
    });

    let selected_credential = kc_context
        .auth
        .as_ref()
        .and_then(|auth| auth.selected_credential.clone());

    let form = display.show_form.then(|| {
        view! {
            <form
                id="kc-form-login"
                action=kc_context.url.login_action.clone()
                method="post"
                class="flex flex-col gap-4"
                on:submit=move |_| {
                    latch.update(|latch| {
                        latch.engage();
                    });
                }
            >
                {username_field}
                <div class=cn(&["flex flex-col gap-2", &kc_clsx.class(ClassKey::FormGroupClass)])>
                    <label for="password" class=cn(&["text-sm font-medium", &kc_clsx.class(ClassKey::LabelClass)])>
                        {i18n.msg("password")}
                    </label>
                    <PasswordWrapper
                        i18n=i18n.clone()
                        password_input_id="password"
                        input_class=cn(&[&input_class, "pl-11 pr-10"])
                        placeholder=i18n.msg("passwordPlaceholder")
                        invalid=display.credentials_invalid()
                    />
                    <FieldErrorText text=display.error_for(ErrorPlacement::Password).map(str::to_string) kc_clsx=kc_clsx.clone()/>
                </div>
                <div class=cn(&[
                    "flex items-center",
                    display.settings_alignment.class(),
                    &kc_clsx.kc_clsx(&[ClassKey::FormGroupClass, ClassKey::FormSettingClass]),
                ])>
                    {remember_me}
                    {forgot_password}
                </div>
                <div id="kc-form-buttons" class=kc_clsx.kc_clsx(&[ClassKey::FormGroupClass])>
                    <input type="hidden" id="id-hidden-input" name="credentialId" value=selected_credential/>
                    <button
                        id="kc-login"
                        name="login"
                        type="submit"
                        tabindex="7"
                        disabled=move || latch.get().is_disabled()
                        class=cn(&[
                            "inline-flex w-full items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground",
                            &kc_clsx.kc_clsx(&[ClassKey::ButtonClass, ClassKey::ButtonPrimaryClass, ClassKey::ButtonBlockClass, ClassKey::ButtonLargeClass]),
                        ])
                    >
                        {i18n.msg("doLogIn")}
                        <Icon icon=UiIcon::ArrowRight class="ml-2 size-5"/>
                    </button>
                </div>
            </form>
        }
    });

    let social_providers = display.social.map(|layout| {
        view! {
            <SocialProviders
                providers=kc_context.providers().to_vec()
                layout
                label=i18n.msg("identity-provider-login-label")
                kc_clsx=kc_clsx.clone()
            />
        }
        .into_any()
    });

    let info = display.show_registration.then(|| {
        view! {
            <div id="kc-registration-container">
                <div id="kc-registration">
                    <span>
                        {i18n.msg("noAccount")}
                        " "
                        <a
                            tabindex="8"
                            href=kc_context.url.registration_url.clone()
                            class="font-medium text-primary underline-offset-4 hover:underline"
                        >
                            {i18n.msg("doRegister")}
                        </a>
                    </span>
                </div>
            </div>
        }
        .into_any()
    });

    view! {
        <Template
            kc_context=kc_context.clone()
            i18n=i18n.clone()
            theme=theme.clone()
            kc_clsx=kc_clsx.clone()
            header=i18n.msg("loginAccountTitle")
            display_message=display.display_message
            display_info=display.show_registration
            display_required_fields=false
            social_providers
            info
        >
            <div id="kc-form">
                <div id="kc-form-wrapper">{form}</div>
            </div>
        </Template>
    }
}

/// Error text under a credential input. Renders nothing without text.
#[component]
fn FieldErrorText(text: Option<String>, kc_clsx: Arc<KcClsx>) -> impl IntoView {
    text.map(|text| {
        view! {
            <span
                id="input-error"
                class=cn(&["text-sm text-destructive", &kc_clsx.class(ClassKey::InputErrorMessageClass)])
                aria-live="polite"
            >
                {text}
            </span>
        }
    })
}

/// Identity provider buttons in a grid sized to the number of providers.
#[component]
fn SocialProviders(
    providers: Vec<SocialProvider>,
    layout: SocialLayout,
    #[prop(into)] label: String,
    kc_clsx: Arc<KcClsx>,
) -> impl IntoView {
    let buttons = providers
        .into_iter()
        .map(|provider| {
            let icon = resolve_icon(provider.icon_classes.as_deref());
            view! {
                <li>
                    <a
                        id=format!("social-{}", provider.alias)
                        href=provider.login_url
                        class="flex w-full items-center justify-center gap-2 rounded-md border px-4 py-2 text-sm font-medium hover:bg-muted"
                    >
                        <ProviderIcon icon class=kc_clsx.class(ClassKey::CommonLogoIdP)/>
                        <span>{provider.display_name}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            id="kc-social-providers"
            class=cn(&["mt-6", &kc_clsx.class(ClassKey::FormSocialAccountSectionClass)])
        >
            <div class="relative my-4 flex items-center">
                <span class="flex-1 border-t"></span>
                <span class="px-2 text-xs uppercase text-muted-foreground">{label}</span>
                <span class="flex-1 border-t"></span>
            </div>
            <ul class=cn(&["grid gap-2", layout.grid_class()])>{buttons}</ul>
        </div>
    }
}
