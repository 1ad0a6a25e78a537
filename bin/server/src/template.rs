//! Page chrome shared by every login page.

use crate::components::{Icon, LanguageSelect, UiIcon};
use leptos::prelude::*;
use speezy_theme_core::{
    ClassKey, HeaderDisplay, I18n, IdentityLabel, KcClsx, LanguageSwitcher, Message, MessageType,
    RenderContext, TemplateDisplay, ThemeOptions, cn,
};
use std::sync::Arc;

/// Layout around a page body: brand, language selector, message banner,
/// header, try-another-way form, social and info sections, and footer.
#[component]
pub fn Template(
    kc_context: Arc<RenderContext>,
    i18n: Arc<I18n>,
    theme: Arc<ThemeOptions>,
    kc_clsx: Arc<KcClsx>,
    /// Title shown above the body.
    #[prop(into)]
    header: String,
    /// Whether the payload's message is shown as a banner.
    display_message: bool,
    /// Whether the info section is shown.
    display_info: bool,
    /// Whether the header carries the required-fields hint.
    display_required_fields: bool,
    social_providers: Option<AnyView>,
    info: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    let display = TemplateDisplay::derive(&kc_context, display_message);
    let switcher = LanguageSwitcher::new(kc_context.locale.as_ref());

    let language_select = switcher
        .is_visible()
        .then(|| view! { <LanguageSelect switcher i18n=i18n.clone()/> });

    let banner = display
        .banner
        .map(|message| view! { <MessageBanner message kc_clsx=kc_clsx.clone()/> });

    let header_node = match display.header {
        HeaderDisplay::Title => view! {
            <h2 id="kc-page-title" class="text-center text-2xl font-semibold tracking-tight">
                {header}
            </h2>
        }
        .into_any(),
        HeaderDisplay::LockedUsername {
            attempted_username,
            label,
        } => view! {
            <LockedUsername
                attempted_username
                label
                restart_url=kc_context.url.login_restart_flow_url.clone()
                i18n=i18n.clone()
                kc_clsx=kc_clsx.clone()
            />
        }
        .into_any(),
    };

    let header_block = if display_required_fields {
        view! {
            <div class=kc_clsx.kc_clsx(&[ClassKey::ContentWrapperClass])>
                <div class="mb-2 text-end text-xs text-muted-foreground">
                    <span class="text-destructive">"*"</span>
                    " "
                    {i18n.msg("requiredFields")}
                </div>
                <div>{header_node}</div>
            </div>
        }
        .into_any()
    } else {
        header_node
    };

    let try_another_way = display.show_try_another_way.then(|| {
        view! {
            <form
                id="kc-select-try-another-way-form"
                action=kc_context.url.login_action.clone()
                method="post"
                class="mt-4 text-center"
            >
                <input type="hidden" name="tryAnotherWay" value="on"/>
                <button
                    type="submit"
                    id="try-another-way"
                    class="text-sm font-medium text-primary underline-offset-4 hover:underline"
                >
                    {i18n.msg("doTryAnotherWay")}
                </button>
            </form>
        }
    });

    let info_section = info.filter(|_| display_info).map(|info| {
        view! {
            <div id="kc-info" class=cn(&["mt-6 text-center text-sm", &kc_clsx.class(ClassKey::SignUpClass)])>
                <div id="kc-info-wrapper" class=kc_clsx.kc_clsx(&[ClassKey::InfoAreaWrapperClass])>
                    {info}
                </div>
            </div>
        }
    });

    view! {
        <div class=cn(&[
            "relative flex min-h-screen flex-col items-center justify-center bg-muted/40 px-4 py-10",
            &kc_clsx.class(ClassKey::LoginClass),
        ])>
            {language_select}
            <div id="kc-header" class=kc_clsx.kc_clsx(&[ClassKey::HeaderClass])>
                <div
                    id="kc-header-wrapper"
                    class=cn(&["mb-6 flex items-center gap-3", &kc_clsx.class(ClassKey::HeaderWrapperClass)])
                >
                    <img src=theme.logo_path.clone() alt=format!("{} logo", theme.brand) class="size-10"/>
                    <span class="text-xl font-semibold">{theme.brand.clone()}</span>
                </div>
            </div>
            <div class=cn(&[
                "w-full max-w-md rounded-xl border bg-card p-8 shadow-sm",
                &kc_clsx.class(ClassKey::FormCardClass),
            ])>
                <header class=cn(&["mb-6", &kc_clsx.class(ClassKey::FormHeaderClass)])>
                    {header_block}
                </header>
                <div id="kc-content">
                    <div id="kc-content-wrapper">
                        {banner}
                        {children()}
                        {try_another_way}
                        {social_providers}
                        {info_section}
                    </div>
                </div>
            </div>
            <footer class="mt-6 flex items-center gap-1 text-xs text-muted-foreground">
                <Icon icon=UiIcon::Shield class="size-3"/>
                {i18n.msg("securedBy")}
            </footer>
        </div>
    }
}

/// The payload's message as an alert above the body.
#[component]
fn MessageBanner(message: Message, kc_clsx: Arc<KcClsx>) -> impl IntoView {
    let tone = match message.message_type {
        MessageType::Success => "border-green-600/40 text-green-700",
        MessageType::Warning => "border-amber-500/40 text-amber-700",
        MessageType::Error => "border-destructive/40 text-destructive",
        MessageType::Info => "border-sky-500/40 text-sky-700",
    };
    view! {
        <div
            role="alert"
            class=cn(&[
                "mb-4 flex items-start gap-2 rounded-md border px-3 py-2 text-sm",
                tone,
                &format!("alert-{}", message.message_type.as_str()),
                &kc_clsx.class(ClassKey::AlertClass),
            ])
        >
            <Icon icon=UiIcon::for_message(message.message_type) class="mt-0.5 size-4 shrink-0"/>
            <span class=kc_clsx.kc_clsx(&[ClassKey::AlertTitleClass])>{message.summary}</span>
        </div>
    }
}

/// The attempted username, read-only, with a link that restarts the flow.
#[component]
fn LockedUsername(
    attempted_username: String,
    label: IdentityLabel,
    restart_url: Option<String>,
    i18n: Arc<I18n>,
    kc_clsx: Arc<KcClsx>,
) -> impl IntoView {
    let label_text = i18n.msg(label.message_key());
    let tooltip = i18n.msg("restartLoginTooltip");
    view! {
        <div id="kc-username" class=cn(&["flex flex-col gap-2", &kc_clsx.class(ClassKey::FormGroupClass)])>
            <label for="kc-attempted-username" class="text-sm font-medium">{label_text}</label>
            <div class="flex items-center gap-2">
                <input
                    id="kc-attempted-username"
                    value=attempted_username
                    disabled=true
                    class=cn(&["flex-1 rounded-md border px-3 py-2", &kc_clsx.class(ClassKey::InputClass)])
                />
                <a
                    id="reset-login"
                    href=restart_url
                    title=tooltip.clone()
                    aria-label=tooltip
                    class="rounded-md p-2 hover:bg-muted"
                >
                    <Icon icon=UiIcon::RefreshCcw/>
                </a>
            </div>
        </div>
    }
}
