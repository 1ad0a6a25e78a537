//! Generic page for every page kind without its own component.

use crate::template::Template;
use leptos::prelude::*;
use speezy_theme_core::{ClassKey, I18n, KcClsx, PageId, RenderContext, ThemeOptions, cn};
use std::sync::Arc;

const LINK_CLASS: &str = "font-medium text-primary underline-offset-4 hover:underline";

/// Renders a page from whatever the payload carries, keeping the stock
/// Keycloak classes.
#[component]
pub fn DefaultPage(
    page_id: PageId,
    kc_context: Arc<RenderContext>,
    i18n: Arc<I18n>,
    theme: Arc<ThemeOptions>,
) -> impl IntoView {
    let kc_clsx = Arc::new(theme.kc_clsx(true));

    // Info and error pages show the message in the body instead of a banner.
    let (header, display_message, body) = match &page_id {
        PageId::Info => (
            kc_context
                .message_header
                .clone()
                .or_else(|| kc_context.message.as_ref().map(|m| m.summary.clone()))
                .unwrap_or_else(|| i18n.page_title(&page_id, &kc_context)),
            false,
            info_body(&kc_context, &i18n),
        ),
        PageId::Error => (
            i18n.page_title(&page_id, &kc_context),
            false,
            error_body(&kc_context, &i18n),
        ),
        PageId::LogoutConfirm => (
            i18n.page_title(&page_id, &kc_context),
            true,
            logout_confirm_body(&kc_context, &i18n, &kc_clsx),
        ),
        PageId::LoginPageExpired => (
            i18n.page_title(&page_id, &kc_context),
            true,
            page_expired_body(&kc_context, &i18n),
        ),
        _ => (
            i18n.page_title(&page_id, &kc_context),
            true,
            generic_body(&kc_context, &i18n),
        ),
    };

    view! {
        <Template
            kc_context=kc_context.clone()
            i18n=i18n.clone()
            theme=theme.clone()
            kc_clsx=kc_clsx.clone()
            header
            display_message
            display_info=false
            display_required_fields=false
            social_providers=None
            info=None
        >
            {body}
        </Template>
    }
}

/// Link back to the client application, unless the host asked to skip it.
fn back_to_application(ctx: &RenderContext, i18n: &I18n) -> Option<AnyView> {
    if ctx.skip_link {
        return None;
    }
    ctx.client.base_url.clone().map(|href| {
        view! {
            <p>
                <a id="backToApplication" href=href class=LINK_CLASS>
                    {i18n.msg("backToApplication")}
                </a>
            </p>
        }
        .into_any()
    })
}

fn info_body(ctx: &RenderContext, i18n: &I18n) -> AnyView {
    let summary = ctx.message.as_ref().map(|m| m.summary.clone());
    let required_actions = (!ctx.required_actions.is_empty()).then(|| {
        let actions = ctx
            .required_actions
            .iter()
            .map(|action| i18n.msg(&format!("requiredAction.{action}")))
            .collect::<Vec<_>>()
            .join(", ");
        view! { <b>{actions}</b> }
    });

    let link = if ctx.skip_link {
        None
    } else if let Some(href) = ctx.page_redirect_uri.clone() {
        Some(view! { <p><a href=href class=LINK_CLASS>{i18n.msg("backToApplication")}</a></p> }.into_any())
    } else if let Some(href) = ctx.action_uri.clone() {
        Some(view! { <p><a href=href class=LINK_CLASS>{i18n.msg("proceedWithAction")}</a></p> }.into_any())
    } else {
        back_to_application(ctx, i18n)
    };

    view! {
        <div id="kc-info-message" class="flex flex-col gap-3 text-sm">
            <p class="instruction">
                {summary}
                {required_actions.map(|actions| view! { ": " {actions} })}
            </p>
            {link}
        </div>
    }
    .into_any()
}

fn error_body(ctx: &RenderContext, i18n: &I18n) -> AnyView {
    let summary = ctx.message.as_ref().map(|m| m.summary.clone());
    view! {
        <div id="kc-error-message" class="flex flex-col gap-3 text-sm">
            <p class="instruction">{summary}</p>
            {back_to_application(ctx, i18n)}
        </div>
    }
    .into_any()
}

fn logout_confirm_body(ctx: &RenderContext, i18n: &I18n, kc_clsx: &KcClsx) -> AnyView {
    let code = ctx
        .logout_confirm
        .as_ref()
        .map(|logout| logout.code.clone())
        .unwrap_or_default();
    let skip_link = ctx
        .logout_confirm
        .as_ref()
        .is_some_and(|logout| logout.skip_link);
    view! {
        <div id="kc-logout-confirm" class="content-area flex flex-col gap-4 text-sm">
            <p class="instruction">{i18n.msg("logoutConfirmHeader")}</p>
            <form class="form-actions" action=ctx.url.logout_confirm_action.clone() method="POST">
                <input type="hidden" name="session_code" value=code/>
                <input
                    id="kc-logout"
                    name="confirmLogout"
                    type="submit"
                    value=i18n.msg("doLogout")
                    class=cn(&[
                        "w-full rounded-md px-4 py-2",
                        &kc_clsx.kc_clsx(&[ClassKey::ButtonClass, ClassKey::ButtonPrimaryClass, ClassKey::ButtonLargeClass]),
                    ])
                />
            </form>
            {(!skip_link).then(|| back_to_application(ctx, i18n)).flatten()}
        </div>
    }
    .into_any()
}

fn page_expired_body(ctx: &RenderContext, i18n: &I18n) -> AnyView {
    view! {
        <p id="instruction1" class="instruction text-sm">
            {i18n.msg("pageExpiredMsg1")}
            " "
            <a id="loginRestartLink" href=ctx.url.login_restart_flow_url.clone() class=LINK_CLASS>
                {i18n.msg("doClickHere")}
            </a>
            "."
            <br/>
            {i18n.msg("pageExpiredMsg2")}
            " "
            <a id="loginContinueLink" href=ctx.url.login_action.clone() class=LINK_CLASS>
                {i18n.msg("doClickHere")}
            </a>
            "."
        </p>
    }
    .into_any()
}

fn generic_body(ctx: &RenderContext, i18n: &I18n) -> AnyView {
    let restart = ctx.url.login_restart_flow_url.clone().map(|href| {
        view! {
            <a id="kc-restart-login" href=href class=LINK_CLASS>
                {i18n.msg("restartLoginTooltip")}
            </a>
        }
    });
    view! {
        <div id="kc-generic-page" class="text-center text-sm">
            {restart}
        </div>
    }
    .into_any()
}
