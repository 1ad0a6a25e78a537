//! Message lookup for the theme's text.
//!
//! Lookup order for a key: realm overrides from the payload, the bundle of
//! the current language, the English bundle, and finally the key itself.

use crate::context::{RenderContext, SupportedLanguage};
use crate::page::PageId;
use std::collections::BTreeMap;

/// Language used when the payload names none or one without a bundle.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Languages with a built-in bundle.
pub const BUNDLED_LANGUAGES: &[&str] = &["en", "fr"];

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "loginAccountTitle" => "Sign in to your account",
        "loginTitle" => "Sign in to {0}",
        "username" => "Username",
        "usernameOrEmail" => "Username or email",
        "email" => "Email",
        "password" => "Password",
        "passwordPlaceholder" => "Enter your password",
        "rememberMe" => "Remember me",
        "doForgotPassword" => "Forgot Password?",
        "doLogIn" => "Sign In",
        "noAccount" => "New user?",
        "doRegister" => "Register",
        "identity-provider-login-label" => "Or sign in with",
        "showPassword" => "Show password",
        "hidePassword" => "Hide password",
        "restartLoginTooltip" => "Restart login",
        "doTryAnotherWay" => "Try Another Way",
        "requiredFields" => "Required fields",
        "selectLanguage" => "Select a language",
        "securedBy" => "Secured by Keycloak",
        "backToApplication" => "\u{ab} Back to Application",
        "proceedWithAction" => "\u{bb} Click here to proceed",
        "errorTitle" => "We are sorry...",
        "logoutConfirmTitle" => "Logging out",
        "logoutConfirmHeader" => "Do you want to log out?",
        "doLogout" => "Logout",
        "pageExpiredTitle" => "Page has expired",
        "pageExpiredMsg1" => "To restart the login process",
        "pageExpiredMsg2" => "To continue the login process",
        "doClickHere" => "Click here",
        "termsTitle" => "Terms and Conditions",
        "registerTitle" => "Register",
        "emailForgotTitle" => "Forgot Your Password?",
        "updatePasswordTitle" => "Update password",
        "loginProfileTitle" => "Update Account Information",
        "emailVerifyTitle" => "Email verification",
        "loginChooseAuthenticator" => "Select login method",
        "webauthn-login-title" => "Passkey login",
        "loginTotpTitle" => "Mobile Authenticator Setup",
        "loginIdpReviewProfileTitle" => "Update Account Information",
        "codeSuccessTitle" => "Success code",
        "deleteAccountConfirm" => "Delete account confirmation",
        "frontchannel-logout.title" => "Logging out",
        "confirmLinkIdpTitle" => "Account already exists",
        "emailLinkIdpTitle" => "Link {0}",
        "saml.post-form.title" => "Authentication Redirect",
        "updateEmailTitle" => "Update email",
        "requiredAction.CONFIGURE_TOTP" => "Configure OTP",
        "requiredAction.TERMS_AND_CONDITIONS" => "Terms and Conditions",
        "requiredAction.UPDATE_PASSWORD" => "Update Password",
        "requiredAction.UPDATE_PROFILE" => "Update Profile",
        "requiredAction.VERIFY_EMAIL" => "Verify Email",
        _ => return None,
    };
    Some(text)
}

fn french(key: &str) -> Option<&'static str> {
    let text = match key {
        "loginAccountTitle" => "Connectez-vous \u{e0} votre compte",
        "loginTitle" => "Se connecter \u{e0} {0}",
        "username" => "Nom d'utilisateur",
        "usernameOrEmail" => "Nom d'utilisateur ou courriel",
        "email" => "Courriel",
        "password" => "Mot de passe",
        "passwordPlaceholder" => "Saisissez votre mot de passe",
        "rememberMe" => "Se souvenir de moi",
        "doForgotPassword" => "Mot de passe oubli\u{e9} ?",
        "doLogIn" => "Connexion",
        "noAccount" => "Nouvel utilisateur ?",
        "doRegister" => "Enregistrement",
        "identity-provider-login-label" => "Ou se connecter avec",
        "showPassword" => "Afficher le mot de passe",
        "hidePassword" => "Masquer le mot de passe",
        "restartLoginTooltip" => "Red\u{e9}marrer la connexion",
        "doTryAnotherWay" => "Essayer une autre m\u{e9}thode",
        "requiredFields" => "Champs obligatoires",
        "selectLanguage" => "Choisir une langue",
        "backToApplication" => "\u{ab} Revenir \u{e0} l'application",
        "proceedWithAction" => "\u{bb} Cliquez ici pour continuer",
        "errorTitle" => "Nous sommes d\u{e9}sol\u{e9}s...",
        "logoutConfirmTitle" => "D\u{e9}connexion",
        "logoutConfirmHeader" => "Voulez-vous vous d\u{e9}connecter ?",
        "doLogout" => "D\u{e9}connexion",
        "pageExpiredTitle" => "La page a expir\u{e9}",
        "pageExpiredMsg1" => "Pour recommencer le processus d'authentification",
        "pageExpiredMsg2" => "Pour continuer le processus d'authentification",
        "doClickHere" => "Cliquez ici",
        "termsTitle" => "Termes et Conditions",
        _ => return None,
    };
    Some(text)
}

fn bundle(language_tag: &str) -> fn(&str) -> Option<&'static str> {
    match language_tag {
        "fr" => french,
        _ => english,
    }
}

/// Replaces `{0}`, `{1}`, ... with the given arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (index, arg)| {
            text.replace(&format!("{{{index}}}"), arg)
        })
}

/// Translated text for one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18n {
    current_language: String,
    enabled_languages: Vec<SupportedLanguage>,
    overrides: BTreeMap<String, String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            current_language: FALLBACK_LANGUAGE.to_string(),
            enabled_languages: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }
}

impl I18n {
    /// Builds the lookup for a payload.
    #[must_use]
    pub fn from_context(ctx: &RenderContext) -> Self {
        let requested = ctx
            .locale
            .as_ref()
            .map(|locale| locale.current_language_tag.as_str())
            .unwrap_or(FALLBACK_LANGUAGE);
        let current_language = if BUNDLED_LANGUAGES.contains(&requested) {
            requested
        } else {
            tracing::debug!(
                language = requested,
                "No bundle for requested language, using fallback"
            );
            FALLBACK_LANGUAGE
        };

        Self {
            current_language: current_language.to_string(),
            enabled_languages: ctx
                .locale
                .as_ref()
                .map(|locale| locale.supported.clone())
                .unwrap_or_default(),
            overrides: ctx.message_overrides().cloned().unwrap_or_default(),
        }
    }

    /// Returns the language whose bundle is used.
    #[must_use]
    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// Returns the languages the realm offers.
    #[must_use]
    pub fn enabled_languages(&self) -> &[SupportedLanguage] {
        &self.enabled_languages
    }

    /// Returns the text for a key.
    #[must_use]
    pub fn msg(&self, key: &str) -> String {
        self.lookup(key).to_string()
    }

    /// Returns the text for a key with `{n}` placeholders filled in.
    #[must_use]
    pub fn msg_with(&self, key: &str, args: &[&str]) -> String {
        format_message(self.lookup(key), args)
    }

    /// Returns the document title for a payload.
    #[must_use]
    pub fn document_title(&self, ctx: &RenderContext) -> String {
        self.msg_with("loginTitle", &[ctx.realm.title()])
    }

    /// Returns the header text for a page.
    #[must_use]
    pub fn page_title(&self, page_id: &PageId, ctx: &RenderContext) -> String {
        match page_id {
            PageId::LoginIdpLinkEmail => self.msg_with(
                page_id.title_key(),
                &[ctx.idp_alias.as_deref().unwrap_or_default()],
            ),
            _ => self.msg(page_id.title_key()),
        }
    }

    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.overrides.get(key) {
            return text;
        }
        bundle(&self.current_language)(key)
            .or_else(|| english(key))
            .unwrap_or(key)
    }
}
