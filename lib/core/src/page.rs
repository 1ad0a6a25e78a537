//! Page identifiers and page selection.
//!
//! The host names the page to render with a template file name such as
//! `login.ftl`. Parsing an identifier never fails: names the theme does not
//! know are kept verbatim in [`PageId::Other`] and routed to the fallback
//! page like every other page without a specialized component.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Macro to generate the page identifier enum and its template names.
macro_rules! define_page_ids {
    ($($(#[$meta:meta])* $variant:ident => $name:literal, $title:literal;)*) => {
        /// A login page kind, as named by the host.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum PageId {
            $($(#[$meta])* $variant,)*
            /// A page the theme does not know about.
            Other(String),
        }

        impl PageId {
            /// Every page kind the theme knows by name.
            pub const KNOWN: &'static [PageId] = &[$(PageId::$variant,)*];

            /// Returns the host's template name for this page.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $name,)*
                    Self::Other(name) => name,
                }
            }

            /// Returns the i18n key used as the page header by the fallback page.
            #[must_use]
            pub fn title_key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $title,)*
                    Self::Other(_) => "loginAccountTitle",
                }
            }

            fn from_name(name: &str) -> Self {
                match name {
                    $($name => Self::$variant,)*
                    other => Self::Other(other.to_string()),
                }
            }
        }
    };
}

define_page_ids! {
    /// Username and password login.
    Login => "login.ftl", "loginAccountTitle";
    /// Username-only first step of a split login.
    LoginUsername => "login-username.ftl", "loginAccountTitle";
    /// Password-only second step of a split login.
    LoginPassword => "login-password.ftl", "doLogIn";
    /// Self registration.
    Register => "register.ftl", "registerTitle";
    /// Informational message.
    Info => "info.ftl", "loginAccountTitle";
    /// Error message.
    Error => "error.ftl", "errorTitle";
    /// Forgot password form.
    LoginResetPassword => "login-reset-password.ftl", "emailForgotTitle";
    /// Required action: update password.
    LoginUpdatePassword => "login-update-password.ftl", "updatePasswordTitle";
    /// Required action: update profile.
    LoginUpdateProfile => "login-update-profile.ftl", "loginProfileTitle";
    /// One-time password entry.
    LoginOtp => "login-otp.ftl", "doLogIn";
    /// Email verification notice.
    LoginVerifyEmail => "login-verify-email.ftl", "emailVerifyTitle";
    /// Logout confirmation.
    LogoutConfirm => "logout-confirm.ftl", "logoutConfirmTitle";
    /// Terms and conditions.
    Terms => "terms.ftl", "termsTitle";
    /// Expired authentication session.
    LoginPageExpired => "login-page-expired.ftl", "pageExpiredTitle";
    /// Authenticator selection.
    SelectAuthenticator => "select-authenticator.ftl", "loginChooseAuthenticator";
    /// WebAuthn authentication.
    WebauthnAuthenticate => "webauthn-authenticate.ftl", "webauthn-login-title";
    /// OTP enrollment.
    LoginConfigTotp => "login-config-totp.ftl", "loginTotpTitle";
    /// Review of a profile brokered from an identity provider.
    IdpReviewUserProfile => "idp-review-user-profile.ftl", "loginIdpReviewProfileTitle";
    /// Display of an authorization code.
    Code => "code.ftl", "codeSuccessTitle";
    /// Account deletion confirmation.
    DeleteAccountConfirm => "delete-account-confirm.ftl", "deleteAccountConfirm";
    /// Front-channel logout.
    FrontchannelLogout => "frontchannel-logout.ftl", "frontchannel-logout.title";
    /// Identity provider account link confirmation.
    LoginIdpLinkConfirm => "login-idp-link-confirm.ftl", "confirmLinkIdpTitle";
    /// Identity provider account link by email.
    LoginIdpLinkEmail => "login-idp-link-email.ftl", "emailLinkIdpTitle";
    /// X.509 certificate information.
    LoginX509Info => "login-x509-info.ftl", "doLogIn";
    /// SAML POST binding auto-submit form.
    SamlPostForm => "saml-post-form.ftl", "saml.post-form.title";
    /// Required action: update email.
    UpdateEmail => "update-email.ftl", "updateEmailTitle";
}

impl From<String> for PageId {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for PageId {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.as_str().to_string()
    }
}

impl FromStr for PageId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PageId {
    /// Returns true if the identifier was not recognized.
    #[must_use]
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

/// The page component selected for a page identifier.
///
/// Specialized pages get their own variant; everything else goes to
/// `Default`, which carries the identifier so the fallback can adapt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// The themed username/password login page.
    Login,
    /// The generic renderer for all other page kinds.
    Default(PageId),
}

impl Page {
    /// Selects the page component for an identifier. Total over all inputs.
    #[must_use]
    pub fn for_id(id: &PageId) -> Self {
        let page = match id {
            PageId::Login => Self::Login,
            other => Self::Default(other.clone()),
        };
        if id.is_other() {
            tracing::debug!(page_id = %id, "Unrecognized page id, using fallback page");
        }
        page
    }

    /// Returns true if the theme's own styling replaces the default classes.
    #[must_use]
    pub fn uses_theme_css(&self) -> bool {
        matches!(self, Self::Login)
    }
}
