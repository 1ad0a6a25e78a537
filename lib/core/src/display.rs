//! Display rules for the login page and the surrounding page chrome.
//!
//! Everything the login page and template decide about what to show is
//! derived here from the payload, so the components only lay out the result.

use crate::context::RenderContext;
use crate::messages::Message;

/// Fields whose errors are reported together under the identity field.
pub const CREDENTIAL_FIELDS: [&str; 2] = ["username", "password"];

/// Label of the identity (username) field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityLabel {
    Username,
    UsernameOrEmail,
    Email,
}

impl IdentityLabel {
    /// Derives the login field label from the realm's email settings.
    #[must_use]
    pub fn for_login(login_with_email_allowed: bool, registration_email_as_username: bool) -> Self {
        if !login_with_email_allowed {
            Self::Username
        } else if !registration_email_as_username {
            Self::UsernameOrEmail
        } else {
            Self::Email
        }
    }

    /// Returns the i18n key for the label.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::UsernameOrEmail => "usernameOrEmail",
            Self::Email => "email",
        }
    }

    /// Builds the input placeholder from the translated label.
    #[must_use]
    pub fn placeholder(label: &str) -> String {
        format!("Enter your {}", label.to_lowercase())
    }
}

/// Which field carries the credential error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPlacement {
    Username,
    Password,
}

/// The credential error and where it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub placement: ErrorPlacement,
    pub text: String,
}

/// Grid layout of the identity-provider buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLayout {
    pub columns: u8,
}

impl SocialLayout {
    /// Lays out one to three providers side by side, more in a single column.
    #[must_use]
    pub fn for_count(count: usize) -> Option<Self> {
        let columns = match count {
            0 => return None,
            1..=3 => count as u8,
            _ => 1,
        };
        Some(Self { columns })
    }

    /// Returns the grid class for the column count.
    #[must_use]
    pub fn grid_class(&self) -> &'static str {
        match self.columns {
            2 => "grid-cols-2",
            3 => "grid-cols-3",
            _ => "grid-cols-1",
        }
    }
}

/// Horizontal alignment of the remember-me / forgot-password row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAlignment {
    SpaceBetween,
    End,
    Start,
}

impl SettingsAlignment {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::SpaceBetween => "justify-between",
            Self::End => "justify-end",
            Self::Start => "justify-start",
        }
    }
}

/// What the login page shows for a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginDisplay {
    /// The credential form is rendered at all.
    pub show_form: bool,
    pub show_username: bool,
    pub identity_label: IdentityLabel,
    pub show_remember_me: bool,
    pub show_forgot_password: bool,
    pub show_registration: bool,
    pub social: Option<SocialLayout>,
    pub field_error: Option<FieldError>,
    /// The template banner may be shown (no credential error is pending).
    pub display_message: bool,
    pub settings_alignment: SettingsAlignment,
}

impl LoginDisplay {
    /// Derives the login page display rules.
    #[must_use]
    pub fn derive(ctx: &RenderContext) -> Self {
        let realm = &ctx.realm;
        let show_username = !ctx.username_hidden;
        let show_remember_me = realm.remember_me && show_username;
        let show_forgot_password = realm.reset_password_allowed;

        let field_error = ctx
            .messages_per_field
            .exists_error(&CREDENTIAL_FIELDS)
            .then(|| ctx.messages_per_field.get_first_error(&CREDENTIAL_FIELDS))
            .flatten()
            .map(|text| FieldError {
                placement: if show_username {
                    ErrorPlacement::Username
                } else {
                    ErrorPlacement::Password
                },
                text: text.to_string(),
            });

        let social = if realm.password {
            SocialLayout::for_count(ctx.providers().len())
        } else {
            None
        };

        let settings_alignment = if show_remember_me && show_forgot_password {
            SettingsAlignment::SpaceBetween
        } else if show_forgot_password {
            SettingsAlignment::End
        } else {
            SettingsAlignment::Start
        };

        Self {
            show_form: realm.password,
            show_username,
            identity_label: IdentityLabel::for_login(
                realm.login_with_email_allowed,
                realm.registration_email_as_username,
            ),
            show_remember_me,
            show_forgot_password,
            show_registration: realm.password
                && realm.registration_allowed
                && !ctx.registration_disabled,
            social,
            display_message: field_error.is_none(),
            field_error,
            settings_alignment,
        }
    }

    /// Returns the credential error if it belongs under the given field.
    #[must_use]
    pub fn error_for(&self, placement: ErrorPlacement) -> Option<&str> {
        self.field_error
            .as_ref()
            .filter(|error| error.placement == placement)
            .map(|error| error.text.as_str())
    }

    /// Returns true if the credential inputs should be marked invalid.
    #[must_use]
    pub fn credentials_invalid(&self) -> bool {
        self.field_error.is_some()
    }
}

/// The header block at the top of the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderDisplay {
    /// The page title.
    Title,
    /// The attempted username, read-only, with a restart-login link.
    LockedUsername {
        attempted_username: String,
        label: IdentityLabel,
    },
}

/// What the page chrome shows for a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDisplay {
    pub banner: Option<Message>,
    pub header: HeaderDisplay,
    pub show_try_another_way: bool,
}

impl TemplateDisplay {
    /// Derives the chrome display rules; `display_message` comes from the page.
    #[must_use]
    pub fn derive(ctx: &RenderContext, display_message: bool) -> Self {
        let banner = ctx
            .message
            .as_ref()
            .filter(|_| display_message)
            .filter(|message| {
                message.message_type != crate::messages::MessageType::Warning
                    || !ctx.is_app_initiated_action
            })
            .cloned();

        let header = match &ctx.auth {
            Some(auth) if auth.show_username && !auth.show_reset_credentials => {
                HeaderDisplay::LockedUsername {
                    attempted_username: auth.attempted_username.clone().unwrap_or_default(),
                    label: if ctx.realm.registration_email_as_username {
                        IdentityLabel::Email
                    } else {
                        IdentityLabel::UsernameOrEmail
                    },
                }
            }
            _ => HeaderDisplay::Title,
        };

        Self {
            banner,
            header,
            show_try_another_way: ctx
                .auth
                .as_ref()
                .is_some_and(|auth| auth.show_try_another_way_link),
        }
    }
}
