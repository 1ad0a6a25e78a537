//! CSS class composition.
//!
//! Keycloak's stock login theme names its styling hooks with class keys
//! (`kcInputClass`, `kcButtonClass`, ...). A page either keeps the stock
//! classes for a key or drops them in favour of the theme's own styling;
//! theme overrides for a key are appended in both cases.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Macro to generate the class key enum with the stock class for each key.
macro_rules! define_class_keys {
    ($($variant:ident => $name:literal, $default:literal;)*) => {
        /// A Keycloak styling hook.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ClassKey {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl ClassKey {
            /// Every class key.
            pub const ALL: &'static [ClassKey] = &[$(ClassKey::$variant,)*];

            /// Returns the key's name as Keycloak spells it.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns the stock Keycloak classes for the key.
            #[must_use]
            pub fn default_classes(&self) -> &'static str {
                match self {
                    $(Self::$variant => $default,)*
                }
            }
        }
    };
}

define_class_keys! {
    HtmlClass => "kcHtmlClass", "login-pf";
    BodyClass => "kcBodyClass", "";
    LoginClass => "kcLoginClass", "login-pf-page";
    HeaderClass => "kcHeaderClass", "login-pf-page-header";
    HeaderWrapperClass => "kcHeaderWrapperClass", "";
    FormCardClass => "kcFormCardClass", "card-pf";
    FormHeaderClass => "kcFormHeaderClass", "login-pf-header";
    ContentWrapperClass => "kcContentWrapperClass", "row";
    LabelWrapperClass => "kcLabelWrapperClass", "col-xs-12 col-sm-12 col-md-12 col-lg-12";
    FormGroupClass => "kcFormGroupClass", "form-group";
    FormSettingClass => "kcFormSettingClass", "login-pf-settings";
    FormOptionsClass => "kcFormOptionsClass", "col-xs-12 col-sm-12 col-md-12 col-lg-12";
    FormOptionsWrapperClass => "kcFormOptionsWrapperClass", "";
    FormButtonsClass => "kcFormButtonsClass", "col-xs-12 col-sm-12 col-md-12 col-lg-12";
    InputClass => "kcInputClass", "pf-c-form-control";
    InputWrapperClass => "kcInputWrapperClass", "col-xs-12 col-sm-12 col-md-12 col-lg-12";
    InputErrorMessageClass => "kcInputErrorMessageClass", "pf-c-form__helper-text pf-m-error required kc-feedback-text";
    LabelClass => "kcLabelClass", "pf-c-form__label pf-c-form__label-text";
    ButtonClass => "kcButtonClass", "pf-c-button";
    ButtonPrimaryClass => "kcButtonPrimaryClass", "pf-m-primary";
    ButtonDefaultClass => "kcButtonDefaultClass", "btn-default";
    ButtonBlockClass => "kcButtonBlockClass", "pf-m-block";
    ButtonLargeClass => "kcButtonLargeClass", "btn-lg";
    FormSocialAccountSectionClass => "kcFormSocialAccountSectionClass", "";
    CommonLogoIdP => "kcCommonLogoIdP", "kc-social-provider-logo kc-social-gray";
    AlertClass => "kcAlertClass", "pf-c-alert pf-m-inline";
    AlertTitleClass => "kcAlertTitleClass", "pf-c-alert__title kc-feedback-text";
    LocaleMainClass => "kcLocaleMainClass", "pf-c-dropdown";
    InfoAreaWrapperClass => "kcInfoAreaWrapperClass", "";
    SignUpClass => "kcSignUpClass", "login-pf-signup";
}

impl ClassKey {
    /// Looks up a key by name, ignoring ASCII case.
    ///
    /// Configuration sources may lowercase keys, so names are matched loosely.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }
}

/// Resolves class keys to class strings for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KcClsx {
    do_use_default_css: bool,
    overrides: BTreeMap<ClassKey, String>,
}

impl KcClsx {
    /// Creates a resolver. With `do_use_default_css` off, only overrides apply.
    #[must_use]
    pub fn new(do_use_default_css: bool, overrides: BTreeMap<ClassKey, String>) -> Self {
        Self {
            do_use_default_css,
            overrides,
        }
    }

    #[must_use]
    pub fn uses_default_css(&self) -> bool {
        self.do_use_default_css
    }

    /// Returns the classes for a list of keys.
    #[must_use]
    pub fn kc_clsx(&self, keys: &[ClassKey]) -> String {
        let parts: Vec<&str> = keys
            .iter()
            .flat_map(|key| {
                let stock = self
                    .do_use_default_css
                    .then(|| key.default_classes());
                let custom = self.overrides.get(key).map(String::as_str);
                [stock, custom]
            })
            .flatten()
            .collect();
        cn(&parts)
    }

    /// Returns the classes for a single key.
    #[must_use]
    pub fn class(&self, key: ClassKey) -> String {
        self.kc_clsx(&[key])
    }
}

/// Joins class fragments, skipping empty ones and exact duplicates.
///
/// Fragments may themselves hold several classes; each class is kept once,
/// in first-seen order.
#[must_use]
pub fn cn(parts: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in parts.iter().flat_map(|part| part.split_whitespace()) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}
