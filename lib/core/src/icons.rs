//! Icon lookup for identity-provider buttons.
//!
//! The host describes a provider's icon with Font Awesome 4 style classes
//! (`"fa fa-google"`). These map onto the current Font Awesome icon names;
//! anything absent or unknown gets the generic external-link icon. Icons are
//! drawn inline, so no icon font has to be served: brands as a lettered
//! badge in the brand colour, the solid icons as line drawings.

/// Font Awesome icon family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    Brands,
    Solid,
}

impl IconStyle {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Brands => "fa-brands",
            Self::Solid => "fa-solid",
        }
    }
}

/// A resolved icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDefinition {
    pub style: IconStyle,
    pub name: &'static str,
}

impl IconDefinition {
    const fn brand(name: &'static str) -> Self {
        Self {
            style: IconStyle::Brands,
            name,
        }
    }

    const fn solid(name: &'static str) -> Self {
        Self {
            style: IconStyle::Solid,
            name,
        }
    }

    /// Returns the class list that renders the icon.
    #[must_use]
    pub fn classes(&self) -> String {
        format!("{} fa-{}", self.style.class(), self.name)
    }
}

/// A lettered badge standing in for a brand logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monogram {
    pub letters: &'static str,
    /// Background colour as a CSS hex value.
    pub color: &'static str,
}

impl IconDefinition {
    /// Returns the badge for a brand icon; `None` for solid icons.
    #[must_use]
    pub fn monogram(&self) -> Option<Monogram> {
        if self.style != IconStyle::Brands {
            return None;
        }
        let (letters, color) = match self.name {
            "google" => ("G", "#4285f4"),
            "microsoft" => ("M", "#00a4ef"),
            "facebook" => ("f", "#1877f2"),
            "instagram" => ("Ig", "#e4405f"),
            "x-twitter" => ("X", "#000000"),
            "square-linkedin" => ("in", "#0a66c2"),
            "stack-overflow" => ("SO", "#f58025"),
            "github" => ("GH", "#181717"),
            "gitlab" => ("GL", "#fc6d26"),
            "bitbucket" => ("B", "#0052cc"),
            "paypal" => ("P", "#003087"),
            _ => return None,
        };
        Some(Monogram { letters, color })
    }
}

/// Icon used for unknown providers.
pub const FALLBACK_ICON: IconDefinition = IconDefinition::solid("arrow-up-right-from-square");

const ICONS: &[(&str, IconDefinition)] = &[
    ("fa-google", IconDefinition::brand("google")),
    ("fa-windows", IconDefinition::brand("microsoft")),
    ("fa-facebook", IconDefinition::brand("facebook")),
    ("fa-instagram", IconDefinition::brand("instagram")),
    ("fa-twitter", IconDefinition::brand("x-twitter")),
    ("fa-linkedin", IconDefinition::brand("square-linkedin")),
    ("fa-stack-overflow", IconDefinition::brand("stack-overflow")),
    ("fa-github", IconDefinition::brand("github")),
    ("fa-gitlab", IconDefinition::brand("gitlab")),
    ("fa-bitbucket", IconDefinition::brand("bitbucket")),
    ("fa-paypal", IconDefinition::brand("paypal")),
    ("fa-cloud", IconDefinition::solid("cloud")),
];

/// Resolves a provider's icon classes to an icon. Never fails.
#[must_use]
pub fn resolve_icon(icon_classes: Option<&str>) -> IconDefinition {
    icon_classes
        .into_iter()
        .flat_map(str::split_whitespace)
        .filter(|token| *token != "fa")
        .find_map(lookup)
        .unwrap_or(FALLBACK_ICON)
}

fn lookup(key: &str) -> Option<IconDefinition> {
    ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, icon)| *icon)
}
