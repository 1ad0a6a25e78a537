//! Inline SVG icons and identity-provider logos.

use leptos::prelude::*;
use speezy_theme_core::{IconDefinition, MessageType, cn};

/// Line icons drawn by the theme itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIcon {
    Eye,
    EyeOff,
    Lock,
    Mail,
    ArrowRight,
    CircleCheck,
    TriangleAlert,
    CircleAlert,
    Info,
    Globe,
    RefreshCcw,
    Shield,
    Cloud,
    ExternalLink,
}

impl UiIcon {
    /// Returns the banner icon for a message type.
    #[must_use]
    pub fn for_message(message_type: MessageType) -> Self {
        match message_type {
            MessageType::Success => Self::CircleCheck,
            MessageType::Warning => Self::TriangleAlert,
            MessageType::Error => Self::CircleAlert,
            MessageType::Info => Self::Info,
        }
    }

    /// Returns the line drawing for a solid provider icon.
    #[must_use]
    pub fn for_provider(icon: &IconDefinition) -> Self {
        match icon.name {
            "cloud" => Self::Cloud,
            _ => Self::ExternalLink,
        }
    }

    fn paths(self) -> &'static str {
        match self {
            Self::Eye => {
                r#"<path d="M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0"/><circle cx="12" cy="12" r="3"/>"#
            }
            Self::EyeOff => {
                r#"<path d="M10.733 5.076a10.744 10.744 0 0 1 11.205 6.575 1 1 0 0 1 0 .696 10.747 10.747 0 0 1-1.444 2.49"/><path d="M14.084 14.158a3 3 0 0 1-4.242-4.242"/><path d="M17.479 17.499a10.75 10.75 0 0 1-15.417-5.151 1 1 0 0 1 0-.696 10.75 10.75 0 0 1 4.446-5.143"/><path d="m2 2 20 20"/>"#
            }
            Self::Lock => {
                r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Self::CircleCheck => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
            Self::TriangleAlert => {
                r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
            Self::CircleAlert => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#
            }
            Self::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Self::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
            }
            Self::RefreshCcw => {
                r#"<path d="M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8"/><path d="M3 3v5h5"/><path d="M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16"/><path d="M16 16h5v5"/>"#
            }
            Self::Cloud => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
            Self::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Self::Shield => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
            }
        }
    }
}

/// Renders a line icon.
#[component]
pub fn Icon(icon: UiIcon, #[prop(into, optional)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        "size-4".to_string()
    } else {
        class
    };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=icon.paths()
        ></svg>
    }
}

/// Renders a provider logo: a lettered badge for brands, a line icon
/// otherwise. The Font Awesome class names stay on the element as hooks.
#[component]
pub fn ProviderIcon(icon: IconDefinition, #[prop(into)] class: String) -> impl IntoView {
    let class = cn(&["size-5 shrink-0", &class, &icon.classes()]);
    match icon.monogram() {
        Some(monogram) => {
            let font_size = if monogram.letters.len() > 1 { "10" } else { "13" };
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                    class=class
                    data-icon=icon.name
                >
                    <rect width="24" height="24" rx="6" fill=monogram.color></rect>
                    <text
                        x="12"
                        y="16.5"
                        text-anchor="middle"
                        font-size=font_size
                        font-weight="700"
                        font-family="system-ui, sans-serif"
                        fill="#ffffff"
                    >
                        {monogram.letters}
                    </text>
                </svg>
            }
            .into_any()
        }
        None => view! { <Icon icon=UiIcon::for_provider(&icon) class=class/> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_message_type_has_a_distinct_icon() {
        let icons = [
            MessageType::Success,
            MessageType::Warning,
            MessageType::Error,
            MessageType::Info,
        ]
        .map(UiIcon::for_message);
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn icon_markup_is_svg_primitives() {
        for icon in [
            UiIcon::Eye,
            UiIcon::EyeOff,
            UiIcon::Shield,
            UiIcon::Globe,
            UiIcon::Cloud,
            UiIcon::ExternalLink,
        ] {
            assert!(icon.paths().starts_with('<'));
            assert!(!icon.paths().contains("<script"));
        }
    }

    #[test]
    fn solid_provider_icons_map_to_line_icons() {
        use speezy_theme_core::resolve_icon;
        assert_eq!(
            UiIcon::for_provider(&resolve_icon(Some("fa fa-cloud"))),
            UiIcon::Cloud
        );
        assert_eq!(
            UiIcon::for_provider(&resolve_icon(Some("fa fa-myspace"))),
            UiIcon::ExternalLink
        );
    }
}
