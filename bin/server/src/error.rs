//! Domain error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// Errors returned by the render and preview routes.
#[derive(Debug)]
pub enum RenderError {
    /// The request body is not a valid render payload.
    InvalidPayload { details: String },
    /// The payload's theme type is not implemented by this theme.
    UnsupportedThemeType { theme_type: String },
    /// Preview routes are switched off.
    PreviewDisabled,
    /// The payload could not be embedded in the document.
    Encoding { details: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayload { details } => write!(f, "invalid render payload: {}", details),
            Self::UnsupportedThemeType { theme_type } => {
                write!(f, "theme type '{}' is not implemented", theme_type)
            }
            Self::PreviewDisabled => write!(f, "preview is disabled"),
            Self::Encoding { details } => write!(f, "failed to encode payload: {}", details),
        }
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    /// Returns the HTTP status for the error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
            Self::UnsupportedThemeType { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PreviewDisabled => StatusCode::NOT_FOUND,
            Self::Encoding { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe message for the response body.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidPayload { .. } => "Invalid render payload",
            Self::UnsupportedThemeType { .. } => "Unsupported theme type",
            Self::PreviewDisabled => "Not found",
            Self::Encoding { .. } => "Internal error",
        }
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Render failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Render request rejected");
        }
        (status, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(
            RenderError::InvalidPayload {
                details: "x".to_string()
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RenderError::UnsupportedThemeType {
                theme_type: "account".to_string()
            }
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(RenderError::PreviewDisabled.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn public_message_hides_details() {
        let error = RenderError::InvalidPayload {
            details: "missing field `realm` at line 1".to_string(),
        };
        assert!(error.to_string().contains("realm"));
        assert!(!error.public_message().contains("realm"));
    }
}
