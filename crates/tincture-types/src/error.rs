// ABOUTME: Error types for color parsing, role lookup and palette serialization
// ABOUTME: Shared by every tincture crate that can fail on user-supplied input

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format '{input}': expected 6 hex digits with optional leading '#'")]
    InvalidFormat { input: String },

    #[error("Unknown color role '{name}'")]
    UnknownRole { name: String },

    #[error("Unknown harmony mode '{name}': expected 'complementary' or 'monochromatic'")]
    UnknownHarmony { name: String },

    #[error("Unknown export format '{name}': expected css, scss, tailwind or json")]
    UnknownFormat { name: String },

    #[error("Failed to serialize palette: {reason}")]
    Serialization { reason: String },
}

impl ColorError {
    /// Create an invalid format error
    pub fn invalid_format<S: Into<String>>(input: S) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create an unknown role error
    pub fn unknown_role<S: Into<String>>(name: S) -> Self {
        Self::UnknownRole { name: name.into() }
    }

    /// Create an unknown harmony error
    pub fn unknown_harmony<S: Into<String>>(name: S) -> Self {
        Self::UnknownHarmony { name: name.into() }
    }

    /// Create an unknown export format error
    pub fn unknown_format<S: Into<String>>(name: S) -> Self {
        Self::UnknownFormat { name: name.into() }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(reason: S) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by malformed user input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. }
                | Self::UnknownRole { .. }
                | Self::UnknownHarmony { .. }
                | Self::UnknownFormat { .. }
        )
    }
}
