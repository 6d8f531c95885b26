//! Error types.
//!
//! Only mount-time lookups and config loading can fail. Once a carousel is
//! mounted every operation is infallible.

use thiserror::Error;

/// Errors raised while mounting a carousel or loading its configuration.
#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("selector '{selector}' matched no element")]
    MissingTarget { selector: String },

    #[error("slide selector '{selector}' matched no slides")]
    EmptySlides { selector: String },

    #[error("breakpoint key '{key}' is not a viewport width")]
    InvalidBreakpoint { key: String },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CarouselError {
    /// Missing-target errors mean "this page has no such carousel".
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Self::MissingTarget { .. } | Self::EmptySlides { .. })
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
