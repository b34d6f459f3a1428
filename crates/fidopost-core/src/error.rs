//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Station settings were missing or failed validation.
    #[error("Settings error: {0}")]
    Settings(#[from] crate::settings::SettingsError),

    /// An FTN address failed to parse or validate.
    #[error("Address error: {0}")]
    Address(#[from] fidopost_ftn::AddressError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
