//! Error types for the price-order CLI.

use std::path::PathBuf;

use pricer_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors.
///
/// Catalog problems name the file or entry involved so the message alone is
/// enough to fix the input.
#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Catalog Errors
    // =========================================================================
    /// An explicitly requested catalog file does not exist.
    #[error("Catalog file not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    /// Reading the catalog file failed.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not valid TOML or has the wrong shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A catalog entry failed validation.
    #[error("Invalid catalog entry {entry}: {source}")]
    InvalidEntry {
        entry: String,
        #[source]
        source: CoreError,
    },

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Unknown shipping method: {0}")]
    UnknownShippingMethod(String),

    /// No `--shipping` flag and no default configured.
    #[error("No shipping method given and no default_shipping configured")]
    NoShippingMethod,

    // =========================================================================
    // Pricing / Output Errors
    // =========================================================================
    #[error(transparent)]
    Pricing(#[from] CoreError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
