//! Error taxonomy for configuration and browser adapters.
//!
//! Nothing here is surfaced to the user. The controller logs these at warn
//! level and carries on, so page behavior degrades silently.

/// Errors produced while configuring the controller or talking to the browser.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The JSON configuration could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A configuration field holds a value the controller cannot use.
    #[error("invalid binding {field}: {reason}")]
    InvalidBinding { field: &'static str, reason: String },

    /// No `window` global (not running in a browser main thread).
    #[error("browser window unavailable")]
    NoWindow,

    /// `localStorage` is missing or blocked.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage read failed for {key}: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("storage write failed for {key}: {reason}")]
    StorageWrite { key: String, reason: String },

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
