//! Error types for native XML export.

use thiserror::Error;

/// Error returned by an identifier plugin.
pub type PluginError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while building or writing an export document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no submissions to export")]
    EmptyInput,

    #[error("pub-id plugin `{pub_id_type}` failed: {source}")]
    Plugin {
        pub_id_type: String,
        #[source]
        source: PluginError,
    },

    #[error("deployment is missing a value for `{0}`")]
    MissingDeployment(&'static str),

    #[error("deployment value for `{0}` is not a valid XML name")]
    InvalidDeployment(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
