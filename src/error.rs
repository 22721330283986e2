/// Crate-level error types for docc-xref diagnostics.
use std::path::PathBuf;

/// Every error names the file or reason for failure so a single printed line
/// is enough to find the problem.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `.docc-xref.toml` exists but cannot be used.
    #[error("invalid config {}: {reason}", path.display())]
    Config {
        /// Path to the offending config file.
        path: PathBuf,
        /// Description of what is wrong with it.
        reason: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("{0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// A documentation file is not valid JSON, or could not be re-serialized.
    #[error("{0}")]
    Json(
        /// The wrapped serde_json error.
        #[from]
        serde_json::Error,
    ),

    /// The file has a `references` key whose value is not a JSON object.
    #[error("`references` is not an object in {}", path.display())]
    ReferencesNotObject {
        /// Documentation file with the malformed table.
        path: PathBuf,
    },

    /// Directory traversal failed for one entry.
    #[error("{0}")]
    Walk(
        /// The wrapped walkdir error.
        #[from]
        walkdir::Error,
    ),
}
