use std::path::{Path, PathBuf};

use crate::error::Error;

/// Name of the optional config file, looked up in the documentation root.
pub const CONFIG_FILE: &str = ".docc-xref.toml";

/// Directory under the root holding the `Joyfill` module's page data.
const DEFAULT_DATA_DIR: &str = "Joyfill/data/documentation/joyfill";

/// Bundle source segment used in synthesized `doc://` keys.
const DEFAULT_SOURCE: &str = "components-swift";

/// Layout of the documentation site, loaded from `.docc-xref.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scanned directory, relative to the documentation root.
    data_dir: PathBuf,
    /// `<source>` segment of reference keys.
    source: String,
}

/// Raw TOML structure for `.docc-xref.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct DoccXrefTomlConfig {
    /// Override for the scanned directory.
    data_dir: Option<PathBuf>,
    /// Override for the reference key source.
    source: Option<String>,
}

impl Config {
    /// Directory whose `*.json` files are repaired.
    pub fn data_dir_under(&self, root: &Path) -> PathBuf {
        return root.join(&self.data_dir);
    }

    /// Load config from `.docc-xref.toml` in the documentation root.
    /// Returns the defaults if the file doesn't exist. Anything else at that
    /// path that cannot be read as valid config is an error, never a silent
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read, is not valid TOML,
    /// has unknown keys, or sets an empty `source`.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let invalid = |reason: String| {
            return Error::Config { path: path.clone(), reason };
        };

        // A missing root (or a root that is a plain file) has no config either.
        let content = match std::fs::read_to_string(&path) {
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
                ) =>
            {
                return Ok(Self::default());
            },
            Err(e) => return Err(invalid(e.to_string())),
            Ok(c) => c,
        };
        let raw: DoccXrefTomlConfig =
            toml::from_str(&content).map_err(|e| return invalid(e.to_string()))?;

        let defaults = Self::default();
        let source = raw.source.unwrap_or(defaults.source);
        if source.is_empty() {
            return Err(invalid("`source` must not be empty".to_string()));
        }

        return Ok(Self {
            data_dir: raw.data_dir.unwrap_or(defaults.data_dir),
            source,
        });
    }

    /// Source segment for `doc://<source>.<module>/...` keys.
    pub fn source(&self) -> &str {
        return &self.source;
    }
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            source: DEFAULT_SOURCE.to_string(),
        };
    }
}
