//! User configuration loaded from TOML.
//!
//! ```toml
//! search_limit = 8
//! tag_delimiter = "; "
//! export_dir = "/home/me/exports"
//! flag_file = "/home/me/.local/share/regdesk/flags.json"
//! show_tour = true
//! ```
//!
//! Every key is optional. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::{export_filename, export_to_path, ExportOptions, DEFAULT_TAG_DELIMITER};
use crate::onboarding::FileFlagStore;
use crate::query::DEFAULT_SEARCH_LIMIT;
use crate::regulation::Regulation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegdeskConfig {
    /// Maximum hits shown by global search.
    pub search_limit: usize,
    /// Separator between tags in the CSV export.
    pub tag_delimiter: String,
    /// Directory exports are written to. Current directory when unset.
    pub export_dir: Option<PathBuf>,
    /// Where one-time flags are persisted. Platform data dir when unset.
    pub flag_file: Option<PathBuf>,
    /// Offer the first-run walkthrough at all.
    pub show_tour: bool,
}

impl Default for RegdeskConfig {
    fn default() -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT,
            tag_delimiter: DEFAULT_TAG_DELIMITER.to_string(),
            export_dir: None,
            flag_file: None,
            show_tour: true,
        }
    }
}

impl RegdeskConfig {
    /// `<config dir>/regdesk/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("regdesk").join("config.toml"))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: RegdeskConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(?path, "loading config");
                Self::from_toml(&text, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(?path, "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from `path` if given, else from [`RegdeskConfig::default_path`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.search_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "search_limit",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            tag_delimiter: self.tag_delimiter.clone(),
        }
    }

    /// Resolve the export directory, falling back to `.`.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Write the CSV export with the configured options.
    ///
    /// Without an explicit `path` the file goes to [`Self::export_dir`]
    /// under the dated default name. Returns the path written and the row
    /// count.
    pub fn export_board(
        &self,
        regulations: &[Regulation],
        path: Option<PathBuf>,
        date: NaiveDate,
    ) -> crate::Result<(PathBuf, usize)> {
        let path = path.unwrap_or_else(|| self.export_dir().join(export_filename(date)));
        let rows = export_to_path(regulations, &path, &self.export_options())?;
        Ok((path, rows))
    }

    /// Flag store at the configured or platform default location.
    pub fn flag_store(&self) -> Option<FileFlagStore> {
        self.flag_file
            .clone()
            .or_else(FileFlagStore::default_path)
            .map(FileFlagStore::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = RegdeskConfig::from_toml("", Path::new("config.toml")).unwrap();
        assert_eq!(config, RegdeskConfig::default());
        assert_eq!(config.search_limit, 8);
        assert_eq!(config.tag_delimiter, "; ");
        assert!(config.show_tour);
    }

    #[test]
    fn partial_document_overrides() {
        let text = r#"
search_limit = 3
export_dir = "/tmp/out"
show_tour = false
"#;
        let config = RegdeskConfig::from_toml(text, Path::new("config.toml")).unwrap();
        assert_eq!(config.search_limit, 3);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
        assert!(!config.show_tour);
        assert_eq!(config.export_options().tag_delimiter, "; ");
    }

    #[test]
    fn zero_search_limit_rejected() {
        let err = RegdeskConfig::from_toml("search_limit = 0", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "search_limit", .. }));
    }

    #[test]
    fn malformed_toml_reports_path() {
        let err = RegdeskConfig::from_toml("search_limit = [", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
