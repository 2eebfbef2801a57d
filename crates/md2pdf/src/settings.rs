//! Per-document settings files. `book.md` may have a sibling `book.toml`
//! listing the chapters to compile together:
//!
//! ```toml
//! [default]
//! files = ["intro.md", "chapter1.md", "chapter2.md"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentSettings {
    /// Where the settings were read from.
    #[serde(skip)]
    pub path: PathBuf,

    #[serde(default)]
    pub default: Option<DefaultSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DefaultSection {
    #[serde(default)]
    pub files: Option<Vec<PathBuf>>,
}

impl DocumentSettings {
    /// The declared file list, if the `[default]` table has one.
    pub fn files(&self) -> Option<&[PathBuf]> {
        self.default.as_ref()?.files.as_deref()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::SettingsRead {
                path: path.to_path_buf(),
                source,
            })?;
        let mut settings: DocumentSettings =
            toml::from_str(&content).map_err(|source| ConfigError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.path = path.to_path_buf();
        Ok(settings)
    }
}

/// Path of the settings file belonging to `document`: same name, `.toml` extension.
pub fn settings_path(document: &Path) -> PathBuf {
    document.with_extension("toml")
}

/// Finds the settings file belonging to a markdown document.
pub trait SettingsLookup {
    fn lookup(&self, document: &Path) -> Result<Option<DocumentSettings>, ConfigError>;
}

/// Reads the sibling `.toml` file from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSettings;

impl SettingsLookup for FsSettings {
    fn lookup(&self, document: &Path) -> Result<Option<DocumentSettings>, ConfigError> {
        let path = settings_path(document);
        if !path.is_file() {
            log::debug!("no settings file at {}", path.display());
            return Ok(None);
        }
        log::debug!("reading settings file {}", path.display());
        DocumentSettings::load(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_path_replaces_extension() {
        assert_eq!(
            settings_path(Path::new("docs/book.md")),
            PathBuf::from("docs/book.toml")
        );
        assert_eq!(settings_path(Path::new("notes")), PathBuf::from("notes.toml"));
    }

    #[test]
    fn lookup_returns_none_without_settings_file() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("book.md");
        std::fs::write(&doc, "# Book").unwrap();
        assert!(FsSettings.lookup(&doc).unwrap().is_none());
    }

    #[test]
    fn lookup_reads_file_list() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("book.md");
        std::fs::write(dir.path().join("book.toml"), "[default]\nfiles = [\"a.md\", \"b.md\"]\n")
            .unwrap();

        let settings = FsSettings.lookup(&doc).unwrap().unwrap();
        assert_eq!(settings.path, dir.path().join("book.toml"));
        assert_eq!(
            settings.files().unwrap(),
            &[PathBuf::from("a.md"), PathBuf::from("b.md")]
        );
    }

    #[test]
    fn missing_default_table_has_no_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.toml");
        std::fs::write(&path, "[other]\nkey = 1\n").unwrap();
        assert!(DocumentSettings::load(&path).unwrap().files().is_none());
    }

    #[test]
    fn default_table_without_files_has_no_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.toml");
        std::fs::write(&path, "[default]\n").unwrap();
        assert!(DocumentSettings::load(&path).unwrap().files().is_none());
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.toml");
        std::fs::write(&path, "[default\nfiles = ").unwrap();
        let err = DocumentSettings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::SettingsParse { .. }));
    }
}
