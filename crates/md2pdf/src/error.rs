//! Fatal errors raised while resolving the configuration, before pandoc is started.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("must specify at least one markdown file")]
    NoInputFiles,

    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("no template given; use --template or set MD2PDF_TEMPLATE")]
    MissingTemplate,

    #[error("invalid {field} '{value}', must be one of: {}", .allowed.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{0} is not valid UTF-8")]
    NonUnicodeEnv(String),

    #[error("none of the files listed in {} exist", .0.display())]
    NoExistingInput(PathBuf),

    #[error("config file {} doesn't exist", .0.display())]
    MissingConfigFile(PathBuf),

    #[error("section [{section}] not found in {}", .path.display())]
    MissingSection { section: String, path: PathBuf },

    #[error("no config file found to select section [{0}] from")]
    NoConfigForSection(String),

    #[error("failed to read settings file {}", .path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A recoverable problem: reported to the user, then resolution carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A document settings file exists but has no `default.files` list.
    NoFileList(PathBuf),
    /// The syntax definition directory is missing or unreadable.
    SyntaxDirMissing(PathBuf),
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NoFileList(path) => {
                write!(f, "no file names found in {}", path.display())
            }
            Warning::SyntaxDirMissing(path) => write!(
                f,
                "syntax definition directory {} not found, skipping",
                path.display()
            ),
        }
    }
}
