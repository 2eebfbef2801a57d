//! Optional per-user TOML config with fallback values for the string options.
//! Handles tilde expansion and the default file locations.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::environment::{self, Environment};
use crate::error::ConfigError;

/// Defaults read from `~/.md2pdf.toml` (or wherever `--config` points).
///
/// Every field has the lowest precedence: a command-line flag or an
/// `MD2PDF_*` variable always wins. Top-level keys are the defaults; a
/// `[section]` table selected with `--section` overlays them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub logo_width: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Author name. Accepted for compatibility with older config files.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub pdf_engine: Option<String>,
    #[serde(default)]
    pub highlight_style: Option<String>,
    #[serde(default)]
    pub syntax_definition: Option<String>,
}

const KNOWN_KEYS: [&str; 10] = [
    "template",
    "logo",
    "logo_width",
    "email",
    "name",
    "company",
    "department",
    "pdf_engine",
    "highlight_style",
    "syntax_definition",
];

impl Config {
    /// Load config from file, overlaying the named `[section]` if given.
    pub fn load(path: &Path, section: Option<&str>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let mut config = Self::from_table(&table)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if let Some(name) = section {
            let overlay = table
                .get(name)
                .and_then(toml::Value::as_table)
                .ok_or_else(|| ConfigError::MissingSection {
                    section: name.to_string(),
                    path: path.to_path_buf(),
                })?;
            let overlay = Self::from_table(overlay).with_context(|| {
                format!("failed to parse section [{name}] of {}", path.display())
            })?;
            log::debug!("using section [{name}] of {}", path.display());
            config = overlay.or(config);
        }
        config.expand_tildes()?;
        Ok(config)
    }

    /// Deserialize the scalar entries of `table`. Nested tables are sections
    /// and are skipped; unrecognised keys are logged and ignored.
    fn from_table(table: &toml::Table) -> Result<Self, toml::de::Error> {
        let mut scalars = toml::Table::new();
        for (key, value) in table {
            if value.is_table() {
                continue;
            }
            if !KNOWN_KEYS.contains(&key.as_str()) {
                log::warn!("ignoring unknown config key `{key}`");
                continue;
            }
            scalars.insert(key.clone(), value.clone());
        }
        toml::Value::Table(scalars).try_into()
    }

    /// Field-wise fallback: values set in `self` win over `base`.
    fn or(self, base: Self) -> Self {
        Self {
            template: self.template.or(base.template),
            logo: self.logo.or(base.logo),
            logo_width: self.logo_width.or(base.logo_width),
            email: self.email.or(base.email),
            name: self.name.or(base.name),
            company: self.company.or(base.company),
            department: self.department.or(base.department),
            pdf_engine: self.pdf_engine.or(base.pdf_engine),
            highlight_style: self.highlight_style.or(base.highlight_style),
            syntax_definition: self.syntax_definition.or(base.syntax_definition),
        }
    }

    /// Load from the CLI-provided path, `MD2PDF_CONFIG`, or the first default
    /// location that exists. An explicitly named file must exist; when no
    /// default file is present the empty config is returned, unless a
    /// section was asked for.
    pub fn load_or_default(
        cli_path: Option<&Path>,
        section: Option<&str>,
        env: &Environment,
    ) -> Result<Self> {
        let explicit = cli_path
            .map(Path::to_path_buf)
            .or_else(|| env.get(environment::CONFIG).map(PathBuf::from));

        if let Some(path) = explicit {
            let path = expand_tilde(&path)?;
            if !path.is_file() {
                return Err(ConfigError::MissingConfigFile(path).into());
            }
            log::debug!("using config file {}", path.display());
            return Self::load(&path, section);
        }

        for path in default_config_paths()? {
            if path.is_file() {
                log::debug!("using config file {}", path.display());
                return Self::load(&path, section);
            }
        }

        if let Some(name) = section {
            return Err(ConfigError::NoConfigForSection(name.to_string()).into());
        }
        log::debug!("no config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Expand `~` in all path fields.
    fn expand_tildes(&mut self) -> Result<()> {
        for field in [
            &mut self.template,
            &mut self.logo,
            &mut self.syntax_definition,
        ] {
            if let Some(value) = field {
                *value = expand_tilde(Path::new(value.as_str()))?
                    .to_string_lossy()
                    .into_owned();
            }
        }
        Ok(())
    }
}

/// Expand `~` prefix to the user's home directory.
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    if let Ok(stripped) = path.strip_prefix("~") {
        Ok(dirs::home_dir()
            .context("could not determine home directory")?
            .join(stripped))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Default config file locations, in lookup order:
/// `~/.md2pdf.toml`, then `~/.config/md2pdf/config.toml`.
pub fn default_config_paths() -> Result<[PathBuf; 2]> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok([
        home.join(".md2pdf.toml"),
        home.join(".config").join("md2pdf").join("config.toml"),
    ])
}
