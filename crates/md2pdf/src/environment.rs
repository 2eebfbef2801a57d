//! Snapshot of the `MD2PDF_*` environment variables, read once at startup.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::ConfigError;

pub const TEMPLATE: &str = "MD2PDF_TEMPLATE";
pub const LOGO: &str = "MD2PDF_LOGO";
pub const LOGO_WIDTH: &str = "MD2PDF_LOGO_WIDTH";
pub const EMAIL: &str = "MD2PDF_EMAIL";
pub const COMPANY: &str = "MD2PDF_COMPANY";
pub const DEPARTMENT: &str = "MD2PDF_DEPARTMENT";
pub const PDF_ENGINE: &str = "MD2PDF_PDF_ENGINE";
pub const SYNTAX_DEFINITION: &str = "MD2PDF_SYNTAX_DEFINITION";
pub const HIGHLIGHT_STYLE: &str = "MD2PDF_HIGHLIGHT_STYLE";
pub const CONFIG: &str = "MD2PDF_CONFIG";
pub const PANDOC: &str = "MD2PDF_PANDOC";

const ALL: [&str; 11] = [
    TEMPLATE,
    LOGO,
    LOGO_WIDTH,
    EMAIL,
    COMPANY,
    DEPARTMENT,
    PDF_ENGINE,
    SYNTAX_DEFINITION,
    HIGHLIGHT_STYLE,
    CONFIG,
    PANDOC,
];

/// The relevant environment variables. Empty values are dropped, so a
/// variable set to `""` behaves exactly like an unset one.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<&'static str, String>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::from_os_vars(
            ALL.iter()
                .filter_map(|&key| std::env::var_os(key).map(|value| (key, value))),
        )
    }

    /// Like [`Environment::from_vars`], but for raw OS values. A value that
    /// is not valid UTF-8 is an error naming the variable.
    pub fn from_os_vars<I, K>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, OsString)>,
        K: AsRef<str>,
    {
        let mut decoded = Vec::new();
        for (key, value) in vars {
            let value = value
                .into_string()
                .map_err(|_| ConfigError::NonUnicodeEnv(key.as_ref().to_string()))?;
            decoded.push((key, value));
        }
        Ok(Self::from_vars(decoded))
    }

    /// Build a snapshot from arbitrary key/value pairs. Unknown keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, value) in vars {
            let Some(&known) = ALL.iter().find(|&&k| k == key.as_ref()) else {
                continue;
            };
            let value = value.into();
            if !value.is_empty() {
                map.insert(known, value);
            }
        }
        Self { vars: map }
    }

    /// Value of `key`, or `None` if unset or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}
