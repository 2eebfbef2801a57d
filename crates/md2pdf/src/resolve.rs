//! Merges flags, environment and config file into one validated [`ResolvedConfig`].
//!
//! Precedence per field is fixed: command-line flag, then `MD2PDF_*`
//! variable, then the user config file, then the built-in default. An empty
//! value counts as "not given" at every level.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::cli::Cli;
use crate::config::Config;
use crate::environment::{self, Environment};
use crate::error::{ConfigError, Warning};
use crate::options::{Choice, HighlightStyle, OutputFormat, PdfEngine};
use crate::settings::{SettingsLookup, settings_path};

/// Rendering tool used unless `MD2PDF_PANDOC` names another.
pub const DEFAULT_PROGRAM: &str = "pandoc";

/// Extension of the KDE syntax definition files pandoc accepts.
const SYNTAX_EXTENSION: &str = "xml";

/// Everything needed to build the pandoc command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub program: String,
    pub input_files: Vec<PathBuf>,
    pub output_file: PathBuf,
    pub output_format: OutputFormat,
    pub template: String,
    pub logo: Option<String>,
    pub logo_width: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub department: Option<String>,
    pub confidential: bool,
    pub footer_text: String,
    pub pdf_engine: PdfEngine,
    pub highlight_style: HighlightStyle,
    pub syntax_definitions: Vec<PathBuf>,
    pub table_of_contents: bool,
    pub number_sections: bool,
    pub title_page: bool,
}

/// A resolved configuration plus the warnings raised on the way.
#[derive(Debug)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub warnings: Vec<Warning>,
}

/// The three configuration sources, captured once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub cli: &'a Cli,
    pub env: &'a Environment,
    pub config: &'a Config,
}

impl<'a> Sources<'a> {
    fn scalar(
        &self,
        field: &str,
        cli: &'a Option<String>,
        env_key: &str,
        config: &'a Option<String>,
    ) -> Option<String> {
        resolve_scalar(
            field,
            cli.as_deref(),
            self.env.get(env_key),
            config.as_deref(),
        )
        .map(str::to_string)
    }
}

/// Resolve the configuration for one run. `year` goes into the footer.
pub fn resolve(
    sources: Sources<'_>,
    lookup: &dyn SettingsLookup,
    year: i32,
) -> Result<Resolution, ConfigError> {
    let Sources { cli, env, config } = sources;
    let mut warnings = Vec::new();

    check_inputs(&cli.files)?;

    let (input_files, warning) = resolve_input_files(&cli.files, lookup)?;
    warnings.extend(warning);
    if input_files != cli.files && !input_files.iter().any(|f| f.exists()) {
        return Err(ConfigError::NoExistingInput(settings_path(&cli.files[0])));
    }

    let template = sources
        .scalar("template", &cli.template, environment::TEMPLATE, &config.template)
        .ok_or(ConfigError::MissingTemplate)?;

    let pdf_engine = sources
        .scalar(
            "pdf engine",
            &cli.pdf_engine,
            environment::PDF_ENGINE,
            &config.pdf_engine,
        )
        .map(|v| validate_enum::<PdfEngine>("pdf engine", &v))
        .transpose()?
        .unwrap_or_default();

    let highlight_style = sources
        .scalar(
            "highlight style",
            &cli.highlight_style,
            environment::HIGHLIGHT_STYLE,
            &config.highlight_style,
        )
        .map(|v| validate_enum::<HighlightStyle>("highlight style", &v))
        .transpose()?
        .unwrap_or_default();

    let logo = sources.scalar("logo", &cli.logo, environment::LOGO, &config.logo);
    let logo_width = sources.scalar(
        "logo width",
        &cli.logo_width,
        environment::LOGO_WIDTH,
        &config.logo_width,
    );
    let email = sources.scalar("email", &cli.email, environment::EMAIL, &config.email);
    let company = sources.scalar("company", &cli.company, environment::COMPANY, &config.company);
    let department = sources.scalar(
        "department",
        &cli.department,
        environment::DEPARTMENT,
        &config.department,
    );

    let syntax_definitions = match sources.scalar(
        "syntax definition",
        &cli.syntax_definition,
        environment::SYNTAX_DEFINITION,
        &config.syntax_definition,
    ) {
        Some(dir) => collect_syntax_definitions(Path::new(&dir)).unwrap_or_else(|w| {
            warnings.push(w);
            Vec::new()
        }),
        None => Vec::new(),
    };

    let output_format = if cli.tex {
        OutputFormat::Tex
    } else {
        OutputFormat::Pdf
    };
    let output_file = derive_output_file(&input_files[0], output_format);
    let footer_text = derive_footer_text(company.as_deref(), cli.confidential, year);

    let program = env
        .get(environment::PANDOC)
        .unwrap_or(DEFAULT_PROGRAM)
        .to_string();

    Ok(Resolution {
        config: ResolvedConfig {
            program,
            input_files,
            output_file,
            output_format,
            template,
            logo,
            logo_width,
            email,
            company,
            department,
            confidential: cli.confidential,
            footer_text,
            pdf_engine,
            highlight_style,
            syntax_definitions,
            table_of_contents: !cli.no_toc,
            number_sections: !cli.no_number_sections,
            title_page: !cli.no_titlepage,
        },
        warnings,
    })
}

/// Usage checks on the positional files: at least one given, all present.
/// Runs before any configuration source is read.
pub fn check_inputs(files: &[PathBuf]) -> Result<(), ConfigError> {
    if files.is_empty() {
        return Err(ConfigError::NoInputFiles);
    }
    if let Some(missing) = files.iter().find(|f| !f.exists()) {
        return Err(ConfigError::MissingInput(missing.clone()));
    }
    Ok(())
}

/// Decide which markdown files get compiled.
///
/// A single positional file whose settings file declares `default.files` is
/// replaced by that list. With two or more positional files the settings
/// lookup is skipped.
pub fn resolve_input_files(
    positional: &[PathBuf],
    lookup: &dyn SettingsLookup,
) -> Result<(Vec<PathBuf>, Option<Warning>), ConfigError> {
    let [single] = positional else {
        return Ok((positional.to_vec(), None));
    };

    let Some(settings) = lookup.lookup(single)? else {
        return Ok((positional.to_vec(), None));
    };

    if let Some(files) = settings.files().filter(|f| !f.is_empty()) {
        log::debug!(
            "{} replaced by {} file(s) from {}",
            single.display(),
            files.len(),
            settings.path.display()
        );
        return Ok((files.to_vec(), None));
    }

    Ok((positional.to_vec(), Some(Warning::NoFileList(settings.path))))
}

/// First non-empty value of flag, environment, fallback.
pub fn resolve_scalar<'a>(
    field: &str,
    cli: Option<&'a str>,
    env: Option<&'a str>,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    let given = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());
    let (value, origin) = if given(cli) {
        (cli, "command line")
    } else if given(env) {
        (env, "environment")
    } else if given(fallback) {
        (fallback, "config file")
    } else {
        return None;
    };
    log::debug!("{field} taken from {origin}");
    value
}

/// Check `value` against the allowed names of `T`.
pub fn validate_enum<T: Choice>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    T::parse_choice(value).map_err(|e| ConfigError::InvalidChoice {
        field,
        value: e.value,
        allowed: e.allowed,
    })
}

/// Footer line: empty without a company, otherwise `"{year} {company}"`,
/// prefixed with a copyright notice for confidential documents.
pub fn derive_footer_text(company: Option<&str>, confidential: bool, year: i32) -> String {
    match company {
        None | Some("") => String::new(),
        Some(company) if confidential => format!("© Copyright {year} {company}"),
        Some(company) => format!("{year} {company}"),
    }
}

/// Output file name: the first input's file stem plus the format's extension.
/// The output is written to the working directory.
pub fn derive_output_file(first_input: &Path, format: OutputFormat) -> PathBuf {
    let mut name = first_input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// All `*.xml` files directly inside `dir`, in directory listing order.
pub fn collect_syntax_definitions(dir: &Path) -> Result<Vec<PathBuf>, Warning> {
    if !dir.is_dir() {
        return Err(Warning::SyntaxDirMissing(dir.to_path_buf()));
    }

    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == SYNTAX_EXTENSION)
        })
        .map(|e| e.into_path())
        .collect::<Vec<_>>();

    log::debug!(
        "found {} syntax definition(s) in {}",
        files.len(),
        dir.display()
    );
    Ok(files)
}
