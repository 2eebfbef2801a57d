//! Turns a [`ResolvedConfig`] into the pandoc command line.

use std::fmt;
use std::path::Path;

use crate::options::Choice;
use crate::resolve::ResolvedConfig;

/// Pandoc reader: markdown with smart punctuation.
const INPUT_FORMAT: &str = "markdown+smart";

/// A program and its ordered arguments, ready to run once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// True if `flag` appears as an argument.
    pub fn has(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Single-quote arguments that a shell would split or expand.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_alphanumeric() || "-_./=:,+@%©".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Build the full argument list in one pass. Order is stable so that
/// `--debug` output is reproducible.
pub fn build(config: &ResolvedConfig) -> CommandSpec {
    let mut args: Vec<String> = Vec::new();
    macro_rules! push {
        ($($arg:expr),+) => {
            $(args.push(String::from($arg));)+
        };
    }

    // 1. Fixed preamble
    push!("-o", path_arg(&config.output_file));
    push!("-f", INPUT_FORMAT);
    push!("-M", "colorlinks=true");
    push!("-V", "linkcolor=ForestGreen");
    push!("-V", "classoption=oneside");
    push!("-V", "listings");
    push!("-M", "toc-own-page=true");

    // 2. Per-field values
    if !config.footer_text.is_empty() {
        push!("-V", format!("footer-center={}", config.footer_text));
    }
    if let Some(company) = &config.company {
        push!("-V", format!("company={company}"));
    }
    if let Some(department) = &config.department {
        push!("-V", format!("department={department}"));
    }
    if !config.template.is_empty() {
        push!("--template", &config.template);
    }
    push!(format!("--pdf-engine={}", config.pdf_engine));

    // 3. Extra syntax definitions
    for file in &config.syntax_definitions {
        push!("--syntax-definition", path_arg(file));
    }

    // 4-9. Highlighting and toggles
    push!("--highlight-style", config.highlight_style.as_str());
    if config.number_sections {
        push!("--number-sections");
    }
    if !config.title_page {
        push!("-M", "titlepage=false");
    }
    if let Some(logo) = &config.logo {
        push!("-V", format!("logo={logo}"));
    }
    if let Some(width) = &config.logo_width {
        push!("-V", format!("logo-width={width}"));
    }
    if let Some(email) = &config.email {
        push!("-M", format!("email={email}"));
    }
    if config.table_of_contents {
        push!("--toc");
    }

    // 10. Inputs, positionally
    for file in &config.input_files {
        push!(path_arg(file));
    }

    CommandSpec {
        program: config.program.clone(),
        args,
    }
}
