//! CLI argument parsing with clap. Defines the `Cli` struct.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "md2pdf",
    version,
    about = "Convert markdown documents to PDF (or TeX) using pandoc",
    after_help = "Examples:\n  md2pdf report.md\n  md2pdf --tex --no-toc notes.md\n  md2pdf --company Acme --confidential ch1.md ch2.md\n  md2pdf book.md   (compiles the files listed in book.toml)"
)]
pub struct Cli {
    /// Markdown files to compile into a single document
    pub files: Vec<PathBuf>,

    /// Pandoc LaTeX template [env: MD2PDF_TEMPLATE]
    #[arg(long)]
    pub template: Option<String>,

    /// Logo image shown on the title page [env: MD2PDF_LOGO]
    #[arg(long)]
    pub logo: Option<String>,

    /// Width of the logo image [env: MD2PDF_LOGO_WIDTH]
    #[arg(long)]
    pub logo_width: Option<String>,

    /// Syntax highlighting style [env: MD2PDF_HIGHLIGHT_STYLE] [default: pygments]
    #[arg(long)]
    pub highlight_style: Option<String>,

    /// Directory of additional KDE syntax definitions (*.xml) [env: MD2PDF_SYNTAX_DEFINITION]
    #[arg(long)]
    pub syntax_definition: Option<String>,

    /// Omit the table of contents
    #[arg(long)]
    pub no_toc: bool,

    /// Do not number sections
    #[arg(long)]
    pub no_number_sections: bool,

    /// Suppress the title page
    #[arg(long)]
    pub no_titlepage: bool,

    /// Create a TeX file instead of a PDF document
    #[arg(long)]
    pub tex: bool,

    /// Author email address [env: MD2PDF_EMAIL]
    #[arg(long)]
    pub email: Option<String>,

    /// Company shown in the footer [env: MD2PDF_COMPANY]
    #[arg(long)]
    pub company: Option<String>,

    /// Department of the author [env: MD2PDF_DEPARTMENT]
    #[arg(long)]
    pub department: Option<String>,

    /// Mark the document as confidential in the footer
    #[arg(long)]
    pub confidential: bool,

    /// Print the pandoc command line before running it
    #[arg(long)]
    pub debug: bool,

    /// PDF engine: xelatex, lualatex or tectonic [env: MD2PDF_PDF_ENGINE] [default: xelatex]
    #[arg(long)]
    pub pdf_engine: Option<String>,

    /// Path to config file (default: ~/.md2pdf.toml or ~/.config/md2pdf/config.toml) [env: MD2PDF_CONFIG]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Table in the config file whose values overlay the top-level ones
    #[arg(short, long)]
    pub section: Option<String>,

    /// Print the pandoc command line without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
