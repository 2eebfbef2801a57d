//! md2pdf — convert markdown documents to PDF or TeX through pandoc.
//! Re-exports all modules and contains the `run()` pipeline: resolve, build, invoke.

pub mod cli;
pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod invoke;
pub mod options;
pub mod resolve;
pub mod settings;

use anyhow::Result;
use chrono::Datelike;
use console::style;

use cli::Cli;
use config::Config;
use environment::Environment;
use resolve::Sources;
use settings::FsSettings;

/// Run the CLI with parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    resolve::check_inputs(&cli.files)?;
    let env = Environment::from_process()?;
    let config = Config::load_or_default(cli.config.as_deref(), cli.section.as_deref(), &env)?;
    let year = chrono::Local::now().year();

    let resolution = resolve::resolve(
        Sources {
            cli: &cli,
            env: &env,
            config: &config,
        },
        &FsSettings,
        year,
    )?;

    for warning in &resolution.warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }
    let resolved = resolution.config;

    if !cli.quiet {
        for file in &resolved.input_files {
            println!("{} {}", style("Compiling").bold(), file.display());
        }
    }

    let command = command::build(&resolved);
    if cli.debug || cli.dry_run {
        println!("{command}");
    }

    if cli.dry_run {
        if !cli.quiet {
            eprintln!(
                "{}",
                style("[dry-run] pandoc was not started").yellow().bold()
            );
        }
        return Ok(());
    }

    invoke::run(&command)?;

    if !cli.quiet {
        println!(
            "{} {}",
            style("Created").green().bold(),
            resolved.output_file.display()
        );
    }

    Ok(())
}
