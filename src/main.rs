//! mkdocs-convert - Convert MkDocs documentation to ROCm Docs Core format
//!
//! Main entry point for the command line tool.
//!
//! # Execution Flow
//!
//! 1. Parse `SOURCE` and `TARGET`
//! 2. Initialize logging (stderr, plus rotating files when
//!    `MKDOCS_CONVERT_LOG_DIR` is set)
//! 3. Run the [`Converter`]: load mkdocs.yml, create the target layout, write
//!    conf.py and `_toc.yml.in`, rewrite the Markdown files
//! 4. Print a summary and the manual follow-up steps
//!
//! A missing `mkdocs.yml` stops the run before anything is written to `TARGET`.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use mkdocs_convert::{APP_NAME, Converter, VERSION, logging};

#[derive(Parser)]
#[command(name = "mkdocs-convert")]
#[command(
    version,
    about = "Convert MkDocs documentation to ROCm Docs Core format",
    long_about = None
)]
struct Cli {
    /// Source directory containing mkdocs.yml
    #[arg(value_name = "SOURCE")]
    source: Utf8PathBuf,

    /// Target directory for converted documentation
    #[arg(value_name = "TARGET")]
    target: Utf8PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (log_dir, debug_mode) = logging::settings_from_env();
    let _guard = logging::setup_logging(log_dir.as_deref(), APP_NAME, debug_mode)?;

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let source = absolute_utf8(&cli.source)?;
    let target = absolute_utf8(&cli.target)?;

    println!("Converting {} to {}", source, target);

    let metrics = Converter::new(&source, &target).convert()?;

    println!("{}", metrics.summary());
    println!("\nConversion complete! Next steps:");
    println!("1. Review converted files in {}", target);
    println!("2. Check conf.py configuration");
    println!("3. Verify _toc.yml structure");
    println!("4. Build documentation and check for errors");

    Ok(())
}

/// Make `path` absolute against the current directory without touching the
/// filesystem (the target may not exist yet).
fn absolute_utf8(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path))?;
    Utf8PathBuf::try_from(absolute)
        .with_context(|| format!("Path is not valid UTF-8: {}", path))
}
