use anyhow::{Context, Result};
use clap::Parser;
use sheetdict_core::{DictConfig, write_tables_report};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheettables")]
#[command(about = "Print the list of tables declared in a metadata dictionary", long_about = None)]
#[command(version)]
struct Cli {
    /// Folder containing the metadata dictionary workbook
    #[arg(value_name = "METADATA_FOLDER")]
    folder: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DictConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => format!("Failed to load {}", sheetdict_core::config::DEFAULT_CONFIG_FILE),
    })?;

    let Some(folder) = config.resolve_folder(cli.folder) else {
        println!("Usage: sheettables <metadata_folder>");
        println!("Example: sheettables 'Reports/Dynamics 365 Sales/Metadata'");
        std::process::exit(1);
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tables_report(&folder, &config, &mut out)?;
    out.flush()?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
