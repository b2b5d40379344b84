//! packforge CLI - Mod pack manifest builder
//!
//! Commands:
//! - `packforge build` - Build `pack.json` and `config.zip` from an input directory
//! - `packforge inspect` - Show the record extracted from one plugin archive
//! - `packforge check` - Validate a packforge.toml configuration

use clap::{Parser, Subcommand};
use packforge_cli::{build, check, inspect};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packforge")]
#[command(author, version, about = "Build tool for updater mod packs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the pack manifest and config archive
    Build {
        /// Input directory (default: ./input)
        #[arg(short, long, default_value = "input")]
        input: PathBuf,

        /// Output directory, removed and recreated on every run (default: ./output)
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Path to packforge.toml (default: <input>/packforge.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game version the pack targets
        #[arg(long)]
        platform_version: Option<String>,

        /// Additional launch arguments
        #[arg(long = "args")]
        additional_arguments: Option<String>,

        /// Log level (trace, debug, info, warn, error, off)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Show the record extracted from a plugin archive
    Inspect {
        /// Path to the plugin archive
        archive: PathBuf,
    },

    /// Validate a packforge.toml configuration
    Check {
        /// Path to packforge.toml (default: ./input/packforge.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            config,
            platform_version,
            additional_arguments,
            log_level,
        } => {
            let mut config = check::load_config(&input, config.as_deref())?;
            if let Some(platform_version) = platform_version {
                config.platform_version = platform_version;
            }
            if let Some(args) = additional_arguments {
                config.additional_arguments = Some(args);
            }
            if let Some(level) = log_level {
                config.log_level = level;
            }
            config.validate()?;
            packforge_logging::init_logging(config.log_level()?);

            println!("Packforge mod pack builder");
            let options = build::BuildOptions::new(input, output, config);
            let summary = build::run(&options)?;
            println!("{summary}");
        }
        Commands::Inspect { archive } => {
            packforge_logging::init_logging(packforge_core::LogLevel::Warn);
            inspect::run(&archive)?;
        }
        Commands::Check { config } => {
            let path = config.unwrap_or_else(|| {
                PathBuf::from("input").join(packforge_core::CONFIG_FILE)
            });
            check::run(&path)?;
        }
    }

    Ok(())
}
