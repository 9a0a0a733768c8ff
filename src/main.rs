//! CLI entry point for micropress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "micropress")]
#[command(version)]
#[command(about = "A minimal manifest-driven static site compiler", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the site
    #[command(alias = "b")]
    Build {
        /// Watch for file changes and recompile
        #[arg(short, long)]
        watch: bool,
    },

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "micropress=debug,info"
    } else {
        "micropress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Build { watch } => {
            let site = micropress::Site::new(&base_dir)?;
            tracing::info!("Compiling site...");

            site.build().await?;
            println!("Compiled successfully!");

            if watch {
                micropress::commands::build::watch(&site).await?;
            }
        }

        Commands::Clean => {
            let site = micropress::Site::new(&base_dir)?;
            tracing::info!("Cleaning output directory...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("micropress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
