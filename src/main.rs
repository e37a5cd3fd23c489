use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};

use bootanim_builder::{BuildDriver, BuildTarget, Config};

#[derive(Parser)]
#[command(
    name = "bootanim-builder",
    version,
    about = "Build Android boot animations and Plymouth splash themes",
    long_about = "Bootanim-Builder composites a theme logo over its frame images for every configured screen resolution, packs Android bootanimation.zip archives and renders a Plymouth splash theme."
)]
struct Cli {
    /// Which outputs to build
    #[arg(value_enum, default_value_t = BuildTarget::All)]
    system: BuildTarget,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme folder under assets/themes (overrides the configuration)
    #[arg(short, long)]
    theme: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Bootanim-Builder v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    if let Some(theme) = cli.theme {
        config.theme.name = theme;
    }
    config.validate()?;

    let driver = BuildDriver::new(config);
    match driver.run(cli.system) {
        Ok(reports) => {
            for report in &reports {
                for output in &report.outputs {
                    info!("   {} -> {:?}", report.target, output);
                }
            }
            info!("✓ Done");
            Ok(())
        }
        Err(e) => {
            error!("✗ {}", e.user_message());
            Err(e.into())
        }
    }
}
