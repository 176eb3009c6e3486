use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio with smooth anchor scrolling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Scroll to this section after startup (home, portfolio, contact, projects)
        #[arg(short, long)]
        anchor: Option<String>,
    },
    /// List the projects
    Projects {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the frames of one anchor animation without a terminal UI
    Simulate {
        /// Section to scroll to
        anchor: String,
        /// Starting scroll offset in rows
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        /// Frame rate, overriding the configured one
        #[arg(long)]
        fps: Option<u32>,
        /// Viewport height in rows
        #[arg(long, default_value_t = 40)]
        rows: u16,
    },
    /// Show the configuration
    Config {
        /// Print only the config file path
        #[arg(long)]
        path: bool,
        /// Write the default configuration if no config file exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run { anchor }) => commands::run::run(config, anchor).await,
        None => commands::run::run(config, None).await,
        Some(Commands::Projects { json }) => commands::projects::run(json),
        Some(Commands::Simulate {
            anchor,
            from,
            fps,
            rows,
        }) => commands::simulate::run(&config, &anchor, from, fps, rows),
        Some(Commands::Config { path, init }) => commands::config::run(&config, path, init),
    }
}
