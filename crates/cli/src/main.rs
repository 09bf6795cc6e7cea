//! Storeview CLI - Catalog seeding and HTML previews.
//!
//! # Usage
//!
//! ```bash
//! # Validate the bundled demo catalog without seeding
//! sv-cli seed --validate-only
//!
//! # Seed a catalog fixture
//! sv-cli seed --file fixtures/catalog.yaml
//!
//! # Render page 2 of the orders table to a file
//! sv-cli preview orders --out orders.html --page 2
//! ```
//!
//! # Commands
//!
//! - `seed` - Validate and seed a catalog fixture
//! - `preview` - Render a component against demo data

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sv-cli")]
#[command(author, version, about = "Storeview CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a catalog fixture (the bundled demo catalog by default)
    Seed {
        /// YAML fixture to load
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only validate the fixture
        #[arg(long)]
        validate_only: bool,
    },
    /// Render a component to an HTML file
    Preview {
        /// Component to render
        target: PreviewTarget,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        /// Page to show for list previews
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PreviewTarget {
    /// Admin orders table
    Orders,
    /// Admin products list
    Products,
    /// Storefront product detail
    Product,
    /// Storefront cart
    Cart,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed {
            file,
            validate_only,
        } => commands::seed::catalog(file.as_deref(), validate_only).await?,
        Commands::Preview { target, out, page } => match target {
            PreviewTarget::Orders => commands::preview::orders(&out, page).await?,
            PreviewTarget::Products => commands::preview::products(&out, page).await?,
            PreviewTarget::Product => commands::preview::product(&out).await?,
            PreviewTarget::Cart => commands::preview::cart(&out).await?,
        },
    }
    Ok(())
}
