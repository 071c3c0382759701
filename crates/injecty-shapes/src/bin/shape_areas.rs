//! Shape Areas - Entry Point
//!
//! Reads a JSON array of shapes and prints the area of each, one per line:
//!
//! ```text
//! shape-areas --input shapes.json [--config injecty.toml]
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use injecty::logging::init_logging;
use injecty::{ConfigLoader, create_injecty_context};
use injecty_shapes::parse_shapes;

/// Command line interface for Shape Areas
#[derive(Parser, Debug)]
#[command(name = "shape-areas")]
#[command(about = "Shape Areas - print the area of each shape in a JSON file")]
#[command(version)]
pub struct Cli {
    /// JSON file holding an array of shapes
    #[arg(long)]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => {
            anyhow::ensure!(
                path.is_file(),
                "Configuration file not found: {}",
                path.display()
            );
            ConfigLoader::new().with_config_path(path)
        }
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let context = create_injecty_context(&config.discovery)?;

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let document: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;

    for shape in parse_shapes(&context, &document)? {
        println!("{}", shape.area());
    }
    Ok(())
}
