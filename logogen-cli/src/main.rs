//! LogoGen CLI Tool
//!
//! Generates the fixed set of logo, icon, and social-preview assets from
//! a source logo found in the current project.

use anyhow::{Context, Result};
use clap::Parser;
use image::DynamicImage;
use logogen_core::{locate_source, render_assets, sample_background};
use std::fs;
use tracing_subscriber::EnvFilter;

/// Directory (relative to the project root) that receives every output.
const OUT_DIR: &str = "assets";

#[derive(Parser)]
#[command(name = "logogen")]
#[command(about = "Generates logo, favicon, and social-preview assets from a source logo")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    generate_assets()
}

fn generate_assets() -> Result<()> {
    let root = std::env::current_dir().context("Failed to resolve current directory")?;

    let source_path = locate_source(&root)?;
    println!("Using source: {}", source_path.display());

    let source = image::open(&source_path)
        .with_context(|| format!("Failed to open source logo {}", source_path.display()))?;
    let source = DynamicImage::ImageRgba8(source.to_rgba8());

    let background = sample_background(&source);

    let out_dir = root.join(OUT_DIR);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    for asset in render_assets(&source, background) {
        let path = out_dir.join(&asset.name);
        asset
            .image
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("Saved {}", path.display());
    }

    println!("All images generated in {}", out_dir.display());

    Ok(())
}
