//! LogoGen Core Library
//!
//! This library provides the building blocks for the logogen asset
//! generator: source-logo discovery, background-color sampling, and the
//! resize/canvas operations that render the fixed output set.

pub mod background;
pub mod canvas;
pub mod plan;
pub mod resize;
pub mod source;

pub use background::sample_background;
pub use plan::{render_assets, RenderedAsset};
pub use source::locate_source;

/// Result type for logogen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for logogen-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(
        "No source logo found. Looked for: {}",
        .candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )]
    SourceNotFound { candidates: Vec<std::path::PathBuf> },
}
