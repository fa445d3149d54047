//! Source-logo discovery

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Candidate source paths relative to the project root, in priority order.
pub const SOURCE_CANDIDATES: &[&str] = &[
    "Logo.png",
    "logo.png",
    "assets/source-logo.png",
    "assets/Logo.png",
];

/// Locates the source logo under the given root directory.
///
/// Probes [`SOURCE_CANDIDATES`] in order and returns the first path that
/// exists. Fails with [`Error::SourceNotFound`] listing every probed path
/// when no candidate is present.
pub fn locate_source(root: &Path) -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = SOURCE_CANDIDATES.iter().map(|c| root.join(c)).collect();

    for candidate in &candidates {
        if candidate.exists() {
            debug!(path = %candidate.display(), "Found source logo");
            return Ok(candidate.clone());
        }
        debug!(path = %candidate.display(), "Candidate missing");
    }

    Err(Error::SourceNotFound { candidates })
}
