//! Cache scratch directory layout.
//!
//! Re-encoded videos land in a scratch directory under the application
//! cache root. Files placed there are regenerable and never cleaned up by
//! the pipeline itself.

use std::path::{Path, PathBuf};

use clipcap_common::error::ClipcapResult;

/// Subdirectory of the cache root holding re-encoded videos.
pub const SCRATCH_SUBDIR: &str = "video";

/// Resolves scratch paths under a cache root.
///
/// The result filename is fixed per layout, so two pipeline runs sharing a
/// layout race on the same destination path. Callers own that hazard.
#[derive(Debug, Clone)]
pub struct ScratchLayout {
    cache_root: PathBuf,
    result_filename: String,
}

impl ScratchLayout {
    pub fn new(cache_root: impl Into<PathBuf>, result_filename: impl Into<String>) -> Self {
        Self {
            cache_root: cache_root.into(),
            result_filename: result_filename.into(),
        }
    }

    /// The scratch directory for re-encoded videos.
    pub fn scratch_dir(&self) -> PathBuf {
        self.cache_root.join(SCRATCH_SUBDIR)
    }

    /// Destination path for the re-encoded output.
    pub fn result_path(&self) -> PathBuf {
        self.scratch_dir().join(&self.result_filename)
    }

    /// Create the scratch directory if it does not exist yet, then return
    /// the destination path for the re-encoded output.
    pub fn ensure_result_path(&self) -> ClipcapResult<PathBuf> {
        ensure_dir(&self.scratch_dir())?;
        Ok(self.result_path())
    }
}

/// Idempotently create a directory, including intermediate segments.
///
/// Filesystem errors propagate to the caller; there is no retry.
pub fn ensure_dir(path: &Path) -> ClipcapResult<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Scratch directory missing, creating");
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_intermediate_segments() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b").join("c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("video");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn layout_resolves_result_under_scratch_dir() {
        let layout = ScratchLayout::new("/tmp/clipcap-cache", "file2.mp4");
        assert_eq!(
            layout.result_path(),
            PathBuf::from("/tmp/clipcap-cache/video/file2.mp4")
        );
    }

    #[test]
    fn ensure_result_path_creates_scratch_dir() {
        let root = tempfile::tempdir().unwrap();
        let layout = ScratchLayout::new(root.path(), "file2.mp4");
        let dest = layout.ensure_result_path().unwrap();
        assert!(layout.scratch_dir().is_dir());
        assert_eq!(dest, layout.scratch_dir().join("file2.mp4"));
    }
}
