//! ClipCap Source Picker
//!
//! Selecting the source video to run through the pipeline:
//! - **DialogPicker:** native media-library file dialog
//! - **PathPicker:** non-interactive selection for CLI and headless use
//!
//! Both report a cancelled selection the same way regardless of cause; an
//! OS-level permission denial is indistinguishable from the user backing
//! out of the dialog.

use std::path::{Path, PathBuf};

use clipcap_common::error::ClipcapResult;

/// File extensions offered by the media-library dialog.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "avi", "webm", "m4v", "ts", "m2ts"];

/// Outcome of a selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    /// The user picked a local video file.
    Picked(PathBuf),

    /// The user cancelled, or access to the library was denied.
    Cancelled,
}

impl SourceSelection {
    /// The selected path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SourceSelection::Picked(path) => Some(path),
            SourceSelection::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SourceSelection::Cancelled)
    }
}

/// Abstract interface for source selection.
#[async_trait::async_trait]
pub trait SourcePicker: Send + Sync {
    /// Ask for a source video. Never fails on cancellation; errors are
    /// reserved for environmental problems (e.g. no display available).
    async fn pick(&self) -> ClipcapResult<SourceSelection>;

    /// Picker name for diagnostics.
    fn name(&self) -> &str;
}

/// Native file dialog filtered to video files.
#[derive(Debug, Clone)]
pub struct DialogPicker {
    title: String,
}

impl DialogPicker {
    pub fn new() -> Self {
        Self {
            title: "Select a video".to_string(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for DialogPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SourcePicker for DialogPicker {
    async fn pick(&self) -> ClipcapResult<SourceSelection> {
        tracing::debug!(title = %self.title, "Opening media library dialog");

        let handle = rfd::AsyncFileDialog::new()
            .set_title(&self.title)
            .add_filter("Video Files", VIDEO_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .pick_file()
            .await;

        match handle {
            Some(file) => Ok(SourceSelection::Picked(file.path().to_path_buf())),
            None => {
                tracing::info!("Selection cancelled");
                Ok(SourceSelection::Cancelled)
            }
        }
    }

    fn name(&self) -> &str {
        "dialog"
    }
}

/// Non-interactive picker that selects a fixed path.
///
/// A path that does not point at a readable file is reported as
/// `Cancelled`, keeping the picker contract uniform across frontends.
#[derive(Debug, Clone)]
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SourcePicker for PathPicker {
    async fn pick(&self) -> ClipcapResult<SourceSelection> {
        if self.path.is_file() {
            Ok(SourceSelection::Picked(self.path.clone()))
        } else {
            tracing::warn!(path = %self.path.display(), "Source path is not a readable file");
            Ok(SourceSelection::Cancelled)
        }
    }

    fn name(&self) -> &str {
        "path"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn path_picker_returns_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("movie.mov");
        std::fs::write(&video, b"not really a video").unwrap();

        let picker = PathPicker::new(&video);
        let selection = picker.pick().await.unwrap();
        assert_eq!(selection, SourceSelection::Picked(video));
    }

    #[tokio::test]
    async fn path_picker_cancels_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let picker = PathPicker::new(dir.path().join("nope.mp4"));
        let selection = picker.pick().await.unwrap();
        assert!(selection.is_cancelled());
        assert_eq!(selection.path(), None);
    }

    #[tokio::test]
    async fn path_picker_cancels_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        let picker = PathPicker::new(dir.path());
        let selection = picker.pick().await.unwrap();
        assert!(selection.is_cancelled());
    }
}
