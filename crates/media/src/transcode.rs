//! Re-encoding through the external ffmpeg binary.
//!
//! The command template is fixed: `-i <source> -c:v <codec> -y <dest>`.
//! The call blocks until the external process exits; there is no timeout,
//! no cancellation, and no progress reporting. Exit status zero is the only
//! success signal — on any other status the destination file is in an
//! undefined state and callers must not assume it exists.

use std::path::PathBuf;
use std::process::Command;

use clipcap_common::error::{ClipcapError, ClipcapResult};

/// A single re-encode request.
#[derive(Debug, Clone)]
pub struct TranscodeJob {
    /// Source video path.
    pub source: PathBuf,

    /// Destination file path.
    pub dest: PathBuf,

    /// Video codec passed via `-c:v`.
    pub video_codec: String,
}

/// Trait for transcode backends.
pub trait TranscodeBackend: Send {
    /// Execute the re-encode, blocking until the external tool exits.
    fn transcode(&mut self, job: &TranscodeJob) -> ClipcapResult<()>;

    /// Check if this backend is available on the system.
    fn is_available(&self) -> bool;

    /// Backend name.
    fn name(&self) -> &str;
}

/// ffmpeg-based transcode backend.
pub struct FfmpegBackend {
    binary: String,
}

impl FfmpegBackend {
    pub fn new() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
        }
    }

    /// Use an explicit binary instead of resolving `ffmpeg` from PATH.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn build_args(job: &TranscodeJob) -> Vec<String> {
        vec![
            "-i".to_string(),
            job.source.display().to_string(),
            "-c:v".to_string(),
            job.video_codec.clone(),
            "-y".to_string(),
            job.dest.display().to_string(),
        ]
    }
}

impl Default for FfmpegBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscodeBackend for FfmpegBackend {
    fn transcode(&mut self, job: &TranscodeJob) -> ClipcapResult<()> {
        if !job.source.exists() {
            return Err(ClipcapError::FileNotFound {
                path: job.source.clone(),
            });
        }

        let args = Self::build_args(job);
        tracing::debug!(binary = %self.binary, args = ?args, "Running ffmpeg");

        let started = std::time::Instant::now();
        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|e| ClipcapError::transcode(format!("Failed to start ffmpeg: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipcapError::transcode(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        tracing::info!(
            source = %job.source.display(),
            dest = %job.dest.display(),
            codec = %job.video_codec,
            elapsed_secs = started.elapsed().as_secs_f64(),
            "Transcode finished"
        );
        Ok(())
    }

    fn is_available(&self) -> bool {
        command_exists(&self.binary)
    }

    fn name(&self) -> &str {
        "ffmpeg"
    }
}

/// Whether a binary resolves on the PATH.
pub fn command_exists(binary: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {binary} >/dev/null 2>&1"))
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(source: PathBuf) -> TranscodeJob {
        TranscodeJob {
            source,
            dest: PathBuf::from("/tmp/clipcap-test/file2.mp4"),
            video_codec: "mpeg4".to_string(),
        }
    }

    #[test]
    fn args_follow_the_fixed_template() {
        let job = TranscodeJob {
            source: PathBuf::from("/videos/movie.mov"),
            dest: PathBuf::from("/cache/video/file2.mp4"),
            video_codec: "mpeg4".to_string(),
        };
        assert_eq!(
            FfmpegBackend::build_args(&job),
            vec![
                "-i",
                "/videos/movie.mov",
                "-c:v",
                "mpeg4",
                "-y",
                "/cache/video/file2.mp4",
            ]
        );
    }

    #[test]
    fn zero_exit_status_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.mov");
        std::fs::write(&source, b"stub").unwrap();

        // `true` ignores the argument template and exits 0.
        let mut backend = FfmpegBackend::with_binary("true");
        assert!(backend.transcode(&job(source)).is_ok());
    }

    #[test]
    fn nonzero_exit_status_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.mov");
        std::fs::write(&source, b"stub").unwrap();

        let mut backend = FfmpegBackend::with_binary("false");
        let err = backend.transcode(&job(source)).unwrap_err();
        assert!(matches!(err, ClipcapError::Transcode { .. }));
    }

    #[test]
    fn missing_source_is_reported_before_spawning() {
        let mut backend = FfmpegBackend::with_binary("true");
        let err = backend
            .transcode(&job(PathBuf::from("/nonexistent/in.mov")))
            .unwrap_err();
        assert!(matches!(err, ClipcapError::FileNotFound { .. }));
    }
}
