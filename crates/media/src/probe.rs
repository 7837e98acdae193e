//! ffprobe-backed media inspection.

use std::path::Path;
use std::process::Command;

use clipcap_common::error::{ClipcapError, ClipcapResult};

/// Summary of the first video stream and container of a media file.
#[derive(Debug, Clone, Default)]
pub struct MediaInfo {
    /// Container duration in seconds.
    pub duration_secs: Option<f64>,

    /// Video stream dimensions.
    pub width: Option<u32>,
    pub height: Option<u32>,

    /// Video codec name as reported by ffprobe.
    pub codec_name: Option<String>,
}

/// Inspect a media file with ffprobe.
pub fn probe_media(path: &Path) -> ClipcapResult<MediaInfo> {
    if !path.exists() {
        return Err(ClipcapError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height,codec_name:format=duration",
            "-of",
            "json",
        ])
        .arg(path)
        .output()
        .map_err(|e| ClipcapError::probe(format!("Failed to start ffprobe: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClipcapError::probe(format!(
            "ffprobe exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)
        .map_err(|e| ClipcapError::probe(format!("Unparseable ffprobe output: {e}")))?;

    Ok(parse_probe_output(&value))
}

fn parse_probe_output(value: &serde_json::Value) -> MediaInfo {
    let stream = value
        .get("streams")
        .and_then(|s| s.as_array())
        .and_then(|s| s.first());

    // ffprobe reports durations as strings inside the format object.
    let duration_secs = value
        .pointer("/format/duration")
        .and_then(|d| d.as_str())
        .and_then(|d| d.parse::<f64>().ok());

    MediaInfo {
        duration_secs,
        width: stream
            .and_then(|s| s.get("width"))
            .and_then(|w| w.as_u64())
            .map(|w| w as u32),
        height: stream
            .and_then(|s| s.get("height"))
            .and_then(|h| h.as_u64())
            .map(|h| h as u32),
        codec_name: stream
            .and_then(|s| s.get("codec_name"))
            .and_then(|c| c.as_str())
            .map(|c| c.to_string()),
    }
}
