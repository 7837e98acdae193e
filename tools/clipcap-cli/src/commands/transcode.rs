//! Re-encode a video into the cache scratch directory.

use std::path::PathBuf;

use clipcap_common::config::AppConfig;
use clipcap_media::cache::ScratchLayout;
use clipcap_media::transcode::{FfmpegBackend, TranscodeBackend, TranscodeJob};

pub fn run(
    config: AppConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    codec: Option<String>,
) -> anyhow::Result<()> {
    let mut backend = FfmpegBackend::new();
    if !backend.is_available() {
        return Err(anyhow::anyhow!("ffmpeg not found in PATH"));
    }

    let dest = match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            path
        }
        None => {
            let layout = ScratchLayout::new(&config.cache_dir, &config.transcode.result_filename);
            layout.ensure_result_path()?
        }
    };

    let job = TranscodeJob {
        source: input.clone(),
        dest: dest.clone(),
        video_codec: codec.unwrap_or(config.transcode.video_codec),
    };

    println!("Transcoding: {}", input.display());
    println!("  Codec: {}", job.video_codec);
    println!("  Output: {}", dest.display());

    backend
        .transcode(&job)
        .map_err(|e| anyhow::anyhow!("Transcode failed: {e}"))?;

    println!("Transcode complete: {}", dest.display());
    Ok(())
}
