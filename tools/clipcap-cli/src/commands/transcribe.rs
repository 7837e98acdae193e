//! Upload a video and fetch its captions.

use std::path::PathBuf;

use clipcap_captions::client::{CaptionService, TranscriptionClient};
use clipcap_captions::subtitles::{save_subtitles, subtitle_path_for};
use clipcap_common::config::AppConfig;

pub async fn run(
    mut config: AppConfig,
    input: PathBuf,
    write: bool,
    output: Option<PathBuf>,
    endpoint: Option<String>,
    language: Option<String>,
) -> anyhow::Result<()> {
    if let Some(endpoint) = endpoint {
        config.api.endpoint = endpoint;
    }
    if let Some(language) = language {
        config.api.language = Some(language);
    }

    let client = TranscriptionClient::from_config(&config.api);
    println!("Uploading: {}", input.display());

    let response = client
        .transcribe(&input)
        .await
        .map_err(|e| anyhow::anyhow!("Transcription failed: {e}"))?;

    if response.is_empty() {
        println!("No captions returned.");
        return Ok(());
    }

    if write || output.is_some() {
        let path = output.unwrap_or_else(|| subtitle_path_for(&input));
        save_subtitles(&response.captions, &path)
            .map_err(|e| anyhow::anyhow!("Failed to write subtitles: {e}"))?;
        println!("Wrote {} captions to {}", response.len(), path.display());
    } else {
        for caption in &response.captions {
            println!(
                "[{:>8.3} --> {:>8.3}] {}",
                caption.start, caption.end, caption.text
            );
        }
    }

    Ok(())
}
