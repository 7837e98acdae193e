//! Run the full pick/transcode/upload pipeline.

use std::path::PathBuf;

use clipcap_common::config::AppConfig;
use clipcap_picker::{DialogPicker, PathPicker, SourcePicker};
use clipcap_pipeline::{Pipeline, PipelineState};

pub async fn run(
    mut config: AppConfig,
    source: Option<PathBuf>,
    endpoint: Option<String>,
    codec: Option<String>,
) -> anyhow::Result<()> {
    if let Some(endpoint) = endpoint {
        config.api.endpoint = endpoint;
    }
    if let Some(codec) = codec {
        config.transcode.video_codec = codec;
    }

    let picker: Box<dyn SourcePicker> = match source {
        Some(path) => Box::new(PathPicker::new(path)),
        None => Box::new(DialogPicker::new()),
    };

    let mut pipeline = Pipeline::from_config(&config, picker);
    let report = pipeline
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Pipeline failed: {e}"))?;

    if report.state == PipelineState::Idle {
        println!("Selection cancelled.");
        return Ok(());
    }

    if let Some(source) = &report.source {
        println!("Source: {}", source.display());
    }
    match &report.result {
        Some(result) => println!("Result: {}", result.display()),
        None => println!("Result: none (re-encode did not finish)"),
    }
    match report.captions {
        Some(n) => println!("Captions: {n}"),
        None => println!("Captions: unavailable"),
    }

    Ok(())
}
