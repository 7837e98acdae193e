//! Remote transcription client.
//!
//! One multipart POST per request: the **original** source file is attached
//! as the `media` part under a generated filename and a fixed `video/*`
//! content-type label. No retry, no streaming, no request timeout.

use std::path::Path;

use chrono::{DateTime, Utc};
use reqwest::multipart;

use clipcap_common::config::ApiConfig;
use clipcap_common::error::{ClipcapError, ClipcapResult};

use crate::model::CaptionResponse;

/// Content-type label attached to the uploaded media part.
pub const MEDIA_CONTENT_TYPE: &str = "video/*";

/// Multipart field name of the uploaded file.
pub const MEDIA_FIELD: &str = "media";

/// Abstract interface for caption providers.
#[async_trait::async_trait]
pub trait CaptionService: Send + Sync {
    /// Submit a source video and wait for its caption list.
    async fn transcribe(&self, source: &Path) -> ClipcapResult<CaptionResponse>;

    /// Service name for diagnostics.
    fn name(&self) -> &str;
}

/// HTTP client for the captioning/translation endpoint.
pub struct TranscriptionClient {
    client: reqwest::Client,
    endpoint: String,
    language: Option<String>,
}

impl TranscriptionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            language: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait::async_trait]
impl CaptionService for TranscriptionClient {
    async fn transcribe(&self, source: &Path) -> ClipcapResult<CaptionResponse> {
        if !source.exists() {
            return Err(ClipcapError::FileNotFound {
                path: source.to_path_buf(),
            });
        }

        let bytes = tokio::fs::read(source).await?;
        let filename = upload_filename(source, Utc::now());

        let media_part = multipart::Part::bytes(bytes)
            .file_name(filename.clone())
            .mime_str(MEDIA_CONTENT_TYPE)
            .map_err(|e| ClipcapError::captions(format!("mime: {e}")))?;

        let mut form = multipart::Form::new().part(MEDIA_FIELD, media_part);
        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            filename = %filename,
            "Uploading source video for transcription"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClipcapError::captions(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ClipcapError::captions(format!("status {status}: {body}")));
        }

        let captions: CaptionResponse = response
            .json()
            .await
            .map_err(|e| ClipcapError::captions(format!("body: {e}")))?;

        tracing::info!(captions = captions.len(), "Transcription completed");

        Ok(captions)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Filename for the uploaded part: upload timestamp plus the extension of
/// the original source path. The transcoded output never contributes here.
pub fn upload_filename(source: &Path, at: DateTime<Utc>) -> String {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("mp4");
    format!("{}.{}", at.format("%Y%m%d%H%M%S"), ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn filename_keeps_the_source_extension() {
        let name = upload_filename(Path::new("/videos/movie.mov"), fixed_time());
        assert_eq!(name, "20240501123000.mov");
    }

    #[test]
    fn filename_falls_back_without_an_extension() {
        let name = upload_filename(Path::new("/videos/movie"), fixed_time());
        assert_eq!(name, "20240501123000.mp4");
    }

    proptest! {
        #[test]
        fn filename_extension_matches_any_source_extension(ext in "[a-z0-9]{1,5}") {
            let source = PathBuf::from(format!("/videos/clip.{ext}"));
            let name = upload_filename(&source, fixed_time());
            let suffix = format!(".{}", ext);
            prop_assert!(name.ends_with(&suffix));
            prop_assert!(name.starts_with("20240501123000."));
        }
    }
}
