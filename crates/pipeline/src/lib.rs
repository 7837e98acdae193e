//! ClipCap Pipeline
//!
//! Sequences one run of the pick → transcode → upload flow:
//! ensure the cache scratch directory, ask the picker for a source video,
//! re-encode it into the scratch directory, then submit the original file
//! for captioning. Cancellation short-circuits before any processing.
//! Transcode and upload failures are absorbed at the call site and only
//! surface in the diagnostic log; the run report reflects them solely
//! through the absence of a result video.
//!
//! One run is a single cooperative sequence; concurrent runs sharing a
//! scratch layout race on the destination path and are not guarded against.

use std::path::PathBuf;

use clipcap_captions::client::CaptionService;
use clipcap_captions::subtitles::generate_srt;
use clipcap_common::config::AppConfig;
use clipcap_common::error::ClipcapResult;
use clipcap_media::cache::ScratchLayout;
use clipcap_media::transcode::{FfmpegBackend, TranscodeBackend, TranscodeJob};
use clipcap_picker::{SourcePicker, SourceSelection};

/// Observable states of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Picking,
    Transcoding,
    Uploading,
    Done,
    FailedSilently,
}

/// Observable end-state of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Terminal state. `Idle` means the picker was cancelled.
    pub state: PipelineState,

    /// Selected source video, if any.
    pub source: Option<PathBuf>,

    /// Re-encoded output; set only when the transcoder reported success.
    pub result: Option<PathBuf>,

    /// Number of captions returned by the service; `None` when the upload
    /// failed or never ran.
    pub captions: Option<usize>,
}

impl RunReport {
    fn cancelled() -> Self {
        Self {
            state: PipelineState::Idle,
            source: None,
            result: None,
            captions: None,
        }
    }
}

/// Drives the pick → transcode → upload sequence.
pub struct Pipeline {
    picker: Box<dyn SourcePicker>,
    transcoder: Box<dyn TranscodeBackend>,
    captions: Box<dyn CaptionService>,
    layout: ScratchLayout,
    video_codec: String,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(
        picker: Box<dyn SourcePicker>,
        transcoder: Box<dyn TranscodeBackend>,
        captions: Box<dyn CaptionService>,
        layout: ScratchLayout,
        video_codec: impl Into<String>,
    ) -> Self {
        Self {
            picker,
            transcoder,
            captions,
            layout,
            video_codec: video_codec.into(),
            state: PipelineState::Idle,
        }
    }

    /// Assemble a pipeline from the application config with the given
    /// picker, using ffmpeg and the configured transcription endpoint.
    pub fn from_config(config: &AppConfig, picker: Box<dyn SourcePicker>) -> Self {
        Self::new(
            picker,
            Box::new(FfmpegBackend::new()),
            Box::new(clipcap_captions::client::TranscriptionClient::from_config(
                &config.api,
            )),
            ScratchLayout::new(&config.cache_dir, &config.transcode.result_filename),
            &config.transcode.video_codec,
        )
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::debug!(from = ?self.state, to = ?next, "Pipeline state");
        self.state = next;
    }

    /// Run the pipeline once.
    ///
    /// Filesystem errors from the scratch directory propagate; transcode
    /// and upload failures do not.
    pub async fn run(&mut self) -> ClipcapResult<RunReport> {
        // Scratch destination is resolved before the picker opens, matching
        // the call order the rest of the flow depends on.
        let dest = self.layout.ensure_result_path()?;

        self.transition(PipelineState::Picking);
        tracing::info!(picker = self.picker.name(), "Selecting source video");
        let source = match self.picker.pick().await? {
            SourceSelection::Picked(path) => path,
            SourceSelection::Cancelled => {
                self.transition(PipelineState::Idle);
                return Ok(RunReport::cancelled());
            }
        };

        self.transition(PipelineState::Transcoding);
        let job = TranscodeJob {
            source: source.clone(),
            dest: dest.clone(),
            video_codec: self.video_codec.clone(),
        };
        let result = match self.transcoder.transcode(&job) {
            Ok(()) => Some(dest),
            Err(e) => {
                tracing::error!(error = %e, "Transcode failed; destination is undefined");
                None
            }
        };

        // The original source is uploaded regardless of the transcode
        // outcome; a failed upload leaves no trace beyond the log.
        self.transition(PipelineState::Uploading);
        let captions = match self.captions.transcribe(&source).await {
            Ok(response) => {
                let srt = generate_srt(&response.captions);
                tracing::debug!(
                    captions = response.len(),
                    srt_bytes = srt.len(),
                    "Rendered subtitles from caption response"
                );
                Some(response.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "Transcription upload failed");
                None
            }
        };

        let terminal = if result.is_some() {
            PipelineState::Done
        } else {
            PipelineState::FailedSilently
        };
        self.transition(terminal);

        Ok(RunReport {
            state: terminal,
            source: Some(source),
            result,
            captions,
        })
    }
}
