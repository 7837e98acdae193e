//! Wire types for the caption response.
//!
//! The request/response schema is owned by the remote service; only the
//! fields the subtitle generator needs are pinned here, and unknown fields
//! are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A single caption entry with timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    /// Start time in seconds.
    pub start: f64,

    /// End time in seconds.
    pub end: f64,

    /// Caption text.
    pub text: String,
}

/// Response body of the transcription endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptionResponse {
    /// Ordered caption entries.
    #[serde(default)]
    pub captions: Vec<Caption>,
}

impl CaptionResponse {
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }
}
