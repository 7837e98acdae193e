//! ClipCap Captions
//!
//! Remote captioning and subtitle output:
//! - **Client:** multipart upload of the source video to the transcription
//!   service, returning the caption list
//! - **Model:** wire types for the caption response
//! - **Subtitles:** SRT/VTT output from caption lists

pub mod client;
pub mod model;
pub mod subtitles;

pub use client::*;
pub use model::*;
pub use subtitles::*;
