//! ClipCap Local Media Handling
//!
//! Everything that touches media files on disk:
//! - **Cache:** scratch directory layout under the application cache root
//! - **Transcode:** re-encoding through the external ffmpeg binary
//! - **Probe:** ffprobe-backed media inspection

pub mod cache;
pub mod probe;
pub mod transcode;

pub use cache::*;
pub use transcode::*;
