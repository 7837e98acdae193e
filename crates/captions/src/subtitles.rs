//! Subtitle generation in SRT and VTT formats.

use std::path::{Path, PathBuf};

use clipcap_common::error::{ClipcapError, ClipcapResult};

use crate::model::Caption;

/// Generate SRT subtitle content from a caption list.
pub fn generate_srt(captions: &[Caption]) -> String {
    let mut output = String::new();

    for (i, caption) in captions.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(caption.start),
            format_srt_time(caption.end),
        ));
        output.push_str(&caption.text);
        output.push_str("\n\n");
    }

    output
}

/// Generate WebVTT subtitle content from a caption list.
pub fn generate_vtt(captions: &[Caption]) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for caption in captions {
        output.push_str(&format!(
            "{} --> {}\n",
            format_vtt_time(caption.start),
            format_vtt_time(caption.end),
        ));
        output.push_str(&caption.text);
        output.push_str("\n\n");
    }

    output
}

/// Format seconds as SRT timestamp: HH:MM:SS,mmm
fn format_srt_time(secs: f64) -> String {
    let total_ms = (secs * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Format seconds as VTT timestamp: HH:MM:SS.mmm
fn format_vtt_time(secs: f64) -> String {
    let total_ms = (secs * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// Default subtitle path next to a video file (`movie.mov` -> `movie.srt`).
pub fn subtitle_path_for(video: &Path) -> PathBuf {
    video.with_extension("srt")
}

/// Save captions to a subtitle file, picking the format by extension.
pub fn save_subtitles(captions: &[Caption], path: &Path) -> ClipcapResult<()> {
    let content = match path.extension().and_then(|e| e.to_str()) {
        Some("vtt") => generate_vtt(captions),
        _ => generate_srt(captions), // default to SRT
    };
    std::fs::write(path, content).map_err(|e| {
        ClipcapError::subtitle(format!("Failed to write {}: {e}", path.display()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn caption(start: f64, end: f64, text: &str) -> Caption {
        Caption {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn srt_entries_are_numbered_from_one() {
        let captions = vec![
            caption(0.0, 2.5, "Hello world"),
            caption(3.0, 5.0, "This is a test"),
        ];

        let srt = generate_srt(&captions);
        assert!(srt.contains("1\n00:00:00,000 --> 00:00:02,500\nHello world"));
        assert!(srt.contains("2\n00:00:03,000 --> 00:00:05,000\nThis is a test"));
    }

    #[test]
    fn vtt_starts_with_the_magic_header() {
        let captions = vec![caption(61.5, 63.0, "One minute in")];

        let vtt = generate_vtt(&captions);
        assert!(vtt.starts_with("WEBVTT\n"));
        assert!(vtt.contains("00:01:01.500 --> 00:01:03.000"));
    }

    #[test]
    fn time_formatting_rolls_over_minutes_and_hours() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
        assert_eq!(format_srt_time(3661.5), "01:01:01,500");
        assert_eq!(format_vtt_time(3661.5), "01:01:01.500");
    }

    #[test]
    fn save_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let captions = vec![caption(0.0, 1.0, "hi")];

        let srt_path = dir.path().join("out.srt");
        save_subtitles(&captions, &srt_path).unwrap();
        let srt = std::fs::read_to_string(&srt_path).unwrap();
        assert!(srt.starts_with("1\n"));

        let vtt_path = dir.path().join("out.vtt");
        save_subtitles(&captions, &vtt_path).unwrap();
        let vtt = std::fs::read_to_string(&vtt_path).unwrap();
        assert!(vtt.starts_with("WEBVTT\n"));
    }

    #[test]
    fn subtitle_path_sits_next_to_the_video() {
        assert_eq!(
            subtitle_path_for(Path::new("/videos/movie.mov")),
            PathBuf::from("/videos/movie.srt")
        );
    }

    proptest! {
        #[test]
        fn srt_timestamps_always_have_the_fixed_width(secs in 0.0f64..86_400.0) {
            let formatted = format_srt_time(secs);
            prop_assert_eq!(formatted.len(), 12);
            prop_assert_eq!(&formatted[8..9], ",");
        }

        #[test]
        fn vtt_timestamps_always_have_the_fixed_width(secs in 0.0f64..86_400.0) {
            let formatted = format_vtt_time(secs);
            prop_assert_eq!(formatted.len(), 12);
            prop_assert_eq!(&formatted[8..9], ".");
        }
    }
}
