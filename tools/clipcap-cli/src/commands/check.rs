//! Check system capabilities.

use clipcap_common::config::AppConfig;
use clipcap_media::cache::{ensure_dir, ScratchLayout};
use clipcap_media::transcode::{command_exists, FfmpegBackend, TranscodeBackend};

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    println!("ClipCap System Check");
    println!("{}", "=".repeat(50));

    let mut ok = true;

    // External tools
    let backend = FfmpegBackend::new();
    if backend.is_available() {
        println!("[OK] ffmpeg found in PATH");
    } else {
        println!("[MISSING] ffmpeg not found in PATH");
        ok = false;
    }
    if command_exists("ffprobe") {
        println!("[OK] ffprobe found in PATH");
    } else {
        println!("[WARN] ffprobe not found in PATH (info command unavailable)");
    }

    // Cache scratch directory
    let layout = ScratchLayout::new(&config.cache_dir, &config.transcode.result_filename);
    match ensure_dir(&layout.scratch_dir()) {
        Ok(()) => println!("[OK] Cache scratch dir: {}", layout.scratch_dir().display()),
        Err(e) => {
            println!("[FAIL] Cache scratch dir: {e}");
            ok = false;
        }
    }

    // Remote endpoint
    if config.api.endpoint.is_empty() {
        println!("[FAIL] Transcription endpoint is not configured");
        ok = false;
    } else {
        println!("[OK] Transcription endpoint: {}", config.api.endpoint);
    }

    println!();
    if ok {
        println!("All required capabilities are available. ClipCap is ready.");
    } else {
        println!("Some required capabilities are missing. See above for fixes.");
    }

    Ok(())
}
