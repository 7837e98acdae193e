//! Show media information.

use std::path::PathBuf;

use clipcap_media::probe::probe_media;

pub fn run(input: PathBuf) -> anyhow::Result<()> {
    let info = probe_media(&input).map_err(|e| anyhow::anyhow!("Probe failed: {e}"))?;

    println!("Media: {}", input.display());
    match info.duration_secs {
        Some(secs) => println!("  Duration: {secs:.1}s"),
        None => println!("  Duration: unknown"),
    }
    match (info.width, info.height) {
        (Some(w), Some(h)) => println!("  Resolution: {w}x{h}"),
        _ => println!("  Resolution: unknown"),
    }
    println!(
        "  Codec: {}",
        info.codec_name.as_deref().unwrap_or("unknown")
    );

    Ok(())
}
