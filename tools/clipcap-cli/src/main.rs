//! ClipCap CLI — pick, re-encode, and caption videos.
//!
//! Usage:
//!   clipcap run [SOURCE]        Run the full pick/transcode/upload pipeline
//!   clipcap transcode <INPUT>   Re-encode a video into the cache
//!   clipcap transcribe <INPUT>  Upload a video and fetch its captions
//!   clipcap info <INPUT>        Show media information
//!   clipcap check               Check system capabilities

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use clipcap_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "clipcap",
    about = "Local video re-encoding with remote captioning",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pick/transcode/upload pipeline
    Run {
        /// Source video; opens the media-library dialog when omitted
        source: Option<PathBuf>,

        /// Override the transcription endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Override the video codec
        #[arg(long)]
        codec: Option<String>,
    },

    /// Re-encode a video into the cache scratch directory
    Transcode {
        /// Source video
        input: PathBuf,

        /// Output file path (defaults to the cache scratch destination)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the video codec
        #[arg(long)]
        codec: Option<String>,
    },

    /// Upload a video and fetch its captions
    Transcribe {
        /// Source video
        input: PathBuf,

        /// Write subtitles next to the input instead of printing captions
        #[arg(long)]
        write: bool,

        /// Explicit subtitle output path (implies --write)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the transcription endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Target-language hint forwarded with the upload
        #[arg(long)]
        language: Option<String>,
    },

    /// Show media information
    Info {
        /// Media file to inspect
        input: PathBuf,
    },

    /// Check system capabilities
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    clipcap_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Run {
            source,
            endpoint,
            codec,
        } => commands::run::run(config, source, endpoint, codec).await,
        Commands::Transcode {
            input,
            output,
            codec,
        } => commands::transcode::run(config, input, output, codec),
        Commands::Transcribe {
            input,
            write,
            output,
            endpoint,
            language,
        } => commands::transcribe::run(config, input, write, output, endpoint, language).await,
        Commands::Info { input } => commands::info::run(input),
        Commands::Check => commands::check::run(config),
    }
}
