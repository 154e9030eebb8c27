use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use ffshrink::engine::{Codec, DEFAULT_QUALITY, SpeedPreset};

#[derive(Parser)]
#[command(name = "ffshrink")]
#[command(about = "Single-file ffmpeg video compressor with a terminal form", long_about = None)]
pub struct Cli {
    /// Video file to prefill the encode form with
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct EncodeOpts {
    /// Path to the input video file
    pub file: PathBuf,

    /// Video codec to encode with
    #[arg(long, value_enum, default_value_t = Codec::H264)]
    pub codec: Codec,

    /// CRF quality value, 0-51 (lower = higher fidelity)
    #[arg(long, default_value_t = DEFAULT_QUALITY)]
    pub quality: u32,

    /// Encoding speed preset
    #[arg(long, value_enum, default_value_t = SpeedPreset::Medium)]
    pub preset: SpeedPreset,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check if ffmpeg and ffprobe are installed
    CheckFfmpeg,

    /// Probe a video file to get its duration
    Probe {
        /// Path to the video file
        file: PathBuf,
    },

    /// Show the ffmpeg command without executing it
    DryRun(EncodeOpts),

    /// Encode one file headlessly, blocking until it finishes
    Encode(EncodeOpts),
}

pub fn parse() -> Cli {
    Cli::parse()
}
