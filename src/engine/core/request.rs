use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// CRF range understood by libx264/libx265 (lower = higher fidelity)
pub const QUALITY_MIN: u32 = 0;
pub const QUALITY_MAX: u32 = 51;

pub const DEFAULT_QUALITY: u32 = 23;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Codec {
    H264,
    H265,
}

impl Codec {
    /// The ffmpeg encoder identifier passed to `-c:v`
    pub fn encoder_id(&self) -> &'static str {
        match self {
            Codec::H264 => "libx264",
            Codec::H265 => "libx265",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Codec::H264 => "H.264",
            Codec::H265 => "H.265",
        }
    }

    pub const ALL: [Codec; 2] = [Codec::H264, Codec::H265];
}

// Round-trips through clap's value parser for --codec defaults
impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Codec::H264 => "h264",
            Codec::H265 => "h265",
        })
    }
}

/// x264/x265 speed presets, ordered fastest to slowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SpeedPreset {
    Ultrafast,
    Superfast,
    Veryfast,
    Faster,
    Fast,
    Medium,
    Slow,
    Slower,
    Veryslow,
}

impl SpeedPreset {
    /// The preset name passed to `-preset`
    pub fn as_arg(&self) -> &'static str {
        match self {
            SpeedPreset::Ultrafast => "ultrafast",
            SpeedPreset::Superfast => "superfast",
            SpeedPreset::Veryfast => "veryfast",
            SpeedPreset::Faster => "faster",
            SpeedPreset::Fast => "fast",
            SpeedPreset::Medium => "medium",
            SpeedPreset::Slow => "slow",
            SpeedPreset::Slower => "slower",
            SpeedPreset::Veryslow => "veryslow",
        }
    }

    pub const ALL: [SpeedPreset; 9] = [
        SpeedPreset::Ultrafast,
        SpeedPreset::Superfast,
        SpeedPreset::Veryfast,
        SpeedPreset::Faster,
        SpeedPreset::Fast,
        SpeedPreset::Medium,
        SpeedPreset::Slow,
        SpeedPreset::Slower,
        SpeedPreset::Veryslow,
    ];
}

impl fmt::Display for SpeedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no input file selected")]
    MissingInput,

    #[error("quality {0} out of range ({QUALITY_MIN}-{QUALITY_MAX})")]
    InvalidQuality(u32),
}

/// Current form selections. Mutable while the user edits; snapshotted into
/// an [`EncodeRequest`] when a run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeParams {
    pub input_path: Option<PathBuf>,
    pub codec: Codec,
    pub quality: u32,
    pub preset: SpeedPreset,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            input_path: None,
            codec: Codec::H264,
            quality: DEFAULT_QUALITY,
            preset: SpeedPreset::Medium,
        }
    }
}

impl EncodeParams {
    /// Validate the current selections and capture an immutable request.
    ///
    /// The UI only offers closed enumerations and an in-range slider, but the
    /// range check stays here so a direct caller (headless `encode`) gets the
    /// same rejection instead of a malformed ffmpeg invocation.
    pub fn validate(&self) -> Result<EncodeRequest, ValidationError> {
        let input_path = match &self.input_path {
            Some(p) if !p.as_os_str().is_empty() => p.clone(),
            _ => return Err(ValidationError::MissingInput),
        };

        if self.quality > QUALITY_MAX {
            return Err(ValidationError::InvalidQuality(self.quality));
        }

        Ok(EncodeRequest {
            input_path,
            codec: self.codec,
            quality: self.quality,
            preset: self.preset,
        })
    }
}

/// Immutable snapshot of a validated set of selections for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub input_path: PathBuf,
    pub codec: Codec,
    pub quality: u32,
    pub preset: SpeedPreset,
}
