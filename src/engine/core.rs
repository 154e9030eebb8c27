mod ffmpeg_cmd;
mod ffmpeg_info;
mod request;

pub use ffmpeg_cmd::{
    EncodeJob, JobOutcome, OUTPUT_SUFFIX, build_job, derive_output_path, format_cmd, run_job,
};
pub use ffmpeg_info::{ffmpeg_version, ffprobe_version, parse_probe_duration, probe_duration};
pub use request::{
    Codec, DEFAULT_QUALITY, EncodeParams, EncodeRequest, QUALITY_MAX, QUALITY_MIN, SpeedPreset,
    ValidationError,
};
