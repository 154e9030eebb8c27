use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeDocument {
    format: ProbeFormat,
}

fn tool_version(program: &str) -> Result<String> {
    let output = Command::new(program)
        .arg("-version")
        .output()
        .with_context(|| format!("Failed to execute {program}. Is it installed and in PATH?"))?;

    if !output.status.success() {
        anyhow::bail!("{program} -version failed with status: {}", output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or("unknown version").to_string())
}

/// Check that ffmpeg is on PATH and return its version banner line
pub fn ffmpeg_version() -> Result<String> {
    tool_version("ffmpeg")
}

/// Check that ffprobe is on PATH and return its version banner line
pub fn ffprobe_version() -> Result<String> {
    tool_version("ffprobe")
}

/// Probe a video file for its duration in seconds
pub fn probe_duration(path: &Path) -> Result<f64> {
    let output = Command::new("ffprobe")
        .args(["-v", "quiet", "-print_format", "json", "-show_format"])
        .arg(path)
        .output()
        .context("Failed to execute ffprobe")?;

    if !output.status.success() {
        anyhow::bail!(
            "ffprobe failed for {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    parse_probe_duration(&String::from_utf8_lossy(&output.stdout))
}

/// Extract `format.duration` from an ffprobe JSON document
pub fn parse_probe_duration(json: &str) -> Result<f64> {
    let doc: ProbeDocument =
        serde_json::from_str(json).context("Failed to parse ffprobe JSON output")?;

    doc.format
        .duration
        .context("No duration in ffprobe output")?
        .parse::<f64>()
        .context("Failed to parse duration as float")
}
