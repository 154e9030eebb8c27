use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use super::request::EncodeRequest;

/// Inserted before the extension of the derived output file
pub const OUTPUT_SUFFIX: &str = "_compressed";

/// A fully assembled ffmpeg invocation for one run
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeJob {
    pub program: String,
    pub args: Vec<String>,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Final result of a run, produced exactly once by the runner
#[derive(Debug, Clone)]
pub enum JobOutcome {
    Success { output_path: PathBuf },
    Failure { diagnostic: String },
    ToolNotFound,
}

/// Derive the output path: `<dir>/<stem>_compressed<ext>`, next to the input.
///
/// The extension is never changed. If the input already carries the suffix
/// the derived path simply stacks another one; `-y` decides any collision.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let file_name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{OUTPUT_SUFFIX}.{ext}"),
        None => format!("{stem}{OUTPUT_SUFFIX}"),
    };

    dir.join(file_name)
}

/// Build the ffmpeg invocation for a validated request.
///
/// Pure and deterministic: the same request always yields the same job.
/// Argument order is fixed and tool-mandated; audio is always stream-copied.
pub fn build_job(request: &EncodeRequest) -> EncodeJob {
    let output_path = derive_output_path(&request.input_path);

    let args = vec![
        "-y".to_string(),
        "-i".to_string(),
        request.input_path.to_string_lossy().into_owned(),
        "-c:v".to_string(),
        request.codec.encoder_id().to_string(),
        "-crf".to_string(),
        request.quality.to_string(),
        "-preset".to_string(),
        request.preset.as_arg().to_string(),
        "-c:a".to_string(),
        "copy".to_string(),
        output_path.to_string_lossy().into_owned(),
    ];

    EncodeJob {
        program: "ffmpeg".to_string(),
        args,
        input_path: request.input_path.clone(),
        output_path,
    }
}

/// Shell-quoted rendering of a job for the dry-run output and the UI preview
pub fn format_cmd(job: &EncodeJob) -> String {
    std::iter::once(job.program.as_str())
        .chain(job.args.iter().map(String::as_str))
        .map(|arg| match shlex::try_quote(arg) {
            Ok(quoted) => quoted.into_owned(),
            Err(_) => arg.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a job to completion, blocking the calling thread.
///
/// Must only be called off the UI event loop (the worker thread, or the
/// headless `encode` path). No stdin is sent; stdout and stderr are captured
/// as text. A non-zero exit maps to `Failure` carrying the raw stderr.
pub fn run_job(job: &EncodeJob) -> JobOutcome {
    debug!(command = %format_cmd(job), "spawning encoder");

    let mut cmd = Command::new(&job.program);
    cmd.args(&job.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(program = %job.program, "encoder not found on PATH");
            return JobOutcome::ToolNotFound;
        }
        Err(e) => {
            return JobOutcome::Failure {
                diagnostic: format!("failed to launch {}: {}", job.program, e),
            };
        }
    };

    let output = match child.wait_with_output() {
        Ok(output) => output,
        Err(e) => {
            return JobOutcome::Failure {
                diagnostic: format!("failed to wait for {}: {}", job.program, e),
            };
        }
    };

    if output.status.success() {
        info!(output = %job.output_path.display(), "encode finished");
        JobOutcome::Success {
            output_path: job.output_path.clone(),
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = match stderr.trim_end() {
            "" => format!("{} exited with status {}", job.program, output.status),
            text => text.to_string(),
        };
        warn!(status = %output.status, "encode failed");
        JobOutcome::Failure { diagnostic }
    }
}
