use crate::cli::{Cli, Commands, EncodeOpts};
use ffshrink::engine::{self, EncodeParams, JobOutcome};
use ffshrink::ui;
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        // Headless paths own the terminal, so log to stderr there
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();

        match command {
            Commands::CheckFfmpeg => handle_check_ffmpeg(),
            Commands::Probe { file } => handle_probe(file),
            Commands::DryRun(opts) => handle_dry_run(opts),
            Commands::Encode(opts) => handle_encode(opts),
        }
        return;
    }

    // Launch the TUI (default behavior)
    if let Err(e) = ui::run_ui(cli.input) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn handle_check_ffmpeg() {
    match engine::ffmpeg_version() {
        Ok(version) => {
            println!("ffmpeg found: {}", version);
            match engine::ffprobe_version() {
                Ok(probe_version) => println!("ffprobe found: {}", probe_version),
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_probe(file: std::path::PathBuf) {
    match engine::probe_duration(&file) {
        Ok(duration) => {
            println!("Duration: {:.2} seconds", duration);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn params_from_opts(opts: &EncodeOpts) -> EncodeParams {
    EncodeParams {
        input_path: Some(opts.file.clone()),
        codec: opts.codec,
        quality: opts.quality,
        preset: opts.preset,
    }
}

fn handle_dry_run(opts: EncodeOpts) {
    match params_from_opts(&opts).validate() {
        Ok(request) => {
            let job = engine::build_job(&request);
            println!("{}", engine::format_cmd(&job));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_encode(opts: EncodeOpts) {
    let request = match params_from_opts(&opts).validate() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let job = engine::build_job(&request);
    println!(
        "Encoding: {} → {}",
        job.input_path.display(),
        job.output_path.display()
    );

    match engine::run_job(&job) {
        JobOutcome::Success { output_path } => {
            println!("Encoded: {}", output_path.display());
        }
        JobOutcome::Failure { diagnostic } => {
            eprintln!("Encoding failed:\n{}", diagnostic);
            process::exit(1);
        }
        JobOutcome::ToolNotFound => {
            eprintln!("Error: ffmpeg not found. Install ffmpeg and make sure it is in PATH.");
            process::exit(1);
        }
    }
}
