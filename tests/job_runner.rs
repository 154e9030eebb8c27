use std::path::PathBuf;

use ffshrink::engine::{EncodeJob, JobOutcome, JobRunner, WorkerMessage, run_job};

/// Stand-in job that runs a shell snippet instead of ffmpeg
#[cfg(unix)]
fn sh_job(script: &str, output_path: PathBuf) -> EncodeJob {
    EncodeJob {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        input_path: PathBuf::from("input.mp4"),
        output_path,
    }
}

#[test]
fn missing_tool_maps_to_tool_not_found() {
    let job = EncodeJob {
        program: "ffshrink-test-no-such-encoder".to_string(),
        args: vec!["-y".to_string()],
        input_path: PathBuf::from("input.mp4"),
        output_path: PathBuf::from("input_compressed.mp4"),
    };

    assert!(matches!(run_job(&job), JobOutcome::ToolNotFound));
}

#[cfg(unix)]
#[test]
fn nonzero_exit_surfaces_stderr_verbatim() {
    let job = sh_job(
        "echo 'Unsupported codec' >&2; exit 1",
        PathBuf::from("out.mp4"),
    );

    match run_job(&job) {
        JobOutcome::Failure { diagnostic } => assert_eq!(diagnostic, "Unsupported codec"),
        other => panic!("expected Failure, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn nonzero_exit_with_silent_tool_reports_status() {
    let job = sh_job("exit 3", PathBuf::from("out.mp4"));

    match run_job(&job) {
        JobOutcome::Failure { diagnostic } => {
            assert!(
                diagnostic.contains("status"),
                "expected an exit-status diagnostic, got {:?}",
                diagnostic
            );
        }
        other => panic!("expected Failure, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn zero_exit_maps_to_success_with_output_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("clip_compressed.mp4");
    let job = sh_job(
        &format!("echo encoded > '{}'", output_path.display()),
        output_path.clone(),
    );

    match run_job(&job) {
        JobOutcome::Success { output_path: reported } => {
            assert_eq!(reported, output_path);
            assert!(output_path.exists(), "tool stand-in should have written output");
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn gate_blocks_second_start_until_finished() {
    let runner = JobRunner::new();
    assert!(runner.can_start());

    let job = sh_job("exit 0", PathBuf::from("out.mp4"));
    runner.start(job.clone()).expect("first start");

    // In flight: the gate is closed and a second start is rejected
    assert!(!runner.can_start());
    assert!(runner.start(job).is_err());

    // Exactly one started + one finished message per run
    match runner.receiver().recv().expect("started message") {
        WorkerMessage::JobStarted { .. } => {}
        other => panic!("expected JobStarted, got {:?}", other),
    }
    let outcome = match runner.receiver().recv().expect("finished message") {
        WorkerMessage::JobFinished { outcome, .. } => outcome,
        other => panic!("expected JobFinished, got {:?}", other),
    };
    assert!(matches!(outcome, JobOutcome::Success { .. }));

    // The gate stays closed until the foreground dispatches the outcome
    assert!(!runner.can_start());
    runner.finish();
    assert!(runner.can_start());
}

#[cfg(unix)]
#[test]
fn gate_resets_after_failure_too() {
    let runner = JobRunner::new();
    runner
        .start(sh_job("exit 1", PathBuf::from("out.mp4")))
        .expect("start");

    loop {
        match runner.receiver().recv().expect("worker message") {
            WorkerMessage::JobStarted { .. } => continue,
            WorkerMessage::JobFinished { outcome, .. } => {
                assert!(matches!(outcome, JobOutcome::Failure { .. }));
                break;
            }
        }
    }

    runner.finish();
    assert!(runner.can_start());
}

#[cfg(unix)]
#[test]
fn runner_survives_missing_tool() {
    let runner = JobRunner::new();
    let job = EncodeJob {
        program: "ffshrink-test-no-such-encoder".to_string(),
        args: vec![],
        input_path: PathBuf::from("input.mp4"),
        output_path: PathBuf::from("out.mp4"),
    };
    runner.start(job).expect("start");

    loop {
        match runner.receiver().recv().expect("worker message") {
            WorkerMessage::JobStarted { .. } => continue,
            WorkerMessage::JobFinished { outcome, .. } => {
                assert!(matches!(outcome, JobOutcome::ToolNotFound));
                break;
            }
        }
    }

    runner.finish();
    assert!(runner.can_start());
}
