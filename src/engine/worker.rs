// Background execution of a single encode job

use anyhow::{Result, bail};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::info;
use uuid::Uuid;

use super::core::{EncodeJob, JobOutcome, run_job};

/// Message from the worker thread to the UI event loop
#[derive(Debug)]
pub enum WorkerMessage {
    /// The job's process is being launched
    JobStarted { job_id: Uuid },

    /// The job finished; sent exactly once per run
    JobFinished { job_id: Uuid, outcome: JobOutcome },
}

/// Runs one encode job at a time on a background thread.
///
/// The foreground polls [`receiver`](Self::receiver) for messages and must
/// call [`finish`](Self::finish) after handling `JobFinished`; the in-flight
/// flag stays set for the whole start-to-dispatch window, so `can_start`
/// gates overlapping runs even for non-UI callers.
pub struct JobRunner {
    tx: Sender<WorkerMessage>,
    rx: Receiver<WorkerMessage>,
    running: Arc<AtomicBool>,
}

impl JobRunner {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            tx,
            rx,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Foreground end of the worker channel
    pub fn receiver(&self) -> &Receiver<WorkerMessage> {
        &self.rx
    }

    /// Whether a new job may be started
    pub fn can_start(&self) -> bool {
        !self.running.load(Ordering::SeqCst)
    }

    /// Spawn a job on a background thread.
    ///
    /// Fails without spawning anything if a job is already in flight.
    pub fn start(&self, job: EncodeJob) -> Result<Uuid> {
        if self.running.swap(true, Ordering::SeqCst) {
            bail!("a job is already running");
        }

        let job_id = Uuid::new_v4();
        let tx = self.tx.clone();

        thread::spawn(move || {
            info!(%job_id, input = %job.input_path.display(), "encode job started");
            let _ = tx.send(WorkerMessage::JobStarted { job_id });

            let outcome = run_job(&job);

            let _ = tx.send(WorkerMessage::JobFinished { job_id, outcome });
        });

        Ok(job_id)
    }

    /// Reset the gate to idle. Called by the foreground once the finished
    /// outcome has been dispatched.
    pub fn finish(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
