use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::{
    effects::config::EffectsConfig,
    foundation::core::FrameRgba,
    foundation::error::{FxError, FxResult},
    pipeline::apply::{PipelineOpts, apply_effect_pipeline_rgba8},
};

/// Quiet period used by [`DebounceOpts::default`].
pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(100);

/// Trailing-edge coalescing of repeated calls.
///
/// Each [`push`](Self::push) replaces the pending arguments and moves the deadline to
/// `now + wait`. Time is supplied by the caller, so the state machine itself is deterministic.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer with the given quiet period.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// The quiet period.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule `args`, returning the superseded pending arguments if there were any.
    pub fn push(&mut self, args: T, now: Instant) -> Option<T> {
        let due = now.checked_add(self.wait).unwrap_or(now);
        self.pending.replace((args, due)).map(|(old, _)| old)
    }

    /// Deadline of the pending call.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// `true` while a call is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending arguments once their deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        if self.due_at().is_some_and(|due| now >= due) {
            self.cancel()
        } else {
            None
        }
    }

    /// Drop the pending call without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(args, _)| args)
    }
}

/// One submission to a [`DebouncedPipeline`].
#[derive(Clone, Debug)]
pub struct EffectJob {
    /// Frame to process. Returned in the matching [`EffectOutcome`].
    pub frame: FrameRgba,
    /// Theme `effects` section.
    pub effects: Option<EffectsConfig>,
    /// Pipeline seed identifier.
    pub seed: Option<String>,
}

/// Result of a job that ran.
#[derive(Debug)]
pub struct EffectOutcome {
    /// The processed frame (unchanged when nothing applied or on error).
    pub frame: FrameRgba,
    /// Whether any effect mutated the frame.
    pub result: FxResult<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Options for [`DebouncedPipeline::spawn`].
pub struct DebounceOpts {
    /// Quiet period after the last submission before the job runs.
    pub wait: Duration,
    /// Options forwarded to every pipeline run.
    pub pipeline: PipelineOpts,
}

impl Default for DebounceOpts {
    fn default() -> Self {
        Self {
            wait: DEFAULT_DEBOUNCE_WAIT,
            pipeline: PipelineOpts::default(),
        }
    }
}

/// Background worker that runs only the latest of a burst of pipeline submissions.
///
/// Superseded jobs are discarded without running. A job that has started always runs to
/// completion. Dropping the handle discards any pending job and joins the worker.
pub struct DebouncedPipeline {
    jobs: Option<mpsc::Sender<EffectJob>>,
    worker: Option<JoinHandle<()>>,
}

impl DebouncedPipeline {
    /// Start the worker. Outcomes are delivered on the returned receiver in run order.
    pub fn spawn(opts: DebounceOpts) -> FxResult<(Self, mpsc::Receiver<EffectOutcome>)> {
        let (job_tx, job_rx) = mpsc::channel::<EffectJob>();
        let (out_tx, out_rx) = mpsc::channel::<EffectOutcome>();

        let worker = std::thread::Builder::new()
            .name("riso-fx-debounce".to_string())
            .spawn(move || run_worker(&opts, &job_rx, &out_tx))
            .map_err(|e| FxError::evaluation(format!("failed to spawn debounce worker: {e}")))?;

        Ok((
            Self {
                jobs: Some(job_tx),
                worker: Some(worker),
            },
            out_rx,
        ))
    }

    /// Submit a job, replacing any job still waiting for its quiet period.
    pub fn submit(&self, job: EffectJob) -> FxResult<()> {
        self.jobs
            .as_ref()
            .ok_or_else(|| FxError::evaluation("debounce worker already shut down"))?
            .send(job)
            .map_err(|_| FxError::evaluation("debounce worker exited unexpectedly"))
    }

    /// Stop the worker and wait for it, surfacing a worker panic as an error.
    pub fn shutdown(mut self) -> FxResult<()> {
        self.stop()
    }

    fn stop(&mut self) -> FxResult<()> {
        drop(self.jobs.take());
        match self.worker.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| FxError::evaluation("debounce worker panicked")),
            None => Ok(()),
        }
    }
}

impl Drop for DebouncedPipeline {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::error!("{e}");
        }
    }
}

fn run_worker(
    opts: &DebounceOpts,
    jobs: &mpsc::Receiver<EffectJob>,
    outcomes: &mpsc::Sender<EffectOutcome>,
) {
    let mut debouncer = Debouncer::new(opts.wait);
    loop {
        let now = Instant::now();
        if let Some(job) = debouncer.take_due(now) {
            let outcome = run_job(job, &opts.pipeline);
            if outcomes.send(outcome).is_err() {
                tracing::debug!("debounce outcome receiver dropped, stopping worker");
                return;
            }
            continue;
        }

        let received = match debouncer.due_at() {
            Some(due) => jobs.recv_timeout(due.saturating_duration_since(now)),
            None => jobs.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(job) => {
                if debouncer.push(job, Instant::now()).is_some() {
                    tracing::trace!("superseded pending effect job");
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if debouncer.cancel().is_some() {
                    tracing::debug!("debounced pipeline closed with a pending job, discarding it");
                }
                return;
            }
        }
    }
}

fn run_job(job: EffectJob, opts: &PipelineOpts) -> EffectOutcome {
    let EffectJob {
        mut frame,
        effects,
        seed,
    } = job;
    let canvas = frame.canvas();
    let result = apply_effect_pipeline_rgba8(
        &mut frame.data,
        canvas,
        effects.as_ref(),
        seed.as_deref(),
        opts,
    );
    EffectOutcome { frame, result }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/debounce.rs"]
mod tests;
