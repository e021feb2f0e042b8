//! Owner of the dashboard's timer-driven tasks.
//!
//! Every spawned task gets a child of the scheduler's root cancellation
//! token, so [`Scheduler::shutdown`] stops them all. Starting a workflow run
//! while another is in flight cancels the old run and waits for it to exit
//! before the new one resets the steps; runs never interleave.

use std::time::Duration;

use fusion_application::DashboardService;
use fusion_core::FusionConfig;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::pulse_ticker::PulseTicker;
use crate::workflow_runner::{RunOutcome, WorkflowRunner};

struct ScheduledTask<T> {
    token: CancellationToken,
    handle: JoinHandle<T>,
}

impl<T> ScheduledTask<T> {
    async fn stop(self) -> Option<T> {
        self.token.cancel();
        self.handle.await.ok()
    }
}

pub struct Scheduler {
    runner: WorkflowRunner,
    ticker: PulseTicker,
    root: CancellationToken,
    ticker_task: Mutex<Option<ScheduledTask<u64>>>,
    workflow_task: Mutex<Option<ScheduledTask<RunOutcome>>>,
}

impl Scheduler {
    pub fn new(service: DashboardService, config: &FusionConfig) -> Self {
        let runner = WorkflowRunner::new(service.clone(), config.step_delay());
        Self::with_runner(service, runner, config.tick_interval())
    }

    pub fn with_runner(
        service: DashboardService,
        runner: WorkflowRunner,
        tick_interval: Duration,
    ) -> Self {
        Self {
            runner,
            ticker: PulseTicker::new(service, tick_interval),
            root: CancellationToken::new(),
            ticker_task: Mutex::new(None),
            workflow_task: Mutex::new(None),
        }
    }

    /// Starts the periodic pulse recalibration. Returns false if it is
    /// already running or the scheduler was shut down.
    pub async fn start_pulse_ticker(&self) -> bool {
        if self.root.is_cancelled() {
            return false;
        }
        let mut slot = self.ticker_task.lock().await;
        if slot.as_ref().is_some_and(|task| !task.handle.is_finished()) {
            return false;
        }

        let token = self.root.child_token();
        let ticker = self.ticker.clone();
        let run_token = token.clone();
        let handle = tokio::spawn(async move { ticker.run(run_token).await });
        *slot = Some(ScheduledTask { token, handle });
        tracing::debug!("[Scheduler] Pulse ticker started");
        true
    }

    /// Starts a workflow run, cancelling any run still in flight.
    ///
    /// Returns false once the scheduler was shut down.
    pub async fn run_workflow(&self) -> bool {
        if self.root.is_cancelled() {
            return false;
        }
        let mut slot = self.workflow_task.lock().await;
        if let Some(previous) = slot.take()
            && !previous.handle.is_finished()
        {
            tracing::info!("[Scheduler] Restarting workflow, cancelling the run in flight");
            previous.stop().await;
        }

        let token = self.root.child_token();
        let runner = self.runner.clone();
        let run_token = token.clone();
        let handle = tokio::spawn(async move { runner.run(run_token).await });
        *slot = Some(ScheduledTask { token, handle });
        true
    }

    /// Waits for the current workflow run, if any, and returns how it ended.
    pub async fn wait_for_workflow(&self) -> Option<RunOutcome> {
        let task = self.workflow_task.lock().await.take()?;
        task.handle.await.ok()
    }

    /// Cancels every task and waits for them to exit.
    pub async fn shutdown(&self) {
        self.root.cancel();
        if let Some(task) = self.ticker_task.lock().await.take() {
            task.stop().await;
        }
        if let Some(task) = self.workflow_task.lock().await.take() {
            task.stop().await;
        }
        tracing::debug!("[Scheduler] Shut down");
    }
}
