//! Simulated analysis progress.
//!
//! The original product shows a staged progress bar while "analyzing"; the
//! timeline here reproduces that schedule as an explicit, cancellable
//! abstraction instead of a chain of ad hoc timers. Emissions are strictly
//! increasing and the completion step always runs after the last emission.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Observable phase of the one in-flight upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum UploadStatus {
    Idle,
    Validating,
    Simulating { percent: u8 },
}

pub const PROGRESS_STEPS: &[u8] = &[20, 40, 60, 80, 95];

pub struct ProgressTimeline {
    steps: &'static [u8],
    step_interval: Duration,
    completion_lag: Duration,
}

impl ProgressTimeline {
    /// 20/40/60/80/95 at 500 ms spacing, completing 500 ms after the last
    /// step: 3 s end to end.
    pub fn standard() -> Self {
        Self {
            steps: PROGRESS_STEPS,
            step_interval: Duration::from_millis(500),
            completion_lag: Duration::from_millis(500),
        }
    }

    /// Publishes each step on `status` after its delay, then waits out the
    /// completion lag. Returns `false` if cancelled before finishing; the
    /// caller must not proceed to completion in that case.
    pub async fn run(
        &self,
        status: &watch::Sender<UploadStatus>,
        cancel: &CancellationToken,
    ) -> bool {
        for &percent in self.steps {
            tokio::select! {
                _ = cancel.cancelled() => return false,
                _ = tokio::time::sleep(self.step_interval) => {}
            }
            status.send_replace(UploadStatus::Simulating { percent });
        }
        tokio::select! {
            _ = cancel.cancelled() => false,
            _ = tokio::time::sleep(self.completion_lag) => true,
        }
    }
}
