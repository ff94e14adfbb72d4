//! Upload flow controller.
//!
//! Drives one upload attempt through
//! `Idle → Validating → (Rejected | Simulating → Completed)`, observable
//! through a watch channel. A busy gate keeps exactly one attempt in
//! flight; the gate is taken before any asynchronous work starts and a
//! RAII guard releases it on every terminal path, so a panic or early
//! return can never leave the flow stuck busy.

pub mod handlers;
pub mod progress;
pub mod validate;

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::analysis::generator::mock_analysis;
use crate::history::backend::StorageError;
use crate::history::HistoryStore;
use crate::models::analysis::AnalysisRecord;
use crate::notify::{Notice, Notifier};
use crate::upload::progress::{ProgressTimeline, UploadStatus};
use crate::upload::validate::{validate, IncomingUpload, ValidationError};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("An analysis is already in progress.")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("upload interrupted by shutdown")]
    Cancelled,
}

pub struct UploadFlow {
    busy: AtomicBool,
    status_tx: watch::Sender<UploadStatus>,
    timeline: ProgressTimeline,
    shutdown: CancellationToken,
}

impl UploadFlow {
    pub fn new(shutdown: CancellationToken) -> Self {
        let (status_tx, _) = watch::channel(UploadStatus::Idle);
        Self {
            busy: AtomicBool::new(false),
            status_tx,
            timeline: ProgressTimeline::standard(),
            shutdown,
        }
    }

    pub fn current_status(&self) -> UploadStatus {
        *self.status_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadStatus> {
        self.status_tx.subscribe()
    }

    /// Runs one upload attempt end to end. On success the new record has
    /// already been appended to `history` and the completion notice sent.
    pub async fn run(
        &self,
        upload: IncomingUpload,
        history: &HistoryStore,
        notifier: &dyn Notifier,
    ) -> Result<AnalysisRecord, UploadError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(UploadError::Busy);
        }
        let _guard = BusyGuard(self);

        self.status_tx.send_replace(UploadStatus::Validating);
        if let Err(reason) = validate(&upload) {
            notifier.notify(&Notice::rejection(&reason));
            return Err(reason.into());
        }

        if !self.timeline.run(&self.status_tx, &self.shutdown).await {
            info!(file_name = %upload.file_name, "upload interrupted by shutdown");
            return Err(UploadError::Cancelled);
        }

        let mut rng = StdRng::from_os_rng();
        let record = mock_analysis(&upload.file_name, Utc::now(), &mut rng);
        self.status_tx
            .send_replace(UploadStatus::Simulating { percent: 100 });

        history.append(record.clone()).await?;
        notifier.notify(&Notice::analysis_complete());
        info!(
            file_name = %record.file_name,
            rating = record.resume_rating,
            "analysis complete"
        );
        Ok(record)
    }
}

struct BusyGuard<'a>(&'a UploadFlow);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.status_tx.send_replace(UploadStatus::Idle);
        self.0.busy.store(false, Ordering::SeqCst);
    }
}
