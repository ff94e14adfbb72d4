//! Transient user-facing notices — the server-side stand-in for a toast.
//!
//! Handlers embed notices in response payloads; the `Notifier` port is the
//! side-channel that also surfaces them out-of-band. Production wires in
//! `TracingNotifier`; tests substitute a recording impl.

use serde::Serialize;
use tracing::{info, warn};

use crate::upload::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn analysis_complete() -> Self {
        Self {
            title: "Analysis Complete!".to_string(),
            description: "Your resume has been successfully analyzed.".to_string(),
            severity: NoticeSeverity::Info,
        }
    }

    pub fn analysis_deleted() -> Self {
        Self {
            title: "Analysis deleted".to_string(),
            description: "Resume analysis has been removed from history.".to_string(),
            severity: NoticeSeverity::Info,
        }
    }

    pub fn rejection(reason: &ValidationError) -> Self {
        let (title, description) = match reason {
            ValidationError::InvalidFileType => {
                ("Invalid file type", "Please upload a PDF file only.")
            }
            ValidationError::FileTooLarge => {
                ("File too large", "Please upload a file smaller than 10MB.")
            }
            ValidationError::MissingFile => {
                ("No file provided", "Attach one PDF file to analyze.")
            }
        };
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity: NoticeSeverity::Destructive,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.severity {
            NoticeSeverity::Info => info!("{}: {}", notice.title, notice.description),
            NoticeSeverity::Destructive => warn!("{}: {}", notice.title, notice.description),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Captures notices so tests can assert on what the user would see.
    #[derive(Default)]
    pub struct RecordingNotifier {
        seen: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        pub fn taken(&self) -> Vec<Notice> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.seen.lock().unwrap().push(notice.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_notices_carry_original_toast_texts() {
        let n = Notice::rejection(&ValidationError::InvalidFileType);
        assert_eq!(n.title, "Invalid file type");
        assert_eq!(n.description, "Please upload a PDF file only.");
        assert_eq!(n.severity, NoticeSeverity::Destructive);

        let n = Notice::rejection(&ValidationError::FileTooLarge);
        assert_eq!(n.title, "File too large");
        assert_eq!(n.description, "Please upload a file smaller than 10MB.");
    }

    #[test]
    fn test_completion_notice_is_informational() {
        let n = Notice::analysis_complete();
        assert_eq!(n.title, "Analysis Complete!");
        assert_eq!(n.severity, NoticeSeverity::Info);
    }
}
