//! # Notifications
//!
//! Short user-facing messages ("toasts") confirming additions, deletions and
//! export outcomes. The store only produces `Toast` values; showing them is
//! the job of a `Notifier`, which is fire-and-forget.

use log::{info, warn};

use crate::core::model::SectionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    /// Failure the user should notice.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn section_added(kind: SectionKind) -> Self {
        Self::info(
            "Section Added",
            format!("New {} has been added to your course.", kind.label()),
        )
    }

    pub fn section_deleted() -> Self {
        Self::info("Section Deleted", "The section has been removed from your course.")
    }

    pub fn module_added() -> Self {
        Self::info("Module Added", "New module has been added to the section.")
    }

    pub fn module_deleted() -> Self {
        Self::info("Module Deleted", "The module has been removed from the section.")
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Something that can show a toast to the user.
pub trait Notifier {
    fn notify(&self, toast: &Toast);
}

/// Writes toasts to the log file and to stderr.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: &Toast) {
        match toast.severity {
            Severity::Info => info!("[toast] {}: {}", toast.title, toast.description),
            Severity::Destructive => warn!("[toast] {}: {}", toast.title, toast.description),
        }
        eprintln!("{}: {}", toast.title, toast.description);
    }
}
