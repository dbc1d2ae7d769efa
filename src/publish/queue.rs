//! Background exports.
//!
//! ```text
//! SaveCourse ──> submit(snapshot) ──> tokio task: save_course() ──> toasts
//!      │                                                            │
//!      └── next edit runs right away          drain_finished() / finish()
//! ```
//!
//! Each task owns its own `Arc` of the snapshot, so edits made after a save
//! never leak into that save's file or webhook payload.

use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};
use tokio::task::{JoinError, JoinSet};

use crate::core::model::CourseData;
use crate::core::notify::Toast;
use crate::publish::{Publisher, save_course};

pub struct ExportQueue {
    dest: PathBuf,
    publisher: Option<Arc<dyn Publisher>>,
    tasks: JoinSet<Vec<Toast>>,
}

impl ExportQueue {
    pub fn new(dest: PathBuf, publisher: Option<Arc<dyn Publisher>>) -> Self {
        Self {
            dest,
            publisher,
            tasks: JoinSet::new(),
        }
    }

    /// Starts saving `snapshot` in the background and returns immediately.
    pub fn submit(&mut self, snapshot: Arc<CourseData>) {
        info!(
            "Spawning export of {} ({} pending)",
            snapshot.course_id,
            self.tasks.len()
        );

        // Clone what we need for the async task
        let dest = self.dest.clone();
        let publisher = self.publisher.clone();

        self.tasks.spawn(async move {
            save_course(&snapshot, &dest, publisher.as_deref()).await
        });
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Toasts of exports that have already completed. Never waits.
    pub fn drain_finished(&mut self) -> Vec<Toast> {
        let mut toasts = Vec::new();
        while let Some(result) = self.tasks.try_join_next() {
            toasts.extend(collect(result));
        }
        toasts
    }

    /// Waits for every outstanding export, returning their toasts in
    /// completion order.
    pub async fn finish(&mut self) -> Vec<Toast> {
        let mut toasts = Vec::new();
        while let Some(result) = self.tasks.join_next().await {
            toasts.extend(collect(result));
        }
        toasts
    }
}

fn collect(result: Result<Vec<Toast>, JoinError>) -> Vec<Toast> {
    match result {
        Ok(toasts) => toasts,
        Err(e) => {
            warn!("Export task failed: {}", e);
            vec![Toast::destructive(
                "Download Error",
                format!("Export did not complete: {e}"),
            )]
        }
    }
}
