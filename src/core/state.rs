//! # Outline Store
//!
//! Owns the current course snapshot.
//!
//! ```text
//! Store
//! ├── course: Arc<CourseData>   // current snapshot, never mutated in place
//! └── revision: u64             // bumped on every replacement
//! ```
//!
//! State changes only happen through `update(store, action)` in action.rs.
//! A no-op action leaves the same `Arc` in place, so callers can detect
//! "nothing happened" with `Arc::ptr_eq`.

use std::sync::Arc;

use log::debug;

use crate::core::model::CourseData;
use crate::core::seed::{self, SeedSource};

pub struct Store {
    course: Arc<CourseData>,
    revision: u64,
}

impl Store {
    /// Builds the starting snapshot from a seed.
    pub fn new(seed: SeedSource) -> Self {
        Self::from_course(seed::initialize(seed))
    }

    pub fn from_course(course: CourseData) -> Self {
        Self {
            course: Arc::new(course),
            revision: 0,
        }
    }

    /// The current snapshot. Cloning the `Arc` is how a reader (renderer,
    /// exporter) takes a consistent view while edits continue.
    pub fn snapshot(&self) -> Arc<CourseData> {
        Arc::clone(&self.course)
    }

    pub fn course(&self) -> &CourseData {
        &self.course
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swaps in a new snapshot.
    pub(crate) fn replace(&mut self, next: CourseData) {
        self.revision += 1;
        debug!(
            "Snapshot replaced: revision={}, sections={}, modules={}",
            self.revision,
            next.sections.len(),
            next.module_count()
        );
        self.course = Arc::new(next);
    }
}
