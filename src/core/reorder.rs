//! # Reorder Engine
//!
//! Turns the result of a drag-and-drop gesture into a new ordering.
//!
//! ```text
//! DropResult { source, destination?, kind }
//!     │
//!     ├── destination = None        → cancelled, no change
//!     ├── kind = Section            → move within `sections`
//!     └── kind = Module
//!           ├── same container      → move within one module list
//!           └── different container → take from one list, insert into the other
//! ```
//!
//! Container ids for module drags are the owning section's id. Only
//! multi-module sections own a module list, so a single-module section is
//! never a valid container and the drop is treated as cancelled.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::model::{CourseData, Module};

/// What is being dragged. The browser reports `DEFAULT` for the section list,
/// which has no explicit droppable type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    #[serde(alias = "DEFAULT")]
    Section,
    Module,
}

/// A position inside a droppable container.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DropLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// The end of a drag. `destination` is `None` when the item was dropped
/// outside every valid target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
    #[serde(rename = "type")]
    pub kind: DragKind,
}

/// Moves the element at `from` so it ends up at `to`.
///
/// `to` indexes the list after removal; values past the end append.
/// Returns false (list untouched) if `from` is out of range.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
    true
}

/// Applies a drop to a course, returning the next snapshot or `None` if the
/// drop changes nothing (cancelled, unknown container, bad index).
pub fn apply_drop(course: &CourseData, drop: &DropResult) -> Option<CourseData> {
    let Some(destination) = drop.destination.as_ref() else {
        debug!("Drop cancelled: no destination");
        return None;
    };

    match drop.kind {
        DragKind::Section => {
            if drop.source.index == destination.index {
                return None;
            }
            let mut next = course.clone();
            if !move_item(&mut next.sections, drop.source.index, destination.index) {
                debug!("Section drop ignored: index {} out of range", drop.source.index);
                return None;
            }
            Some(next)
        }
        DragKind::Module => move_module(course, &drop.source, destination),
    }
}

fn move_module(
    course: &CourseData,
    source: &DropLocation,
    destination: &DropLocation,
) -> Option<CourseData> {
    let src_idx = course.section_index(&source.droppable_id)?;
    let dst_idx = course.section_index(&destination.droppable_id)?;

    let mut source_modules: Vec<Module> = course.sections[src_idx].module_list()?.clone();
    if source.index >= source_modules.len() {
        debug!(
            "Module drop ignored: index {} out of range in {}",
            source.index, source.droppable_id
        );
        return None;
    }

    let mut next = course.clone();

    if src_idx == dst_idx {
        if source.index == destination.index {
            return None;
        }
        move_item(&mut source_modules, source.index, destination.index);
        *next.sections[src_idx].module_list_mut()? = source_modules;
        return Some(next);
    }

    let mut dest_modules: Vec<Module> = course.sections[dst_idx].module_list()?.clone();
    let moved = source_modules.remove(source.index);
    let at = destination.index.min(dest_modules.len());
    dest_modules.insert(at, moved);

    *next.sections[src_idx].module_list_mut()? = source_modules;
    *next.sections[dst_idx].module_list_mut()? = dest_modules;
    Some(next)
}
