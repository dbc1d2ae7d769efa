//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::model::{CourseData, Module, Section, SectionBody};
use crate::core::seed::{self, SeedSource};
use crate::core::state::Store;

/// A module whose title and content are derived from its id.
pub fn module(id: &str) -> Module {
    Module {
        id: id.to_string(),
        title: format!("Module {id}"),
        content: format!("<p>{id}</p>"),
        template: "reading-content".to_string(),
        is_editing: false,
    }
}

pub fn single_section(id: &str, module: Module) -> Section {
    Section {
        id: id.to_string(),
        title: format!("Section {id}"),
        is_editing: false,
        body: SectionBody::SingleModule { module },
    }
}

pub fn multi_section(id: &str, modules: Vec<Module>) -> Section {
    Section {
        id: id.to_string(),
        title: format!("Section {id}"),
        is_editing: false,
        body: SectionBody::MultiModule {
            is_expanded: true,
            modules,
        },
    }
}

/// An empty course shell with the given sections.
pub fn course(sections: Vec<Section>) -> CourseData {
    let mut course = seed::initialize(SeedSource::Fresh {
        course_id: "test-course".to_string(),
    });
    course.sections = sections;
    course
}

/// Creates a store over an empty course.
pub fn test_store() -> Store {
    Store::new(SeedSource::Fresh {
        course_id: "test-course".to_string(),
    })
}
