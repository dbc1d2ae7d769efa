//! # Seeding
//!
//! Builds the first snapshot of an editing session, either as an empty shell
//! keyed by an external id, or by hydrating a course schema document.
//!
//! Hydration rules:
//! - a schema section with exactly one module becomes a single-module section,
//!   anything else (zero or several) becomes an expanded multi-module section
//! - a module's content fragments are joined with [`FRAGMENT_SEPARATOR`]
//! - imported modules carry the `"custom"` template and keep their schema ids

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::model::{CourseData, Difficulty, Module, Overview, Section, SectionBody};
use crate::core::templates::CUSTOM_TEMPLATE;

/// Visual break inserted between a module's imported content fragments.
pub const FRAGMENT_SEPARATOR: &str = "<hr />";

// ============================================================================
// Schema document
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchema {
    pub course_title: String,
    #[serde(default)]
    pub course_description: String,
    #[serde(default)]
    pub sections: Vec<SchemaSection>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSection {
    pub section_id: String,
    pub section_title: String,
    #[serde(default)]
    pub modules: Vec<SchemaModule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaModule {
    pub module_id: String,
    pub module_title: String,
    #[serde(default)]
    pub content: Vec<ContentFragment>,
}

/// One piece of module content. Extra keys in the source document (fragment
/// type, ids) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContentFragment {
    #[serde(default)]
    pub data: String,
}

#[derive(Debug)]
pub enum SchemaError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Io(e) => write!(f, "schema I/O error: {e}"),
            SchemaError::Parse(e) => write!(f, "schema parse error: {e}"),
        }
    }
}

impl std::error::Error for SchemaError {}

impl CourseSchema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(SchemaError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let json = fs::read_to_string(path).map_err(SchemaError::Io)?;
        let schema = Self::from_json(&json)?;
        info!(
            "Loaded course schema from {} ({} sections)",
            path.display(),
            schema.sections.len()
        );
        Ok(schema)
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Where the first snapshot comes from.
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// Empty course shell keyed by an externally supplied id.
    Fresh { course_id: String },
    /// Hydrate from a schema document; the course gets a new id.
    Schema(CourseSchema),
}

pub fn initialize(seed: SeedSource) -> CourseData {
    match seed {
        SeedSource::Fresh { course_id } => {
            debug!("Initializing empty course {}", course_id);
            empty_course(course_id)
        }
        SeedSource::Schema(schema) => hydrate(schema),
    }
}

fn empty_course(course_id: String) -> CourseData {
    CourseData {
        course_id,
        title: "New Course".to_string(),
        overview: Overview {
            title: "Course Overview".to_string(),
            content: "<p>Welcome to this new course!</p>".to_string(),
            objectives: Vec::new(),
            prerequisites: String::new(),
            duration: String::new(),
            difficulty: Difficulty::Beginner,
            is_editing: false,
        },
        sections: Vec::new(),
    }
}

/// Deterministic transform of a schema document into a course.
pub fn hydrate(schema: CourseSchema) -> CourseData {
    let sections: Vec<Section> = schema.sections.into_iter().map(hydrate_section).collect();
    debug!("Hydrated {} sections from schema", sections.len());

    CourseData {
        course_id: uuid::Uuid::new_v4().to_string(),
        title: schema.course_title.clone(),
        overview: Overview {
            title: schema.course_title,
            content: schema.course_description,
            objectives: vec![
                "Define course learning objectives".to_string(),
                "Understand the course structure".to_string(),
            ],
            prerequisites: "No prior knowledge required".to_string(),
            duration: "8 weeks".to_string(),
            difficulty: Difficulty::Beginner,
            is_editing: false,
        },
        sections,
    }
}

fn hydrate_section(section: SchemaSection) -> Section {
    let mut modules: Vec<Module> = section.modules.into_iter().map(hydrate_module).collect();

    // Exactly one module means a standalone page. This also catches real
    // groups that happen to hold a single module.
    let body = if modules.len() == 1 {
        SectionBody::SingleModule {
            module: modules.remove(0),
        }
    } else {
        SectionBody::MultiModule {
            is_expanded: true,
            modules,
        }
    };

    Section {
        id: section.section_id,
        title: section.section_title,
        is_editing: false,
        body,
    }
}

fn hydrate_module(module: SchemaModule) -> Module {
    let content = module
        .content
        .iter()
        .map(|c| c.data.as_str())
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR);

    Module {
        id: module.module_id,
        title: module.module_title,
        content,
        template: CUSTOM_TEMPLATE.to_string(),
        is_editing: false,
    }
}
