//! # Course Model
//!
//! The course document as plain data. Every value here is owned and `Clone`,
//! so an edit can build the next snapshot from the current one without
//! touching it.
//!
//! ```text
//! CourseData
//! ├── course_id: String
//! ├── title: String
//! ├── overview: Overview          // summary card (objectives, difficulty, ...)
//! └── sections: Vec<Section>      // ordered
//!     ├── SingleModule { module }          // exactly one module
//!     └── MultiModule { is_expanded, modules: Vec<Module> }
//! ```
//!
//! The serde attributes pin the JSON shape of the export file: camelCase keys
//! and a `"type"` discriminator of `"single-module"` / `"multi-module"`.

use serde::{Deserialize, Serialize};

/// Leaf content unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    /// Rich-text markup owned by the editor. Never inspected here.
    pub content: String,
    /// Template id the module was seeded from, or `"custom"` for imports.
    pub template: String,
    pub is_editing: bool,
}

/// Which flavour of section to create. Mirrors the `"type"` tag on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    SingleModule,
    MultiModule,
}

impl SectionKind {
    /// Human label used in notifications ("single module", "multi module").
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::SingleModule => "single module",
            SectionKind::MultiModule => "multi module",
        }
    }
}

/// Variant-specific half of a section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionBody {
    SingleModule {
        module: Module,
    },
    MultiModule {
        #[serde(rename = "isExpanded", default = "default_expanded")]
        is_expanded: bool,
        #[serde(default)]
        modules: Vec<Module>,
    },
}

fn default_expanded() -> bool {
    true
}

/// Top-level container in the outline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub is_editing: bool,
    #[serde(flatten)]
    pub body: SectionBody,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self.body {
            SectionBody::SingleModule { .. } => SectionKind::SingleModule,
            SectionBody::MultiModule { .. } => SectionKind::MultiModule,
        }
    }

    /// All modules of the section in order, regardless of variant.
    pub fn modules(&self) -> &[Module] {
        match &self.body {
            SectionBody::SingleModule { module } => std::slice::from_ref(module),
            SectionBody::MultiModule { modules, .. } => modules,
        }
    }

    /// The module list of a multi-module section. `None` for single-module
    /// sections, which are never valid drop targets.
    pub fn module_list(&self) -> Option<&Vec<Module>> {
        match &self.body {
            SectionBody::MultiModule { modules, .. } => Some(modules),
            SectionBody::SingleModule { .. } => None,
        }
    }

    pub fn module_list_mut(&mut self) -> Option<&mut Vec<Module>> {
        match &mut self.body {
            SectionBody::MultiModule { modules, .. } => Some(modules),
            SectionBody::SingleModule { .. } => None,
        }
    }
}

/// Closed set of difficulty levels shown on the overview card.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Course-level summary record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub title: String,
    pub content: String,
    pub objectives: Vec<String>,
    pub prerequisites: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub is_editing: bool,
}

/// Root aggregate. One per editing session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    pub course_id: String,
    pub title: String,
    pub overview: Overview,
    pub sections: Vec<Section>,
}

impl CourseData {
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    /// Finds a module anywhere in the document, returning its owning section too.
    pub fn find_module(&self, module_id: &str) -> Option<(&Section, &Module)> {
        self.sections.iter().find_map(|section| {
            section
                .modules()
                .iter()
                .find(|m| m.id == module_id)
                .map(|m| (section, m))
        })
    }

    /// True if any section or module already uses `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.sections
            .iter()
            .any(|s| s.id == id || s.modules().iter().any(|m| m.id == id))
    }

    pub fn module_count(&self) -> usize {
        self.sections.iter().map(|s| s.modules().len()).sum()
    }
}

/// Generate a section id (`sec_<uuid>`).
pub fn new_section_id() -> String {
    format!("sec_{}", uuid::Uuid::new_v4())
}

/// Generate a module id (`mod_<uuid>`).
pub fn new_module_id() -> String {
    format!("mod_{}", uuid::Uuid::new_v4())
}
