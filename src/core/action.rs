//! # Actions
//!
//! Everything that can happen to a course becomes an `Action`.
//! User clicks "add section"? That's `Action::AddSection`.
//! A drag ends? That's `Action::Reorder(drop_result)`.
//!
//! The `update()` function takes the store and an action, swaps in the next
//! snapshot, and returns an `Effect` for the caller to carry out (show a toast,
//! run the export). No I/O here.
//!
//! ```text
//! Snapshot + Action  →  apply()  →  Some(next snapshot) | None (no-op)
//! ```
//!
//! Actions are serde-deserializable so an edit session can be replayed from a
//! JSON file: `{"action": "addSection", "kind": "multi-module"}`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::model::{
    CourseData, Difficulty, Module, Overview, Section, SectionBody, SectionKind, new_module_id,
    new_section_id,
};
use crate::core::notify::Toast;
use crate::core::reorder::{self, DropResult};
use crate::core::state::Store;
use crate::core::templates;

// ============================================================================
// Partial updates
// ============================================================================

/// Fields of a section that may be changed in place. `None` leaves a field alone.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub is_editing: Option<bool>,
    /// Only meaningful for multi-module sections; ignored otherwise.
    pub is_expanded: Option<bool>,
}

impl SectionPatch {
    fn apply_to(&self, section: &mut Section) {
        if let Some(title) = &self.title {
            section.title = title.clone();
        }
        if let Some(editing) = self.is_editing {
            section.is_editing = editing;
        }
        if let Some(expanded) = self.is_expanded
            && let SectionBody::MultiModule { is_expanded, .. } = &mut section.body
        {
            *is_expanded = expanded;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ModulePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub template: Option<String>,
    pub is_editing: Option<bool>,
}

impl ModulePatch {
    fn apply_to(&self, module: &mut Module) {
        if let Some(title) = &self.title {
            module.title = title.clone();
        }
        if let Some(content) = &self.content {
            module.content = content.clone();
        }
        if let Some(template) = &self.template {
            module.template = template.clone();
        }
        if let Some(editing) = self.is_editing {
            module.is_editing = editing;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub prerequisites: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub is_editing: Option<bool>,
}

impl OverviewPatch {
    fn apply_to(&self, overview: &mut Overview) {
        if let Some(title) = &self.title {
            overview.title = title.clone();
        }
        if let Some(content) = &self.content {
            overview.content = content.clone();
        }
        if let Some(objectives) = &self.objectives {
            overview.objectives = objectives.clone();
        }
        if let Some(prerequisites) = &self.prerequisites {
            overview.prerequisites = prerequisites.clone();
        }
        if let Some(duration) = &self.duration {
            overview.duration = duration.clone();
        }
        if let Some(difficulty) = self.difficulty {
            overview.difficulty = difficulty;
        }
        if let Some(editing) = self.is_editing {
            overview.is_editing = editing;
        }
    }
}

// ============================================================================
// Action / Effect
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Append a section. Single-module sections get a module seeded from `template`.
    AddSection {
        kind: SectionKind,
        template: Option<String>,
    },
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },
    DeleteSection {
        section_id: String,
    },
    /// Append a seeded module to a multi-module section.
    AddModuleToSection {
        section_id: String,
        template: String,
    },
    /// Sidebar shortcut: add to the last section, or start a new multi-module
    /// section when the course is empty.
    AddModule {
        template: String,
    },
    UpdateModule {
        section_id: String,
        module_id: String,
        patch: ModulePatch,
    },
    DeleteModule {
        section_id: String,
        module_id: String,
    },
    SetCourseTitle {
        title: String,
    },
    UpdateOverview {
        patch: OverviewPatch,
    },
    AddObjective {
        text: String,
    },
    UpdateObjective {
        index: usize,
        text: String,
    },
    RemoveObjective {
        index: usize,
    },
    /// End of a drag-and-drop gesture.
    Reorder(DropResult),
    /// Export the current snapshot.
    SaveCourse,
}

/// Work the caller must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Notify(Toast),
    Export,
}

/// Feeds an action to the store. The snapshot is replaced only when the
/// action actually changes the document.
pub fn update(store: &mut Store, action: Action) -> Effect {
    debug!("Action: {:?}", action);

    if action == Action::SaveCourse {
        return Effect::Export;
    }

    let current = store.snapshot();
    match apply(&current, &action) {
        Some((next, effect)) => {
            store.replace(next);
            effect
        }
        None => {
            debug!("Action was a no-op");
            Effect::None
        }
    }
}

/// Pure reducer: the next snapshot plus its effect, or `None` for a no-op.
pub fn apply(course: &CourseData, action: &Action) -> Option<(CourseData, Effect)> {
    let (next, effect) = match action {
        Action::AddSection { kind, template } => {
            let next = add_section(course, *kind, template.as_deref());
            (next, Effect::Notify(Toast::section_added(*kind)))
        }
        Action::UpdateSection { section_id, patch } => {
            let next = with_section(course, section_id, |s| {
                patch.apply_to(s);
                Some(())
            })?;
            (next, Effect::None)
        }
        Action::DeleteSection { section_id } => {
            course.section(section_id)?;
            let mut next = course.clone();
            next.sections.retain(|s| &s.id != section_id);
            (next, Effect::Notify(Toast::section_deleted()))
        }
        Action::AddModuleToSection {
            section_id,
            template,
        } => {
            let next = add_module_to_section(course, section_id, template)?;
            (next, Effect::Notify(Toast::module_added()))
        }
        Action::AddModule { template } => match course.sections.last() {
            None => {
                let kind = SectionKind::MultiModule;
                let next = add_section(course, kind, Some(template));
                (next, Effect::Notify(Toast::section_added(kind)))
            }
            Some(last) => {
                let next = add_module_to_section(course, &last.id, template)?;
                (next, Effect::Notify(Toast::module_added()))
            }
        },
        Action::UpdateModule {
            section_id,
            module_id,
            patch,
        } => {
            let next = with_section(course, section_id, |s| {
                let module = match &mut s.body {
                    SectionBody::SingleModule { module } => {
                        Some(module).filter(|m| &m.id == module_id)
                    }
                    SectionBody::MultiModule { modules, .. } => {
                        modules.iter_mut().find(|m| &m.id == module_id)
                    }
                }?;
                patch.apply_to(module);
                Some(())
            })?;
            (next, Effect::None)
        }
        Action::DeleteModule {
            section_id,
            module_id,
        } => {
            let next = with_section(course, section_id, |s| {
                // A single-module section cannot lose its only module.
                let modules = s.module_list_mut()?;
                let idx = modules.iter().position(|m| &m.id == module_id)?;
                modules.remove(idx);
                Some(())
            })?;
            (next, Effect::Notify(Toast::module_deleted()))
        }
        Action::SetCourseTitle { title } => {
            let mut next = course.clone();
            next.title = title.clone();
            (next, Effect::None)
        }
        Action::UpdateOverview { patch } => {
            let mut next = course.clone();
            patch.apply_to(&mut next.overview);
            (next, Effect::None)
        }
        Action::AddObjective { text } => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            let mut next = course.clone();
            next.overview.objectives.push(text.to_string());
            (next, Effect::None)
        }
        Action::UpdateObjective { index, text } => {
            let mut next = course.clone();
            *next.overview.objectives.get_mut(*index)? = text.clone();
            (next, Effect::None)
        }
        Action::RemoveObjective { index } => {
            if *index >= course.overview.objectives.len() {
                return None;
            }
            let mut next = course.clone();
            next.overview.objectives.remove(*index);
            (next, Effect::None)
        }
        Action::Reorder(drop) => (reorder::apply_drop(course, drop)?, Effect::None),
        Action::SaveCourse => return None,
    };

    if next == *course {
        return None;
    }
    Some((next, effect))
}

/// Clones the course and runs `edit` on the section with `section_id`.
/// `None` if the section is missing or `edit` declines.
fn with_section<F>(course: &CourseData, section_id: &str, edit: F) -> Option<CourseData>
where
    F: FnOnce(&mut Section) -> Option<()>,
{
    let idx = course.section_index(section_id)?;
    let mut next = course.clone();
    edit(&mut next.sections[idx])?;
    Some(next)
}

fn unique_id(course: &CourseData, generate: fn() -> String) -> String {
    loop {
        let id = generate();
        if !course.contains_id(&id) {
            return id;
        }
    }
}

fn seeded_module(course: &CourseData, template: Option<&str>, fallback_title: &str) -> Module {
    let seed = templates::seed(template, fallback_title);
    Module {
        id: unique_id(course, new_module_id),
        title: seed.title,
        content: seed.content,
        template: seed.template,
        is_editing: false,
    }
}

fn add_section(course: &CourseData, kind: SectionKind, template: Option<&str>) -> CourseData {
    let (title, body) = match kind {
        SectionKind::SingleModule => (
            "New Policy",
            SectionBody::SingleModule {
                module: seeded_module(course, template, "New Content"),
            },
        ),
        SectionKind::MultiModule => (
            "New Section",
            SectionBody::MultiModule {
                is_expanded: true,
                modules: Vec::new(),
            },
        ),
    };

    let mut next = course.clone();
    next.sections.push(Section {
        id: unique_id(course, new_section_id),
        title: title.to_string(),
        is_editing: true,
        body,
    });
    next
}

fn add_module_to_section(
    course: &CourseData,
    section_id: &str,
    template: &str,
) -> Option<CourseData> {
    let module = seeded_module(course, Some(template), "New Module");
    with_section(course, section_id, |s| {
        s.module_list_mut()?.push(module);
        Some(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reorder::{DragKind, DropLocation};
    use crate::core::templates::FALLBACK_TEMPLATE_ID;
    use crate::test_support::{course, module, multi_section, single_section, test_store};
    use std::sync::Arc;

    fn store_with(sections: Vec<Section>) -> Store {
        Store::from_course(course(sections))
    }

    fn section_ids(store: &Store) -> Vec<String> {
        store.course().sections.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_add_single_module_section_seeds_from_template() {
        let mut store = test_store();
        let effect = update(
            &mut store,
            Action::AddSection {
                kind: SectionKind::SingleModule,
                template: Some("video-lesson".to_string()),
            },
        );
        assert!(matches!(effect, Effect::Notify(ref t) if t.title == "Section Added"));

        let section = &store.course().sections[0];
        assert_eq!(section.title, "New Policy");
        assert!(section.is_editing);
        match &section.body {
            SectionBody::SingleModule { module } => {
                assert_eq!(module.template, "video-lesson");
                assert_eq!(module.title, "Video Lesson");
                assert!(!module.is_editing);
            }
            other => panic!("Expected single-module body, got {:?}", other),
        }
    }

    #[test]
    fn test_add_single_module_section_unknown_template() {
        let mut store = test_store();
        update(
            &mut store,
            Action::AddSection {
                kind: SectionKind::SingleModule,
                template: Some("mystery".to_string()),
            },
        );
        let module = &store.course().sections[0].modules()[0];
        assert_eq!(module.template, FALLBACK_TEMPLATE_ID);
        assert_eq!(module.title, "New Content");
        assert_eq!(module.content, templates::PLACEHOLDER_CONTENT);
    }

    #[test]
    fn test_add_multi_module_section_starts_empty_and_expanded() {
        let mut store = test_store();
        update(
            &mut store,
            Action::AddSection {
                kind: SectionKind::MultiModule,
                template: None,
            },
        );
        let section = &store.course().sections[0];
        assert_eq!(section.title, "New Section");
        assert!(section.is_editing);
        assert!(matches!(
            section.body,
            SectionBody::MultiModule { is_expanded: true, ref modules } if modules.is_empty()
        ));
    }

    #[test]
    fn test_add_and_delete_sections_preserves_order() {
        let mut store = test_store();
        for _ in 0..4 {
            update(
                &mut store,
                Action::AddSection {
                    kind: SectionKind::MultiModule,
                    template: None,
                },
            );
        }
        let ids = section_ids(&store);
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);

        let effect = update(
            &mut store,
            Action::DeleteSection {
                section_id: ids[1].clone(),
            },
        );
        assert_eq!(effect, Effect::Notify(Toast::section_deleted()));
        assert_eq!(section_ids(&store), vec![ids[0].clone(), ids[2].clone(), ids[3].clone()]);
    }

    #[test]
    fn test_delete_unknown_section_is_noop() {
        let mut store = store_with(vec![multi_section("S1", vec![])]);
        let before = store.snapshot();
        let effect = update(
            &mut store,
            Action::DeleteSection {
                section_id: "ghost".to_string(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_update_section_merges_fields() {
        let mut store = store_with(vec![
            multi_section("S1", vec![module("A")]),
            multi_section("S2", vec![]),
        ]);
        update(
            &mut store,
            Action::UpdateSection {
                section_id: "S1".to_string(),
                patch: SectionPatch {
                    title: Some("Week 1".to_string()),
                    is_expanded: Some(false),
                    ..Default::default()
                },
            },
        );
        let s1 = &store.course().sections[0];
        assert_eq!(s1.title, "Week 1");
        assert!(matches!(s1.body, SectionBody::MultiModule { is_expanded: false, .. }));
        assert_eq!(s1.modules().len(), 1);
        assert_eq!(section_ids(&store), vec!["S1", "S2"]);
    }

    #[test]
    fn test_update_section_unknown_id_is_noop() {
        let mut store = store_with(vec![multi_section("S1", vec![])]);
        let before = store.snapshot();
        update(
            &mut store,
            Action::UpdateSection {
                section_id: "nope".to_string(),
                patch: SectionPatch {
                    title: Some("x".to_string()),
                    ..Default::default()
                },
            },
        );
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_add_module_to_multi_section_appends() {
        let mut store = store_with(vec![multi_section("S1", vec![module("A")])]);
        let effect = update(
            &mut store,
            Action::AddModuleToSection {
                section_id: "S1".to_string(),
                template: "lecture-notes".to_string(),
            },
        );
        assert_eq!(effect, Effect::Notify(Toast::module_added()));
        let modules = store.course().sections[0].modules();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].id, "A");
        assert_eq!(modules[1].title, "Lecture Notes");
        assert!(!modules[1].is_editing);
    }

    #[test]
    fn test_add_module_with_unknown_template_uses_new_module_title() {
        let mut store = store_with(vec![multi_section("S1", vec![])]);
        update(
            &mut store,
            Action::AddModuleToSection {
                section_id: "S1".to_string(),
                template: "nope".to_string(),
            },
        );
        assert_eq!(store.course().sections[0].modules()[0].title, "New Module");
    }

    #[test]
    fn test_add_module_to_single_section_is_noop() {
        let mut store = store_with(vec![single_section("P", module("X"))]);
        let before = store.snapshot();
        let effect = update(
            &mut store,
            Action::AddModuleToSection {
                section_id: "P".to_string(),
                template: "reading-content".to_string(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(*before, *store.course());
    }

    #[test]
    fn test_sidebar_add_module_on_empty_course_creates_section() {
        let mut store = test_store();
        let effect = update(
            &mut store,
            Action::AddModule {
                template: "reading-content".to_string(),
            },
        );
        assert!(matches!(effect, Effect::Notify(ref t) if t.title == "Section Added"));
        assert_eq!(store.course().sections.len(), 1);
        assert_eq!(store.course().sections[0].kind(), SectionKind::MultiModule);
    }

    #[test]
    fn test_sidebar_add_module_targets_last_section() {
        let mut store = store_with(vec![
            multi_section("S1", vec![]),
            multi_section("S2", vec![]),
        ]);
        update(
            &mut store,
            Action::AddModule {
                template: "discussion-prompt".to_string(),
            },
        );
        assert!(store.course().sections[0].modules().is_empty());
        assert_eq!(store.course().sections[1].modules()[0].template, "discussion-prompt");
    }

    #[test]
    fn test_new_module_ids_are_globally_unique() {
        let mut store = store_with(vec![
            multi_section("S1", vec![]),
            multi_section("S2", vec![]),
        ]);
        for id in ["S1", "S2", "S1", "S2"] {
            update(
                &mut store,
                Action::AddModuleToSection {
                    section_id: id.to_string(),
                    template: "video-lesson".to_string(),
                },
            );
        }
        let mut all: Vec<_> = store
            .course()
            .sections
            .iter()
            .flat_map(|s| s.modules().iter().map(|m| m.id.clone()))
            .collect();
        assert_eq!(all.len(), 4);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_update_module_only_touches_target() {
        let mut store = store_with(vec![
            multi_section("S1", vec![module("A"), module("B")]),
            multi_section("S2", vec![module("C")]),
        ]);
        let untouched = store.course().sections[1].clone();
        update(
            &mut store,
            Action::UpdateModule {
                section_id: "S1".to_string(),
                module_id: "B".to_string(),
                patch: ModulePatch {
                    content: Some("<p>edited</p>".to_string()),
                    is_editing: Some(true),
                    ..Default::default()
                },
            },
        );
        let s1 = store.course().sections[0].modules();
        assert_eq!(s1[0], module("A"));
        assert_eq!(s1[1].content, "<p>edited</p>");
        assert!(s1[1].is_editing);
        assert_eq!(store.course().sections[1], untouched);
    }

    #[test]
    fn test_update_module_in_single_section() {
        let mut store = store_with(vec![single_section("P", module("X"))]);
        update(
            &mut store,
            Action::UpdateModule {
                section_id: "P".to_string(),
                module_id: "X".to_string(),
                patch: ModulePatch {
                    title: Some("Grading Policy".to_string()),
                    ..Default::default()
                },
            },
        );
        assert_eq!(store.course().sections[0].modules()[0].title, "Grading Policy");
    }

    #[test]
    fn test_update_module_wrong_section_is_noop() {
        let mut store = store_with(vec![
            multi_section("S1", vec![module("A")]),
            multi_section("S2", vec![]),
        ]);
        let before = store.snapshot();
        update(
            &mut store,
            Action::UpdateModule {
                section_id: "S2".to_string(),
                module_id: "A".to_string(),
                patch: ModulePatch {
                    title: Some("moved?".to_string()),
                    ..Default::default()
                },
            },
        );
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_delete_module() {
        let mut store = store_with(vec![multi_section(
            "S1",
            vec![module("A"), module("B"), module("C")],
        )]);
        let effect = update(
            &mut store,
            Action::DeleteModule {
                section_id: "S1".to_string(),
                module_id: "B".to_string(),
            },
        );
        assert_eq!(effect, Effect::Notify(Toast::module_deleted()));
        let ids: Vec<_> = store.course().sections[0]
            .modules()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_module_from_single_section_is_noop() {
        let mut store = store_with(vec![single_section("P", module("X"))]);
        let effect = update(
            &mut store,
            Action::DeleteModule {
                section_id: "P".to_string(),
                module_id: "X".to_string(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(store.course().sections[0].modules().len(), 1);
    }

    #[test]
    fn test_update_overview_merges() {
        let mut store = test_store();
        update(
            &mut store,
            Action::UpdateOverview {
                patch: OverviewPatch {
                    duration: Some("6 weeks".to_string()),
                    difficulty: Some(Difficulty::Advanced),
                    ..Default::default()
                },
            },
        );
        let overview = &store.course().overview;
        assert_eq!(overview.duration, "6 weeks");
        assert_eq!(overview.difficulty, Difficulty::Advanced);
        assert_eq!(overview.title, "Course Overview");
    }

    #[test]
    fn test_objectives_add_update_remove() {
        let mut store = test_store();
        for text in ["a", "  b  ", "c"] {
            update(&mut store, Action::AddObjective { text: text.to_string() });
        }
        assert_eq!(store.course().overview.objectives, vec!["a", "b", "c"]);

        update(
            &mut store,
            Action::UpdateObjective {
                index: 2,
                text: "c!".to_string(),
            },
        );
        update(&mut store, Action::RemoveObjective { index: 1 });
        assert_eq!(store.course().overview.objectives, vec!["a", "c!"]);
    }

    #[test]
    fn test_blank_objective_is_ignored() {
        let mut store = test_store();
        let before = store.snapshot();
        update(&mut store, Action::AddObjective { text: "   \t".to_string() });
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_objective_out_of_range_is_noop() {
        let mut store = test_store();
        update(&mut store, Action::AddObjective { text: "only".to_string() });
        let before = store.snapshot();
        update(&mut store, Action::RemoveObjective { index: 5 });
        update(
            &mut store,
            Action::UpdateObjective {
                index: 1,
                text: "x".to_string(),
            },
        );
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_set_course_title() {
        let mut store = test_store();
        update(
            &mut store,
            Action::SetCourseTitle {
                title: "Systems Programming".to_string(),
            },
        );
        assert_eq!(store.course().title, "Systems Programming");
    }

    #[test]
    fn test_reorder_through_update() {
        let mut store = store_with(vec![
            multi_section("S1", vec![module("A"), module("B")]),
            multi_section("S2", vec![module("C")]),
        ]);
        update(
            &mut store,
            Action::Reorder(DropResult {
                source: DropLocation::new("S1", 0),
                destination: Some(DropLocation::new("S2", 1)),
                kind: DragKind::Module,
            }),
        );
        let s2: Vec<_> = store.course().sections[1]
            .modules()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(s2, vec!["C", "A"]);
    }

    #[test]
    fn test_cancelled_drag_keeps_same_snapshot() {
        let mut store = store_with(vec![multi_section("S1", vec![module("A")])]);
        let before = store.snapshot();
        let effect = update(
            &mut store,
            Action::Reorder(DropResult {
                source: DropLocation::new("S1", 0),
                destination: None,
                kind: DragKind::Module,
            }),
        );
        assert_eq!(effect, Effect::None);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_save_course_requests_export() {
        let mut store = test_store();
        let before = store.snapshot();
        assert_eq!(update(&mut store, Action::SaveCourse), Effect::Export);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_actions_parse_from_json() {
        let json = r#"[
            { "action": "addSection", "kind": "single-module", "template": "video-lesson" },
            { "action": "updateSection", "sectionId": "S1", "patch": { "isExpanded": false } },
            { "action": "addObjective", "text": "Learn things" },
            { "action": "reorder", "source": { "droppableId": "sections", "index": 1 },
              "destination": { "droppableId": "sections", "index": 0 }, "type": "section" },
            { "action": "saveCourse" }
        ]"#;
        let actions: Vec<Action> = serde_json::from_str(json).unwrap();
        assert_eq!(actions.len(), 5);
        assert_eq!(
            actions[0],
            Action::AddSection {
                kind: SectionKind::SingleModule,
                template: Some("video-lesson".to_string()),
            }
        );
        assert!(matches!(
            &actions[1],
            Action::UpdateSection { patch, .. } if patch.is_expanded == Some(false) && patch.title.is_none()
        ));
        assert!(matches!(&actions[3], Action::Reorder(d) if d.kind == DragKind::Section));
        assert_eq!(actions[4], Action::SaveCourse);
    }
}
