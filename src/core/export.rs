//! # Export
//!
//! Serializes a course snapshot to pretty-printed JSON and writes it to disk.
//!
//! The file is written atomically (write `.tmp`, then `rename()`), so a failed
//! export never leaves a partial file behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::core::model::CourseData;

/// File name offered for the download when nothing else is configured.
pub const DEFAULT_FILE_NAME: &str = "course-data.json";

/// Content type of the export payload (file and webhook body).
pub const CONTENT_TYPE: &str = "application/json";

#[derive(Debug)]
pub enum ExportError {
    Serialize(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Serialize(e) => write!(f, "could not serialize course: {e}"),
            ExportError::Io(e) => write!(f, "could not write export: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Pretty-printed JSON for a snapshot.
pub fn to_json(course: &CourseData) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(course).map_err(ExportError::Serialize)?;
    debug!("Serialized course {} ({} bytes)", course.course_id, json.len());
    Ok(json)
}

/// Parses an exported document back into a course.
pub fn from_json(json: &str) -> Result<CourseData, ExportError> {
    serde_json::from_str(json).map_err(ExportError::Serialize)
}

/// Atomically writes `json` to `path` (via `.tmp` + rename).
pub fn write_file(path: &Path, json: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(ExportError::Io)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json).map_err(ExportError::Io)?;
    fs::rename(&tmp_path, path).map_err(ExportError::Io)?;
    info!("Exported course to {}", path.display());
    Ok(())
}

/// Reads a previously exported course from disk.
pub fn read_file(path: &Path) -> Result<CourseData, ExportError> {
    let json = fs::read_to_string(path).map_err(ExportError::Io)?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Difficulty;
    use crate::test_support::{course, module, multi_section, single_section};

    fn sample() -> CourseData {
        let mut c = course(vec![
            single_section("P", module("X")),
            multi_section("S1", vec![module("A"), module("B")]),
            multi_section("S2", vec![]),
        ]);
        c.overview.objectives = vec!["one".to_string(), "two".to_string()];
        c.overview.difficulty = Difficulty::Intermediate;
        c
    }

    #[test]
    fn test_json_round_trip_preserves_document() {
        let original = sample();
        let json = to_json(&original).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_json_is_pretty_and_camel_case() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"courseId\""));
        assert!(json.contains("\"isEditing\""));
        assert!(json.contains("\"type\": \"multi-module\""));
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join(DEFAULT_FILE_NAME);
        let original = sample();
        write_file(&path, &to_json(&original).unwrap()).unwrap();

        assert!(!path.with_extension("tmp").exists());
        assert_eq!(read_file(&path).unwrap(), original);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, ExportError::Serialize(_)));
    }
}
