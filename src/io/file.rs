use std::path::{Path, PathBuf};

use crate::model::{NetworkProject, ProjectAnalysis};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid project or analysis file: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse project JSON from a string. A top-level `criticalPath` marks the
/// bare output of the analysis engine, which is named `name`; anything else
/// is a project file.
pub fn parse_project(json: &str, name: &str) -> Result<NetworkProject, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("criticalPath").is_some() {
        let analysis: ProjectAnalysis = serde_json::from_value(value)?;
        Ok(NetworkProject::from_analysis(name, analysis))
    } else {
        serde_json::from_value(value)
    }
}

/// Load a project from a JSON file.
pub fn load_project(path: &Path) -> Result<NetworkProject, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.trim_end_matches(".network"))
        .unwrap_or("Imported Project");
    let project = parse_project(&json, name).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), activities = project.activity_count(), "project loaded");
    Ok(project)
}

/// Save a project to a JSON file.
pub fn save_project(project: &NetworkProject, path: &Path) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(project).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_file_shape() {
        let json = r#"{
            "name": "Office move",
            "method": "PERT",
            "timeUnit": "weeks",
            "activities": [
                { "activityId": "A", "name": "Plan", "predecessors": "—", "optimistic": 1, "mostLikely": 2, "pessimistic": 3 },
                { "activityId": "B", "name": "Pack", "predecessors": "A", "duration": 4 }
            ],
            "analysis": {
                "projectDuration": 6,
                "criticalPath": ["A", "B"],
                "activities": [
                    { "activityId": "A", "es": 0, "ef": 2, "ls": 0, "lf": 2, "slack": 0, "isCritical": true },
                    { "activityId": "B", "es": 2, "ef": 6, "ls": 2, "lf": 6, "slack": 0, "isCritical": true }
                ]
            }
        }"#;
        let project = parse_project(json, "unused").unwrap();
        assert_eq!(project.name, "Office move");
        assert_eq!(project.time_unit, "weeks");
        assert_eq!(project.critical_path(), ["A", "B"]);
        let merged = project.graph_activities();
        assert_eq!(merged[0].name, "Plan");
        assert_eq!(merged[0].duration, Some(2.0));
        assert!(merged[0].predecessors.is_empty());
        assert_eq!(merged[1].schedule.map(|s| s.es), Some(2.0));
    }

    #[test]
    fn bare_analysis_shape() {
        let json = r#"{
            "projectDuration": 5,
            "criticalPath": ["A"],
            "activities": [
                { "activityId": "A", "name": "Solo", "duration": 5, "es": 0, "ef": 5, "ls": 0, "lf": 5, "slack": 0, "isCritical": true }
            ],
            "projectVariance": 0.25
        }"#;
        let project = parse_project(json, "guest").unwrap();
        assert_eq!(project.name, "guest");
        assert!(project.activities.is_empty());
        assert_eq!(project.activity_count(), 1);
        assert_eq!(project.analysis.as_ref().and_then(|a| a.project_variance), Some(0.25));
        assert_eq!(project.graph_activities()[0].name, "Solo");
    }

    #[test]
    fn empty_critical_path_still_marks_an_analysis() {
        let json = r#"{ "name": "ignored", "criticalPath": [], "activities": [] }"#;
        let project = parse_project(json, "from-stem").unwrap();
        assert_eq!(project.name, "from-stem");
        assert!(project.analysis.is_some());
        assert!(project.critical_path().is_empty());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(parse_project("[1, 2, 3]", "x").is_err());
        assert!(parse_project("{ not json", "x").is_err());
    }
}
