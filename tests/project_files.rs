use std::path::Path;

use egui::Vec2;
use network_diagram::io::{load_project, save_project, LoadError};
use network_diagram::network::{NetworkDiagram, NodeId};

fn write(dir: &Path, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn analysis_blob_loads_and_lays_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "kitchen.json",
        r#"{
            "projectDuration": 7,
            "criticalPath": ["A", "C"],
            "projectVariance": 0.5,
            "activities": [
                { "id": 11, "activityId": "A", "name": "Strip out", "predecessors": "—", "duration": 2,
                  "es": 0, "ef": 2, "ls": 0, "lf": 2, "slack": 0, "isCritical": true },
                { "activityId": "B", "name": "Order units", "predecessors": "A", "duration": 1,
                  "es": 2, "ef": 3, "ls": 4, "lf": 5, "slack": 2, "isCritical": false },
                { "activityId": "C", "name": "Plumbing and wiring", "predecessors": "A", "duration": 5,
                  "es": 2, "ef": 7, "ls": 2, "lf": 7, "slack": 0, "isCritical": true }
            ]
        }"#,
    );

    let project = load_project(&path).unwrap();
    assert_eq!(project.name, "kitchen");
    assert_eq!(project.activity_count(), 3);

    let diagram = NetworkDiagram::from_project(&project, Vec2::new(1200.0, 600.0));
    assert_eq!(diagram.levels().level("C"), Some(2));
    assert!(diagram.critical().contains(&NodeId::Activity("C".into())));
    assert!(!diagram.critical().contains(&NodeId::Activity("B".into())));
    let c = diagram
        .node(&NodeId::Activity("C".into()))
        .and_then(|n| n.activity())
        .unwrap();
    assert_eq!(c.name, "Plumbing and wiring");
    assert_eq!(c.schedule.map(|s| s.lf), Some(7.0));
}

#[test]
fn saved_project_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "office.network.json",
        r#"{
            "name": "Office move",
            "method": "PERT",
            "activities": [
                { "activityId": "A", "name": "Plan", "optimistic": 1, "mostLikely": 2, "pessimistic": 9 }
            ]
        }"#,
    );
    let project = load_project(&path).unwrap();
    assert_eq!(project.graph_activities()[0].duration, Some(3.0));

    let copy = dir.path().join("copy.json");
    save_project(&project, &copy).unwrap();
    assert_eq!(load_project(&copy).unwrap(), project);
}

#[test]
fn missing_and_malformed_files_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.json");
    assert!(matches!(load_project(&missing), Err(LoadError::Io { .. })));

    let broken = write(dir.path(), "broken.json", "{ \"criticalPath\": [");
    let err = load_project(&broken).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}
