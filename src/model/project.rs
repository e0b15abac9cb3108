use serde::{Deserialize, Serialize};

use super::activity::{Activity, GraphActivity};
use super::analysis::ProjectAnalysis;

/// How activity durations were estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleMethod {
    #[default]
    Cpm,
    Pert,
}

/// A project's activities together with the latest analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProject {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub method: ScheduleMethod,
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub analysis: Option<ProjectAnalysis>,
}

fn default_name() -> String {
    "Untitled Project".to_string()
}

fn default_time_unit() -> String {
    "days".to_string()
}

impl Default for NetworkProject {
    fn default() -> Self {
        Self {
            name: default_name(),
            method: ScheduleMethod::default(),
            time_unit: default_time_unit(),
            activities: Vec::new(),
            analysis: None,
        }
    }
}

impl NetworkProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Wrap a bare analysis blob whose records already carry raw fields.
    pub fn from_analysis(name: impl Into<String>, analysis: ProjectAnalysis) -> Self {
        Self {
            analysis: Some(analysis),
            ..Self::new(name)
        }
    }

    pub fn graph_activities(&self) -> Vec<GraphActivity> {
        let analyzed = self
            .analysis
            .as_ref()
            .map(|a| a.activities.as_slice())
            .unwrap_or(&[]);
        GraphActivity::merge(&self.activities, analyzed)
    }

    pub fn critical_path(&self) -> &[String] {
        self.analysis
            .as_ref()
            .map(|a| a.critical_path.as_slice())
            .unwrap_or(&[])
    }

    pub fn activity_count(&self) -> usize {
        if self.activities.is_empty() {
            self.analysis.as_ref().map_or(0, |a| a.activities.len())
        } else {
            self.activities.len()
        }
    }
}
