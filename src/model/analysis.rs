use serde::{Deserialize, Serialize};

use super::activity::AnalyzedActivity;

/// Output of the external CPM/PERT engine for one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    #[serde(default)]
    pub project_duration: f64,
    /// One longest chain, in order from first to last critical activity.
    #[serde(default)]
    pub critical_path: Vec<String>,
    #[serde(default)]
    pub activities: Vec<AnalyzedActivity>,
    #[serde(default)]
    pub project_variance: Option<f64>,
}
