use serde::{Deserialize, Serialize};

use crate::network::predecessors::parse_predecessors;

/// A raw activity record as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique within a project; the join key against analysis output.
    pub activity_id: String,
    #[serde(default)]
    pub name: String,
    /// Free-form predecessor text, e.g. `"A, B"` or `"—"`.
    #[serde(default)]
    pub predecessors: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub optimistic: Option<f64>,
    #[serde(default)]
    pub most_likely: Option<f64>,
    #[serde(default)]
    pub pessimistic: Option<f64>,
}

impl Activity {
    pub fn new(activity_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            name: name.into(),
            predecessors: None,
            duration: None,
            optimistic: None,
            most_likely: None,
            pessimistic: None,
        }
    }

    pub fn with_predecessors(mut self, predecessors: impl Into<String>) -> Self {
        self.predecessors = Some(predecessors.into());
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_estimates(mut self, optimistic: f64, most_likely: f64, pessimistic: f64) -> Self {
        self.optimistic = Some(optimistic);
        self.most_likely = Some(most_likely);
        self.pessimistic = Some(pessimistic);
        self
    }

    /// The direct duration, else the PERT expected time `(o + 4m + p) / 6`.
    pub fn effective_duration(&self) -> Option<f64> {
        if let Some(d) = self.duration {
            return Some(d);
        }
        match (self.optimistic, self.most_likely, self.pessimistic) {
            (Some(o), Some(m), Some(p)) => Some((o + 4.0 * m + p) / 6.0),
            _ => None,
        }
    }
}

/// An activity after the external CPM/PERT pass has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedActivity {
    #[serde(flatten)]
    pub activity: Activity,
    #[serde(default)]
    pub es: f64,
    #[serde(default)]
    pub ef: f64,
    #[serde(default)]
    pub ls: f64,
    #[serde(default)]
    pub lf: f64,
    #[serde(default)]
    pub slack: f64,
    #[serde(default)]
    pub is_critical: bool,
}

impl AnalyzedActivity {
    pub fn schedule(&self) -> Schedule {
        Schedule {
            es: self.es,
            ef: self.ef,
            ls: self.ls,
            lf: self.lf,
            slack: self.slack,
        }
    }
}

/// Earliest/latest start and finish plus slack for one activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    pub es: f64,
    pub ef: f64,
    pub ls: f64,
    pub lf: f64,
    pub slack: f64,
}

/// The merged, typed record the layout stage works on.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphActivity {
    pub id: String,
    pub name: String,
    pub predecessors: Vec<String>,
    pub duration: Option<f64>,
    /// `None` until analysis has produced a record for this id.
    pub schedule: Option<Schedule>,
    pub is_critical: bool,
}

impl GraphActivity {
    fn from_parts(raw: &Activity, analyzed: Option<&AnalyzedActivity>) -> Self {
        Self {
            id: raw.activity_id.clone(),
            name: raw.name.clone(),
            predecessors: parse_predecessors(raw.predecessors.as_deref()),
            duration: raw.effective_duration(),
            schedule: analyzed.map(AnalyzedActivity::schedule),
            is_critical: analyzed.is_some_and(|a| a.is_critical),
        }
    }

    /// Join raw records with analysis output by identifier.
    ///
    /// When `raw` is empty the analyzed records carry the raw fields
    /// themselves, so they are used directly.
    pub fn merge(raw: &[Activity], analyzed: &[AnalyzedActivity]) -> Vec<GraphActivity> {
        if raw.is_empty() {
            return analyzed
                .iter()
                .map(|a| Self::from_parts(&a.activity, Some(a)))
                .collect();
        }
        raw.iter()
            .map(|activity| {
                let analysis = analyzed
                    .iter()
                    .find(|a| a.activity.activity_id == activity.activity_id);
                Self::from_parts(activity, analysis)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_duration_wins_over_estimates() {
        let a = Activity::new("A", "Design")
            .with_duration(4.0)
            .with_estimates(1.0, 2.0, 9.0);
        assert_eq!(a.effective_duration(), Some(4.0));
    }

    #[test]
    fn three_point_estimate_is_weighted_mean() {
        let a = Activity::new("A", "Design").with_estimates(2.0, 5.0, 14.0);
        assert_eq!(a.effective_duration(), Some(6.0));
    }

    #[test]
    fn partial_estimates_give_no_duration() {
        let mut a = Activity::new("A", "Design");
        a.optimistic = Some(1.0);
        a.pessimistic = Some(3.0);
        assert_eq!(a.effective_duration(), None);
    }

    #[test]
    fn merge_joins_by_identifier() {
        let raw = vec![
            Activity::new("A", "First").with_duration(3.0),
            Activity::new("B", "Second").with_predecessors("A").with_duration(2.0),
        ];
        let analyzed = vec![AnalyzedActivity {
            activity: Activity::new("B", "ignored"),
            es: 3.0,
            ef: 5.0,
            ls: 3.0,
            lf: 5.0,
            slack: 0.0,
            is_critical: true,
        }];

        let merged = GraphActivity::merge(&raw, &analyzed);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].schedule, None);
        assert!(!merged[0].is_critical);
        assert_eq!(merged[1].name, "Second");
        assert_eq!(merged[1].predecessors, vec!["A".to_string()]);
        assert_eq!(merged[1].schedule.map(|s| s.ef), Some(5.0));
        assert!(merged[1].is_critical);
    }

    #[test]
    fn merge_uses_analyzed_records_when_raw_list_is_empty() {
        let analyzed = vec![AnalyzedActivity {
            activity: Activity::new("X", "Only").with_estimates(1.0, 1.0, 1.0),
            es: 0.0,
            ef: 1.0,
            ls: 0.0,
            lf: 1.0,
            slack: 0.0,
            is_critical: true,
        }];
        let merged = GraphActivity::merge(&[], &analyzed);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "X");
        assert_eq!(merged[0].duration, Some(1.0));
    }

    #[test]
    fn analyzed_activity_reads_camel_case_json() {
        let json = r#"{
            "id": "row-1",
            "projectId": "p",
            "activityId": "C",
            "name": "Build",
            "predecessors": "A, B",
            "mostLikely": 4,
            "es": 2, "ef": 6, "ls": 3, "lf": 7, "slack": 1,
            "isCritical": false
        }"#;
        let parsed: AnalyzedActivity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.activity.activity_id, "C");
        assert_eq!(parsed.activity.most_likely, Some(4.0));
        assert_eq!(parsed.slack, 1.0);
    }
}
