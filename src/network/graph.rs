use std::collections::HashMap;

use crate::model::GraphActivity;

/// Forward and reverse adjacency over a project's activities, keyed by id.
///
/// Predecessor lists are kept exactly as parsed, dangling ids included;
/// consumers that need existing nodes only go through [`Self::contains`].
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Input order is preserved; layout relies on it for row order.
    activities: Vec<GraphActivity>,
    index: HashMap<String, usize>,
    successors: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn build(activities: &[GraphActivity]) -> Self {
        let mut index = HashMap::new();
        let mut unique: Vec<GraphActivity> = Vec::with_capacity(activities.len());
        for activity in activities {
            if index.contains_key(&activity.id) {
                tracing::warn!(id = %activity.id, "duplicate activity id; keeping the first record");
                continue;
            }
            index.insert(activity.id.clone(), unique.len());
            unique.push(activity.clone());
        }

        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        for activity in &unique {
            for pred in activity.predecessors.iter().filter(|p| *p != &activity.id) {
                successors
                    .entry(pred.clone())
                    .or_default()
                    .push(activity.id.clone());
            }
        }

        Self {
            activities: unique,
            index,
            successors,
        }
    }

    pub fn activities(&self) -> &[GraphActivity] {
        &self.activities
    }

    pub fn get(&self, id: &str) -> Option<&GraphActivity> {
        self.index.get(id).and_then(|&i| self.activities.get(i))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn predecessors_of(&self, id: &str) -> &[String] {
        self.get(id)
            .map(|a| a.predecessors.as_slice())
            .unwrap_or(&[])
    }

    pub fn successors_of(&self, id: &str) -> &[String] {
        self.successors
            .get(id)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    /// Activities with no predecessor other than themselves; they hang off START.
    pub fn sources(&self) -> impl Iterator<Item = &GraphActivity> {
        self.activities
            .iter()
            .filter(|a| a.predecessors.iter().all(|p| p == &a.id))
    }

    /// Activities no other activity lists as a predecessor; they feed FINISH.
    pub fn sinks(&self) -> impl Iterator<Item = &GraphActivity> {
        self.activities
            .iter()
            .filter(|a| self.successors_of(&a.id).is_empty())
    }

    /// `(activity, missing predecessor)` pairs for ids with no matching record.
    pub fn dangling_references(&self) -> Vec<(String, String)> {
        self.activities
            .iter()
            .flat_map(|a| {
                a.predecessors
                    .iter()
                    .filter(|p| !self.contains(p))
                    .map(|p| (a.id.clone(), p.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn activity(id: &str, preds: &str) -> GraphActivity {
        GraphActivity {
            id: id.to_string(),
            name: format!("Activity {}", id),
            predecessors: crate::network::predecessors::parse_predecessors(Some(preds)),
            duration: Some(1.0),
            schedule: None,
            is_critical: false,
        }
    }

    pub(crate) fn diamond() -> Vec<GraphActivity> {
        vec![
            activity("A", ""),
            activity("B", "A"),
            activity("C", "A"),
            activity("D", "B,C"),
        ]
    }

    fn ids<'a>(it: impl Iterator<Item = &'a GraphActivity>) -> Vec<&'a str> {
        it.map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn inverts_predecessor_lists() {
        let graph = DependencyGraph::build(&diamond());
        assert_eq!(graph.successors_of("A"), ["B", "C"]);
        assert_eq!(graph.successors_of("B"), ["D"]);
        assert!(graph.successors_of("D").is_empty());
        assert_eq!(graph.predecessors_of("D"), ["B", "C"]);
    }

    #[test]
    fn sources_and_sinks() {
        let graph = DependencyGraph::build(&diamond());
        assert_eq!(ids(graph.sources()), vec!["A"]);
        assert_eq!(ids(graph.sinks()), vec!["D"]);
    }

    #[test]
    fn dangling_reference_is_reported_not_rejected() {
        let graph = DependencyGraph::build(&[activity("A", ""), activity("B", "A, Z")]);
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.dangling_references(),
            vec![("B".to_string(), "Z".to_string())]
        );
        // B still has a predecessor, so it is not a source.
        assert_eq!(ids(graph.sources()), vec!["A"]);
    }

    #[test]
    fn self_reference_does_not_hide_an_activity() {
        let graph = DependencyGraph::build(&[activity("A", "A"), activity("B", "B, A")]);
        assert_eq!(graph.successors_of("A"), ["B"]);
        assert!(graph.successors_of("B").is_empty());
        assert_eq!(ids(graph.sources()), vec!["A"]);
        assert_eq!(ids(graph.sinks()), vec!["B"]);
        assert!(graph.dangling_references().is_empty());
    }

    #[test]
    fn empty_input_builds_empty_graph() {
        let graph = DependencyGraph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.sources().count(), 0);
        assert!(!DependencyGraph::build(&diamond()).is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let mut second = activity("A", "");
        second.name = "Shadow".to_string();
        let graph = DependencyGraph::build(&[activity("A", ""), second]);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get("A").map(|a| a.name.as_str()), Some("Activity A"));
    }
}
