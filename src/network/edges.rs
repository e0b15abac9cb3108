use std::collections::HashSet;

use super::graph::DependencyGraph;
use super::node::NodeId;
use crate::model::GraphActivity;

/// A directed connection drawn between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    pub fn touches(&self, node: &NodeId) -> bool {
        &self.from == node || &self.to == node
    }
}

/// Every edge implied by the graph: START to each source, each existing
/// predecessor to its successor, each sink to FINISH. Dangling predecessors
/// and self references produce nothing.
pub fn derive_edges(graph: &DependencyGraph) -> Vec<Edge> {
    let mut edges: Vec<Edge> = graph
        .sources()
        .map(|a| Edge::new(NodeId::Start, NodeId::Activity(a.id.clone())))
        .collect();

    for activity in graph.activities() {
        for pred in &activity.predecessors {
            if pred != &activity.id && graph.contains(pred) {
                edges.push(Edge::new(
                    NodeId::Activity(pred.clone()),
                    NodeId::Activity(activity.id.clone()),
                ));
            }
        }
    }

    edges.extend(
        graph
            .sinks()
            .map(|a| Edge::new(NodeId::Activity(a.id.clone()), NodeId::Finish)),
    );
    edges
}

/// Membership and adjacency lookups over the externally supplied critical path.
///
/// Edges between activities are critical when their endpoints are consecutive
/// in the path. START and FINISH are not part of the path, so an edge touching
/// either is critical when its activity carries the analysis `is_critical` flag.
#[derive(Debug, Clone, Default)]
pub struct CriticalPath {
    members: HashSet<String>,
    links: HashSet<(NodeId, NodeId)>,
    flagged: HashSet<String>,
}

impl CriticalPath {
    pub fn new(path: &[String], activities: &[GraphActivity]) -> Self {
        let members = path.iter().cloned().collect();
        let links = path
            .windows(2)
            .map(|w| {
                (
                    NodeId::Activity(w[0].clone()),
                    NodeId::Activity(w[1].clone()),
                )
            })
            .collect();
        let flagged = activities
            .iter()
            .filter(|a| a.is_critical)
            .map(|a| a.id.clone())
            .collect();
        Self {
            members,
            links,
            flagged,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        node.activity_id()
            .is_some_and(|id| self.members.contains(id))
    }

    pub fn is_critical(&self, edge: &Edge) -> bool {
        match (&edge.from, &edge.to) {
            (NodeId::Start, NodeId::Activity(id)) | (NodeId::Activity(id), NodeId::Finish) => {
                self.flagged.contains(id)
            }
            (from, to) => self.links.contains(&(from.clone(), to.clone())),
        }
    }
}
