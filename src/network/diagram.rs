use egui::{Pos2, Vec2};

use super::edges::{derive_edges, CriticalPath, Edge};
use super::graph::DependencyGraph;
use super::layout::LayoutAssigner;
use super::leveling::Levels;
use super::node::{GraphNode, NodeId};
use crate::model::{GraphActivity, NetworkProject};

/// Problems found in the input that layout tolerated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub dangling: Vec<(String, String)>,
    pub cycles: Vec<(String, String)>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.cycles.is_empty()
    }
}

/// A laid-out network: topology is fixed once built, positions are not.
#[derive(Debug, Clone)]
pub struct NetworkDiagram {
    graph: DependencyGraph,
    levels: Levels,
    edges: Vec<Edge>,
    critical: CriticalPath,
    nodes: Vec<GraphNode>,
    size: Vec2,
}

impl NetworkDiagram {
    pub fn new(activities: &[GraphActivity], critical_path: &[String], size: Vec2) -> Self {
        let graph = DependencyGraph::build(activities);
        if graph.is_empty() {
            tracing::debug!("no activities; only START and FINISH are laid out");
        }
        let levels = Levels::compute(&graph);
        for (activity, missing) in graph.dangling_references() {
            tracing::warn!(%activity, %missing, "predecessor does not match any activity");
        }
        let edges = derive_edges(&graph);
        let nodes = LayoutAssigner::new(size).assign(&graph, &levels);
        let critical = CriticalPath::new(critical_path, graph.activities());
        Self {
            graph,
            levels,
            edges,
            critical,
            nodes,
            size,
        }
    }

    pub fn from_project(project: &NetworkProject, size: Vec2) -> Self {
        Self::new(&project.graph_activities(), project.critical_path(), size)
    }

    /// Drop manual positions and lay the graph out again at the current size.
    pub fn reset_layout(&mut self) {
        self.nodes = LayoutAssigner::new(self.size).assign(&self.graph, &self.levels);
    }

    /// Change the render surface size; positions are kept until the next reset.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_of<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    pub fn critical(&self) -> &CriticalPath {
        &self.critical
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Move one node. Returns false if no such node exists.
    pub fn set_position(&mut self, id: &NodeId, pos: Pos2) -> bool {
        match self.nodes.iter_mut().find(|n| &n.id == id) {
            Some(node) => {
                node.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            dangling: self.graph.dangling_references(),
            cycles: self.levels.cycles().to_vec(),
        }
    }
}
