//! Layout engine for activity networks: parsing, graph building, leveling,
//! coordinate assignment and edge classification.

pub mod diagram;
pub mod edges;
pub mod graph;
pub mod layout;
pub mod leveling;
pub mod node;
pub mod predecessors;

pub use diagram::{Diagnostics, NetworkDiagram};
pub use edges::{CriticalPath, Edge};
pub use graph::DependencyGraph;
pub use layout::LayoutAssigner;
pub use leveling::Levels;
pub use node::{GraphNode, NodeId, NodeKind};
