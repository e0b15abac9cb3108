use std::collections::BTreeMap;

use egui::{Pos2, Vec2};

use super::graph::DependencyGraph;
use super::leveling::Levels;
use super::node::{GraphNode, NodeId, NodeKind};

/// Margin between the canvas edge and the first column / row.
pub const PADDING: f32 = 50.0;

/// Turns levels into positions: one column per level, evenly spaced rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutAssigner {
    size: Vec2,
}

impl LayoutAssigner {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    fn level_width(&self, levels: &Levels) -> f32 {
        // START and FINISH occupy a column each.
        let total_levels = levels.max_level() + 2;
        self.size.x / (total_levels + 1) as f32
    }

    fn column_x(&self, level: u32, level_width: f32) -> f32 {
        PADDING + level as f32 * level_width + level_width / 2.0
    }

    /// START first, then activities by ascending level (input order inside a
    /// level), then FINISH.
    pub fn assign(&self, graph: &DependencyGraph, levels: &Levels) -> Vec<GraphNode> {
        let level_width = self.level_width(levels);
        let centre_y = self.size.y / 2.0;

        let mut columns: BTreeMap<u32, Vec<_>> = BTreeMap::new();
        for activity in graph.activities() {
            let level = levels.level(&activity.id).unwrap_or(1);
            columns.entry(level).or_default().push(activity);
        }

        let mut nodes = Vec::with_capacity(graph.len() + 2);
        nodes.push(GraphNode {
            id: NodeId::Start,
            kind: NodeKind::Start,
            level: levels.start_level(),
            pos: Pos2::new(self.column_x(levels.start_level(), level_width), centre_y),
        });

        for (level, members) in columns {
            let row_height = self.size.y / (members.len() + 1) as f32;
            let x = self.column_x(level, level_width);
            for (i, activity) in members.into_iter().enumerate() {
                nodes.push(GraphNode {
                    id: NodeId::Activity(activity.id.clone()),
                    kind: NodeKind::Activity(activity.clone()),
                    level,
                    pos: Pos2::new(x, PADDING + (i + 1) as f32 * row_height),
                });
            }
        }

        nodes.push(GraphNode {
            id: NodeId::Finish,
            kind: NodeKind::Finish,
            level: levels.finish_level(),
            pos: Pos2::new(self.column_x(levels.finish_level(), level_width), centre_y),
        });

        tracing::debug!(
            nodes = nodes.len(),
            levels = levels.max_level(),
            level_width,
            "network layout assigned"
        );
        nodes
    }
}
