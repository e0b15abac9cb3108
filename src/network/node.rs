use std::fmt;

use egui::{Pos2, Rect, Vec2};

use crate::model::GraphActivity;

/// Activity box footprint in logical units.
pub const ACTIVITY_WIDTH: f32 = 120.0;
pub const ACTIVITY_HEIGHT: f32 = 80.0;
/// Radius of the START / FINISH circles.
pub const TERMINAL_RADIUS: f32 = 40.0;

/// Identity of a node in the rendered graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    Start,
    Finish,
    Activity(String),
}

impl NodeId {
    pub fn activity_id(&self) -> Option<&str> {
        match self {
            NodeId::Activity(id) => Some(id),
            NodeId::Start | NodeId::Finish => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeId::Start | NodeId::Finish)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Start => f.write_str("START"),
            NodeId::Finish => f.write_str("FINISH"),
            NodeId::Activity(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Start,
    Finish,
    Activity(GraphActivity),
}

/// A positioned node. Only `pos` is ever mutated after layout.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub level: u32,
    pub pos: Pos2,
}

impl GraphNode {
    pub fn activity(&self) -> Option<&GraphActivity> {
        match &self.kind {
            NodeKind::Activity(a) => Some(a),
            NodeKind::Start | NodeKind::Finish => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.id.is_terminal()
    }

    pub fn label(&self) -> String {
        self.id.to_string()
    }

    /// Bounding box used for drawing and hit-testing activity boxes.
    pub fn rect(&self) -> Rect {
        if self.is_terminal() {
            Rect::from_center_size(self.pos, Vec2::splat(TERMINAL_RADIUS * 2.0))
        } else {
            Rect::from_center_size(self.pos, Vec2::new(ACTIVITY_WIDTH, ACTIVITY_HEIGHT))
        }
    }

    /// Half of the node's horizontal extent; edges attach at `pos.x ± half_width`.
    pub fn half_width(&self) -> f32 {
        if self.is_terminal() {
            TERMINAL_RADIUS
        } else {
            ACTIVITY_WIDTH / 2.0
        }
    }

    /// Circle test for START / FINISH, inclusive box test for activities.
    pub fn contains(&self, point: Pos2) -> bool {
        if self.is_terminal() {
            self.pos.distance(point) <= TERMINAL_RADIUS
        } else {
            let half = Vec2::new(ACTIVITY_WIDTH / 2.0, ACTIVITY_HEIGHT / 2.0);
            (point.x - self.pos.x).abs() <= half.x && (point.y - self.pos.y).abs() <= half.y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(id: NodeId, pos: Pos2) -> GraphNode {
        let kind = if id == NodeId::Start {
            NodeKind::Start
        } else {
            NodeKind::Finish
        };
        GraphNode { id, kind, level: 0, pos }
    }

    fn boxed(pos: Pos2) -> GraphNode {
        GraphNode {
            id: NodeId::Activity("A".into()),
            kind: NodeKind::Activity(crate::network::graph::tests::activity("A", "")),
            level: 1,
            pos,
        }
    }

    #[test]
    fn centre_always_hits() {
        let c = Pos2::new(310.0, 95.5);
        assert!(terminal(NodeId::Start, c).contains(c));
        assert!(boxed(c).contains(c));
    }

    #[test]
    fn circle_hit_region_is_round() {
        let node = terminal(NodeId::Finish, Pos2::new(100.0, 100.0));
        assert!(node.contains(Pos2::new(140.0, 100.0)));
        // Inside the bounding box corner but outside the circle.
        assert!(!node.contains(Pos2::new(135.0, 135.0)));
        assert!(!node.contains(Pos2::new(140.5, 100.0)));
    }

    #[test]
    fn box_hit_region_is_inclusive() {
        let node = boxed(Pos2::new(100.0, 100.0));
        assert!(node.contains(Pos2::new(160.0, 140.0)));
        assert!(node.contains(Pos2::new(40.0, 60.0)));
        assert!(!node.contains(Pos2::new(160.5, 100.0)));
        assert!(!node.contains(Pos2::new(100.0, 59.0)));
    }

    #[test]
    fn display_uses_terminal_labels() {
        assert_eq!(NodeId::Start.to_string(), "START");
        assert_eq!(NodeId::Finish.to_string(), "FINISH");
        assert_eq!(NodeId::Activity("B2".into()).to_string(), "B2");
    }
}
