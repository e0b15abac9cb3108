use egui::{Pos2, Vec2};

use crate::network::{GraphNode, NodeId};

/// Pointer input in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Move(Pos2),
    Up,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering(NodeId),
    Dragging {
        node: NodeId,
        /// Pointer minus node centre at grab time.
        grab_offset: Vec2,
    },
}

impl InteractionState {
    /// The node drawn with the hover fill, if any.
    pub fn hovered(&self) -> Option<&NodeId> {
        match self {
            InteractionState::Hovering(id) => Some(id),
            InteractionState::Dragging { node, .. } => Some(node),
            InteractionState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Default,
    Move,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Reposition { node: NodeId, pos: Pos2 },
    Repaint,
    SetCursor(CursorKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: InteractionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: &InteractionState) -> Self {
        Self {
            next: state.clone(),
            effects: Vec::new(),
        }
    }
}

/// Top-most node under `point`. Later nodes are painted over earlier ones.
pub fn hit_test(nodes: &[GraphNode], point: Pos2) -> Option<&GraphNode> {
    nodes.iter().rev().find(|n| n.contains(point))
}

/// Advance the pointer state machine by one event.
pub fn dispatch(state: &InteractionState, event: PointerEvent, nodes: &[GraphNode]) -> Transition {
    match (state, event) {
        (InteractionState::Dragging { node, grab_offset }, PointerEvent::Move(p)) => Transition {
            next: state.clone(),
            effects: vec![
                Effect::Reposition {
                    node: node.clone(),
                    pos: p - *grab_offset,
                },
                Effect::Repaint,
            ],
        },
        (InteractionState::Dragging { .. }, PointerEvent::Up | PointerEvent::Leave) => Transition {
            next: InteractionState::Idle,
            effects: vec![Effect::SetCursor(CursorKind::Default), Effect::Repaint],
        },
        (InteractionState::Dragging { .. }, PointerEvent::Down(_)) => Transition::stay(state),

        (_, PointerEvent::Down(p)) => match hit_test(nodes, p) {
            Some(hit) => Transition {
                next: InteractionState::Dragging {
                    node: hit.id.clone(),
                    grab_offset: p - hit.pos,
                },
                effects: vec![Effect::SetCursor(CursorKind::Move), Effect::Repaint],
            },
            None => Transition::stay(state),
        },
        (_, PointerEvent::Move(p)) => {
            let next = match hit_test(nodes, p) {
                Some(hit) => InteractionState::Hovering(hit.id.clone()),
                None => InteractionState::Idle,
            };
            if &next == state {
                return Transition::stay(state);
            }
            let cursor = if next == InteractionState::Idle {
                CursorKind::Default
            } else {
                CursorKind::Move
            };
            Transition {
                next,
                effects: vec![Effect::SetCursor(cursor), Effect::Repaint],
            }
        }
        (InteractionState::Hovering(_), PointerEvent::Leave) => Transition {
            next: InteractionState::Idle,
            effects: vec![Effect::SetCursor(CursorKind::Default), Effect::Repaint],
        },
        (_, PointerEvent::Up | PointerEvent::Leave) => Transition::stay(state),
    }
}
