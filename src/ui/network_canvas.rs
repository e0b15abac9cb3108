use egui::{CursorIcon, Pos2, Sense, Ui, Vec2};

use crate::model::GraphActivity;
use crate::network::{NetworkDiagram, NodeId};
use crate::ui::interaction::{dispatch, CursorKind, Effect, InteractionState, PointerEvent};
use crate::ui::renderer::RenderContext;
use crate::ui::style::NetworkStyle;

/// A laid-out diagram plus the pointer state driving it.
pub struct NetworkCanvas {
    diagram: NetworkDiagram,
    state: InteractionState,
    cursor: CursorKind,
    pointer_inside: bool,
}

impl NetworkCanvas {
    pub fn new(diagram: NetworkDiagram) -> Self {
        Self {
            diagram,
            state: InteractionState::Idle,
            cursor: CursorKind::Default,
            pointer_inside: false,
        }
    }

    pub fn diagram(&self) -> &NetworkDiagram {
        &self.diagram
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// The activity under the pointer (or being dragged), for the detail panel.
    pub fn hovered_activity(&self) -> Option<&GraphActivity> {
        self.state
            .hovered()
            .and_then(|id| self.diagram.node(id))
            .and_then(|node| node.activity())
    }

    pub fn hovered_node(&self) -> Option<&NodeId> {
        self.state.hovered()
    }

    /// Feed one pointer event; repositions are applied here, the remaining
    /// effects are returned for the host to act on.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Effect> {
        let transition = dispatch(&self.state, event, self.diagram.nodes());
        self.state = transition.next;
        let mut rest = Vec::with_capacity(transition.effects.len());
        for effect in transition.effects {
            match effect {
                Effect::Reposition { node, pos } => {
                    self.diagram.set_position(&node, pos);
                }
                Effect::SetCursor(kind) => {
                    self.cursor = kind;
                    rest.push(Effect::SetCursor(kind));
                }
                Effect::Repaint => rest.push(Effect::Repaint),
            }
        }
        rest
    }

    pub fn reset_layout(&mut self) {
        self.state = InteractionState::Idle;
        self.cursor = CursorKind::Default;
        self.diagram.reset_layout();
    }

    pub fn resize(&mut self, size: Vec2) {
        self.diagram.resize(size);
    }

    fn pointer_events(&mut self, ui: &Ui, rect: egui::Rect) -> Vec<PointerEvent> {
        let (pressed, released, hover) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.hover_pos(),
            )
        });
        let local = |p: Pos2| p - rect.min.to_vec2();
        let inside = hover
            .filter(|p| rect.contains(*p) && ui.rect_contains_pointer(rect))
            .map(local);

        let mut events = Vec::new();
        match inside {
            Some(p) => {
                self.pointer_inside = true;
                if pressed {
                    events.push(PointerEvent::Down(p));
                }
                events.push(PointerEvent::Move(p));
                if released {
                    events.push(PointerEvent::Up);
                }
            }
            None => {
                if std::mem::take(&mut self.pointer_inside) {
                    events.push(PointerEvent::Leave);
                } else if released {
                    events.push(PointerEvent::Up);
                }
            }
        }
        events
    }
}

/// Paint the canvas inside a scroll area and route pointer input to it.
/// Returns true when a node was moved this frame.
pub fn show_network_canvas(canvas: &mut NetworkCanvas, style: &NetworkStyle, ui: &mut Ui) -> bool {
    let size = canvas.diagram.size();
    let mut moved = false;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .drag_to_scroll(false)
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
            let rect = response.rect;

            for event in canvas.pointer_events(ui, rect) {
                let was_dragging = canvas.state.is_dragging();
                for effect in canvas.handle(event) {
                    if effect == Effect::Repaint {
                        ui.ctx().request_repaint();
                    }
                }
                moved |= was_dragging && matches!(event, PointerEvent::Move(_));
            }

            if canvas.pointer_inside && canvas.cursor == CursorKind::Move {
                ui.ctx().set_cursor_icon(CursorIcon::Move);
            }

            RenderContext::new(Some(&painter), rect.min, style)
                .render(&canvas.diagram, canvas.state.hovered());
        });

    moved
}
