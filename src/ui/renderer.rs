use std::collections::HashMap;
use std::f32::consts::FRAC_PI_6;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Stroke, Vec2};

use crate::network::node::TERMINAL_RADIUS;
use crate::network::{GraphNode, NetworkDiagram, NodeId};
use crate::ui::style::NetworkStyle;

/// Names longer than this are cut to `NAME_KEEP` characters plus an ellipsis.
const NAME_MAX_CHARS: usize = 12;
const NAME_KEEP: usize = 10;

const LEGEND_SIZE: Vec2 = Vec2::new(200.0, 60.0);
const LEGEND_MARGIN: f32 = 20.0;

/// One primitive in canvas-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        rect: Rect,
        color: Color32,
    },
    Line {
        points: [Pos2; 2],
        stroke: Stroke,
    },
    RoundedRect {
        rect: Rect,
        rounding: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Which part of the picture a run of commands belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Edges,
    Nodes,
    Legend,
}

/// A full repaint of the canvas, built without touching any surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<(Layer, DrawCommand)>,
}

impl Scene {
    pub fn build(diagram: &NetworkDiagram, hovered: Option<&NodeId>, style: &NetworkStyle) -> Self {
        let mut scene = Scene::default();
        scene.push(
            Layer::Background,
            DrawCommand::Clear {
                rect: Rect::from_min_size(Pos2::ZERO, diagram.size()),
                color: style.canvas_bg,
            },
        );

        let by_id: HashMap<&NodeId, &GraphNode> =
            diagram.nodes().iter().map(|n| (&n.id, n)).collect();
        for edge in diagram.edges() {
            let (Some(from), Some(to)) = (by_id.get(&edge.from), by_id.get(&edge.to)) else {
                continue;
            };
            let stroke = style.edge_stroke(diagram.critical().is_critical(edge));
            scene.edge(from, to, stroke, style.arrow_size);
        }

        for node in diagram.nodes() {
            let is_hovered = hovered == Some(&node.id);
            if node.is_terminal() {
                scene.terminal(node, is_hovered, style);
            } else {
                let critical = diagram.critical().contains(&node.id);
                scene.activity(node, critical, is_hovered, style);
            }
        }

        scene.legend(diagram.size(), style);
        scene
    }

    fn push(&mut self, layer: Layer, command: DrawCommand) {
        self.commands.push((layer, command));
    }

    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().map(|(_, c)| c)
    }

    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.commands.iter().map(|(l, _)| *l)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Right side of `from` to left side of `to`, with the arrowhead at `to`.
    fn edge(&mut self, from: &GraphNode, to: &GraphNode, stroke: Stroke, arrow_size: f32) {
        let start = Pos2::new(from.pos.x + from.half_width(), from.pos.y);
        let tip = Pos2::new(to.pos.x - to.half_width(), to.pos.y);
        self.push(
            Layer::Edges,
            DrawCommand::Line {
                points: [start, tip],
                stroke,
            },
        );
        for [a, b] in arrowhead(from.pos, to.pos, tip, arrow_size) {
            self.push(
                Layer::Edges,
                DrawCommand::Line {
                    points: [a, b],
                    stroke,
                },
            );
        }
    }

    fn terminal(&mut self, node: &GraphNode, hovered: bool, style: &NetworkStyle) {
        self.push(
            Layer::Nodes,
            DrawCommand::Circle {
                center: node.pos,
                radius: TERMINAL_RADIUS,
                fill: style.terminal_fill(hovered),
                stroke: Stroke::new(style.node_border_width, style.terminal_border),
            },
        );
        self.push(
            Layer::Nodes,
            DrawCommand::Text {
                pos: node.pos,
                anchor: Align2::CENTER_CENTER,
                text: node.label(),
                size: 14.0,
                color: style.text_label,
            },
        );
    }

    fn activity(&mut self, node: &GraphNode, critical: bool, hovered: bool, style: &NetworkStyle) {
        let Some(activity) = node.activity() else {
            return;
        };
        self.push(
            Layer::Nodes,
            DrawCommand::RoundedRect {
                rect: node.rect(),
                rounding: style.node_rounding,
                fill: style.activity_fill(critical, hovered),
                stroke: style.activity_border(critical),
            },
        );

        let id_color = if critical {
            style.text_id_critical
        } else {
            style.text_id
        };
        let lines = [
            (-15.0, activity.id.clone(), 16.0, id_color),
            (5.0, truncate_name(&activity.name), 12.0, style.text_name),
            (20.0, duration_label(activity.duration), 11.0, style.text_duration),
        ];
        for (dy, text, size, color) in lines {
            self.push(
                Layer::Nodes,
                DrawCommand::Text {
                    pos: node.pos + Vec2::new(0.0, dy),
                    anchor: Align2::CENTER_CENTER,
                    text,
                    size,
                    color,
                },
            );
        }
    }

    fn legend(&mut self, canvas: Vec2, style: &NetworkStyle) {
        let origin = Pos2::new(LEGEND_MARGIN, canvas.y - 80.0);
        self.push(
            Layer::Legend,
            DrawCommand::RoundedRect {
                rect: Rect::from_min_size(origin, LEGEND_SIZE),
                rounding: 8.0,
                fill: style.legend_bg,
                stroke: Stroke::new(1.0, style.legend_border),
            },
        );
        for (dy, critical, label) in [(20.0, true, "Critical Path"), (45.0, false, "Non-Critical")] {
            let y = origin.y + dy;
            self.push(
                Layer::Legend,
                DrawCommand::Line {
                    points: [Pos2::new(origin.x + 15.0, y), Pos2::new(origin.x + 45.0, y)],
                    stroke: style.edge_stroke(critical),
                },
            );
            self.push(
                Layer::Legend,
                DrawCommand::Text {
                    pos: Pos2::new(origin.x + 55.0, y),
                    anchor: Align2::LEFT_CENTER,
                    text: label.to_string(),
                    size: 12.0,
                    color: style.text_label,
                },
            );
        }
    }
}

/// Two strokes back from `tip`, ±30° around the centre-to-centre angle.
fn arrowhead(from: Pos2, to: Pos2, tip: Pos2, size: f32) -> [[Pos2; 2]; 2] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let wing = |offset: f32| {
        let a = angle + offset;
        [tip, Pos2::new(tip.x - size * a.cos(), tip.y - size * a.sin())]
    };
    [wing(-FRAC_PI_6), wing(FRAC_PI_6)]
}

pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_MAX_CHARS {
        let kept: String = name.chars().take(NAME_KEEP).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}

pub fn duration_label(duration: Option<f64>) -> String {
    match duration {
        Some(d) => format!("t = {:.1}", d),
        None => "t = N/A".to_string(),
    }
}

/// The canvas surface plus the style table it is painted with.
///
/// Without a painter every call is a no-op.
pub struct RenderContext<'a> {
    painter: Option<&'a Painter>,
    origin: Vec2,
    style: &'a NetworkStyle,
}

impl<'a> RenderContext<'a> {
    pub fn new(painter: Option<&'a Painter>, origin: Pos2, style: &'a NetworkStyle) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
            style,
        }
    }

    /// Clear and repaint the whole diagram.
    pub fn render(&self, diagram: &NetworkDiagram, hovered: Option<&NodeId>) -> Scene {
        let scene = Scene::build(diagram, hovered, self.style);
        self.paint(&scene);
        scene
    }

    pub fn paint(&self, scene: &Scene) {
        let Some(painter) = self.painter else {
            return;
        };
        let o = self.origin;
        for command in scene.commands() {
            match command {
                DrawCommand::Clear { rect, color } => {
                    painter.rect_filled(rect.translate(o), 0.0, *color);
                }
                DrawCommand::Line { points, stroke } => {
                    painter.line_segment([points[0] + o, points[1] + o], *stroke);
                }
                DrawCommand::RoundedRect {
                    rect,
                    rounding,
                    fill,
                    stroke,
                } => {
                    painter.rect(rect.translate(o), Rounding::same(*rounding), *fill, *stroke);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                    stroke,
                } => {
                    painter.circle(*center + o, *radius, *fill, *stroke);
                }
                DrawCommand::Text {
                    pos,
                    anchor,
                    text,
                    size,
                    color,
                } => {
                    painter.text(*pos + o, *anchor, text, FontId::proportional(*size), *color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::graph::tests::diamond;

    fn diagram() -> NetworkDiagram {
        let path: Vec<String> = ["A", "B", "D"].iter().map(|s| s.to_string()).collect();
        NetworkDiagram::new(&diamond(), &path, Vec2::new(1200.0, 600.0))
    }

    fn edge_lines(scene: &Scene) -> Vec<&DrawCommand> {
        scene
            .commands
            .iter()
            .filter(|(l, _)| *l == Layer::Edges)
            .map(|(_, c)| c)
            .collect()
    }

    #[test]
    fn edges_then_nodes_then_legend() {
        let scene = Scene::build(&diagram(), None, &NetworkStyle::default());
        let layers: Vec<Layer> = scene.layers().collect();
        let rank = |l: &Layer| match l {
            Layer::Background => 0,
            Layer::Edges => 1,
            Layer::Nodes => 2,
            Layer::Legend => 3,
        };
        assert_eq!(layers.first(), Some(&Layer::Background));
        assert!(layers.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
        assert_eq!(layers.last(), Some(&Layer::Legend));
    }

    #[test]
    fn each_edge_is_a_line_plus_two_wings() {
        let d = diagram();
        let scene = Scene::build(&d, None, &NetworkStyle::default());
        assert_eq!(edge_lines(&scene).len(), d.edges().len() * 3);
    }

    #[test]
    fn critical_edges_use_heavy_stroke() {
        let style = NetworkStyle::default();
        let d = diagram();
        let scene = Scene::build(&d, None, &style);
        let a = d.node(&NodeId::Activity("A".into())).unwrap();
        let b = d.node(&NodeId::Activity("B".into())).unwrap();
        let c = d.node(&NodeId::Activity("C".into())).unwrap();
        let line_from = |from: &GraphNode, to: &GraphNode| {
            let start = Pos2::new(from.pos.x + 60.0, from.pos.y);
            let tip = Pos2::new(to.pos.x - 60.0, to.pos.y);
            edge_lines(&scene).into_iter().find_map(|cmd| match cmd {
                DrawCommand::Line { points, stroke } if *points == [start, tip] => Some(*stroke),
                _ => None,
            })
        };
        assert_eq!(line_from(a, b), Some(style.edge_stroke(true)));
        assert_eq!(line_from(a, c), Some(style.edge_stroke(false)));
    }

    #[test]
    fn arrowhead_length_ignores_edge_length() {
        let tip = Pos2::new(100.0, 0.0);
        for from_x in [0.0, -500.0] {
            for [a, b] in arrowhead(Pos2::new(from_x, 0.0), Pos2::new(160.0, 0.0), tip, 10.0) {
                assert_eq!(a, tip);
                assert!((a.distance(b) - 10.0).abs() < 1e-4);
                assert!(b.x < tip.x);
            }
        }
    }

    #[test]
    fn hovered_node_changes_fill_only() {
        let style = NetworkStyle::default();
        let d = diagram();
        let c = NodeId::Activity("C".into());
        let plain = Scene::build(&d, None, &style);
        let hovered = Scene::build(&d, Some(&c), &style);
        assert_eq!(plain.len(), hovered.len());
        let fills = |s: &Scene| -> Vec<Color32> {
            s.commands()
                .filter_map(|cmd| match cmd {
                    DrawCommand::RoundedRect { fill, .. } => Some(*fill),
                    _ => None,
                })
                .collect()
        };
        assert!(fills(&hovered).contains(&style.node_fill_hovered));
        assert!(!fills(&plain).contains(&style.node_fill_hovered));
    }

    #[test]
    fn names_are_truncated() {
        assert_eq!(truncate_name("Short name"), "Short name");
        assert_eq!(truncate_name("Twelve chars"), "Twelve chars");
        assert_eq!(truncate_name("Requirements gathering"), "Requiremen...");
        assert_eq!(truncate_name("ÄÖÜäöüßÄÖÜäöü"), "ÄÖÜäöüßÄÖÜ...");
    }

    #[test]
    fn duration_labels() {
        assert_eq!(duration_label(Some(4.0)), "t = 4.0");
        assert_eq!(duration_label(Some(6.166)), "t = 6.2");
        assert_eq!(duration_label(None), "t = N/A");
    }

    #[test]
    fn missing_surface_is_a_no_op() {
        let style = NetworkStyle::default();
        let ctx = RenderContext::new(None, Pos2::ZERO, &style);
        let scene = ctx.render(&diagram(), None);
        assert!(!scene.is_empty());
    }
}
