//! Style table for the network canvas.
//!
//! Colours are serialised as `#RRGGBB` / `#RRGGBBAA` strings so the table can
//! be hand-edited in `settings.json`. Every field carries `#[serde(default)]`,
//! so a partial table is valid and missing keys fall back to the defaults.

use egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};

pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        if a == 255 {
            serializer.serialize_str(&format!("#{:02X}{:02X}{:02X}", r, g, b))
        } else {
            serializer.serialize_str(&format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(format!("Invalid hex color '{}'", s));
        }
        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .ok_or_else(|| format!("Invalid hex color '{}'", s))
                .and_then(|pair| u8::from_str_radix(pair, 16).map_err(|e| e.to_string()))
        };
        match digits.len() {
            6 => Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => Err(format!(
                "Invalid hex color '{}': expected 6 or 8 hex digits",
                s
            )),
        }
    }
}

/// Colours and stroke widths used by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkStyle {
    #[serde(with = "hex_color")]
    pub canvas_bg: Color32,

    // Edges
    #[serde(with = "hex_color")]
    pub critical_edge: Color32,
    pub critical_edge_width: f32,
    #[serde(with = "hex_color")]
    pub normal_edge: Color32,
    pub normal_edge_width: f32,
    pub arrow_size: f32,

    // Activity boxes
    #[serde(with = "hex_color")]
    pub node_fill: Color32,
    #[serde(with = "hex_color")]
    pub node_fill_hovered: Color32,
    #[serde(with = "hex_color")]
    pub critical_fill_hovered: Color32,
    #[serde(with = "hex_color")]
    pub node_border: Color32,
    #[serde(with = "hex_color")]
    pub critical_border: Color32,
    pub node_border_width: f32,
    pub node_rounding: f32,

    // START / FINISH circles
    #[serde(with = "hex_color")]
    pub terminal_fill: Color32,
    #[serde(with = "hex_color")]
    pub terminal_fill_hovered: Color32,
    #[serde(with = "hex_color")]
    pub terminal_border: Color32,

    // Text
    #[serde(with = "hex_color")]
    pub text_id: Color32,
    #[serde(with = "hex_color")]
    pub text_id_critical: Color32,
    #[serde(with = "hex_color")]
    pub text_name: Color32,
    #[serde(with = "hex_color")]
    pub text_duration: Color32,
    #[serde(with = "hex_color")]
    pub text_label: Color32,

    // Legend
    #[serde(with = "hex_color")]
    pub legend_bg: Color32,
    #[serde(with = "hex_color")]
    pub legend_border: Color32,
}

impl Default for NetworkStyle {
    fn default() -> Self {
        Self {
            canvas_bg: Color32::from_rgb(248, 250, 252),

            critical_edge: Color32::from_rgb(239, 68, 68),
            critical_edge_width: 3.0,
            normal_edge: Color32::from_rgb(148, 163, 184),
            normal_edge_width: 1.5,
            arrow_size: 10.0,

            node_fill: Color32::WHITE,
            node_fill_hovered: Color32::from_rgb(248, 250, 252),
            critical_fill_hovered: Color32::from_rgb(254, 242, 242),
            node_border: Color32::from_rgb(99, 102, 241),
            critical_border: Color32::from_rgb(239, 68, 68),
            node_border_width: 2.0,
            node_rounding: 12.0,

            terminal_fill: Color32::from_rgb(248, 250, 252),
            terminal_fill_hovered: Color32::from_rgb(238, 242, 255),
            terminal_border: Color32::from_rgb(99, 102, 241),

            text_id: Color32::from_rgb(51, 65, 85),
            text_id_critical: Color32::from_rgb(220, 38, 38),
            text_name: Color32::from_rgb(100, 116, 139),
            text_duration: Color32::from_rgb(148, 163, 184),
            text_label: Color32::from_rgb(30, 41, 59),

            legend_bg: Color32::from_rgba_unmultiplied(255, 255, 255, 242),
            legend_border: Color32::from_rgb(226, 232, 240),
        }
    }
}

impl NetworkStyle {
    pub fn edge_stroke(&self, critical: bool) -> Stroke {
        if critical {
            Stroke::new(self.critical_edge_width, self.critical_edge)
        } else {
            Stroke::new(self.normal_edge_width, self.normal_edge)
        }
    }

    pub fn activity_fill(&self, critical: bool, hovered: bool) -> Color32 {
        match (critical, hovered) {
            (true, true) => self.critical_fill_hovered,
            (false, true) => self.node_fill_hovered,
            (_, false) => self.node_fill,
        }
    }

    pub fn activity_border(&self, critical: bool) -> Stroke {
        let color = if critical {
            self.critical_border
        } else {
            self.node_border
        };
        Stroke::new(self.node_border_width, color)
    }

    pub fn terminal_fill(&self, hovered: bool) -> Color32 {
        if hovered {
            self.terminal_fill_hovered
        } else {
            self.terminal_fill
        }
    }
}

#[cfg(test)]
mod tests {
    use super::hex_color::parse_hex_color;
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_colours() {
        assert_eq!(parse_hex_color("#EF4444"), Ok(Color32::from_rgb(239, 68, 68)));
        assert_eq!(
            parse_hex_color("  ffffff80"),
            Ok(Color32::from_rgba_unmultiplied(255, 255, 255, 128))
        );
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
        assert!(parse_hex_color("#ééé").is_err());
    }

    #[test]
    fn partial_table_falls_back_to_defaults() {
        let style: NetworkStyle =
            serde_json::from_str(r##"{ "critical_edge": "#00FF00", "arrow_size": 14.0 }"##).unwrap();
        assert_eq!(style.critical_edge, Color32::from_rgb(0, 255, 0));
        assert_eq!(style.arrow_size, 14.0);
        assert_eq!(style.normal_edge, NetworkStyle::default().normal_edge);
    }

    #[test]
    fn critical_strokes_are_heavier() {
        let style = NetworkStyle::default();
        assert!(style.edge_stroke(true).width > style.edge_stroke(false).width);
        assert_ne!(style.edge_stroke(true).color, style.edge_stroke(false).color);
    }
}
