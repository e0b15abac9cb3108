use crate::model::GraphActivity;
use crate::ui::theme;
use egui::{RichText, Ui};

/// `(label, value)` rows for the hovered-activity panel.
pub fn detail_rows(activity: &GraphActivity) -> Vec<(&'static str, String)> {
    let fmt = |v: Option<f64>| v.map_or_else(|| "—".to_string(), |v| format!("{:.2}", v));
    let schedule = activity.schedule;
    vec![
        ("Early Start", fmt(schedule.map(|s| s.es))),
        ("Early Finish", fmt(schedule.map(|s| s.ef))),
        ("Late Start", fmt(schedule.map(|s| s.ls))),
        ("Late Finish", fmt(schedule.map(|s| s.lf))),
        ("Slack", fmt(schedule.map(|s| s.slack))),
        (
            "Status",
            if activity.is_critical { "Critical" } else { "Normal" }.to_string(),
        ),
    ]
}

/// Render details for the activity under the pointer.
pub fn show_detail_panel(activity: &GraphActivity, ui: &mut Ui) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&activity.id)
                .strong()
                .size(11.0)
                .color(theme::ACCENT),
        );
        ui.label(
            RichText::new(&activity.name)
                .strong()
                .size(13.0)
                .color(theme::TEXT_PRIMARY),
        );
    });
    ui.add_space(2.0);

    egui::Grid::new("activity_detail_grid")
        .num_columns(6)
        .spacing([18.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in detail_rows(activity) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(10.5).color(theme::TEXT_SECONDARY));
                    let text = RichText::new(value).monospace().size(11.0);
                    let text = match label {
                        "Status" if activity.is_critical => text.color(theme::CRITICAL).strong(),
                        "Status" => text.color(theme::NORMAL).strong(),
                        _ => text.color(theme::TEXT_PRIMARY),
                    };
                    ui.label(text);
                });
            }
            ui.end_row();
        });
    ui.add_space(4.0);
}
