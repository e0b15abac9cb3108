use crate::app::NetworkApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui, Vec2};

const CANVAS_PRESETS: [(&str, f32, f32); 3] = [
    ("  1200 × 600", 1200.0, 600.0),
    ("  1600 × 900", 1600.0, 900.0),
    ("  2400 × 1200", 2400.0, 1200.0),
];

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut NetworkApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  Open...").clicked() {
                app.open_project();
                ui.close_menu();
            }
            let has_project = app.project.is_some();
            if ui
                .add_enabled(has_project, egui::Button::new("  Save As..."))
                .clicked()
            {
                app.save_project_as();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(has_project, egui::Button::new("  Close"))
                .clicked()
            {
                app.close_project();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            let has_canvas = app.canvas.is_some();
            if ui
                .add_enabled(has_canvas, egui::Button::new("  Reset Layout"))
                .clicked()
            {
                app.reset_layout();
                ui.close_menu();
            }
            if ui
                .add_enabled(has_canvas, egui::Button::new("  Reset View"))
                .clicked()
            {
                app.reset_view();
                ui.close_menu();
            }
            ui.separator();
            ui.label(RichText::new("Canvas Size").small().weak());
            let current = app.canvas_size();
            for (label, w, h) in CANVAS_PRESETS {
                let size = Vec2::new(w, h);
                if ui.radio(current == size, label).clicked() {
                    app.set_canvas_size(size);
                    ui.close_menu();
                }
            }
            if ui.button("  Save Size as Default").clicked() {
                app.save_canvas_size_as_default();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Open Settings Folder").clicked() {
                app.open_settings_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(project) = &app.project {
                let source = if app.file_path.is_some() { "" } else { " (sample)" };
                ui.label(
                    RichText::new(format!("{}{}", project.name, source))
                        .size(11.0)
                        .weak(),
                );
            }
        });
    });
}
