use std::path::{Path, PathBuf};

use egui::{RichText, Vec2};

use crate::config::Settings;
use crate::model::{Activity, AnalyzedActivity, NetworkProject, ProjectAnalysis};
use crate::network::{Diagnostics, NetworkDiagram};
use crate::ui;
use crate::ui::network_canvas::NetworkCanvas;

const HINT: &str = "Drag any node to reposition it · Reset Layout restores the automatic layout";

/// Main application state.
pub struct NetworkApp {
    pub project: Option<NetworkProject>,
    pub canvas: Option<NetworkCanvas>,
    pub settings: Settings,
    pub file_path: Option<PathBuf>,
    pub show_about: bool,
    pub status_message: String,
    /// Size of the render surface for this session; `settings` holds the saved one.
    canvas_size: Vec2,
    diagnostics: Diagnostics,
}

impl NetworkApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        canvas_size: Vec2,
        initial_file: Option<PathBuf>,
    ) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        ui::theme::apply_theme(&cc.egui_ctx);

        Self::with_settings(settings, canvas_size, initial_file)
    }

    /// Application state without touching the egui context.
    pub fn with_settings(settings: Settings, canvas_size: Vec2, initial_file: Option<PathBuf>) -> Self {
        let mut app = Self {
            project: None,
            canvas: None,
            settings,
            file_path: None,
            show_about: false,
            status_message: "Ready".to_string(),
            canvas_size,
            diagnostics: Diagnostics::default(),
        };
        match initial_file {
            Some(path) => app.open_path(&path),
            None => {
                app.set_project(sample_project(), None);
                app.status_message = "Sample project loaded".to_string();
            }
        }
        app
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    fn set_project(&mut self, project: NetworkProject, path: Option<PathBuf>) {
        let diagram = NetworkDiagram::from_project(&project, self.canvas_size());
        self.diagnostics = diagram.diagnostics();
        self.canvas = Some(NetworkCanvas::new(diagram));
        self.project = Some(project);
        self.file_path = path;
    }

    // --- File operations ---

    pub fn open_project(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Network Project", &["network.json", "json"])
            .pick_file()
        {
            self.open_path(&path);
        }
    }

    pub fn open_path(&mut self, path: &Path) {
        match crate::io::load_project(path) {
            Ok(project) => {
                self.set_project(project, Some(path.to_path_buf()));
                self.status_message = "Project loaded".to_string();
            }
            Err(e) => {
                tracing::error!(error = %e, "load failed");
                self.status_message = format!("Error loading: {}", e);
            }
        }
    }

    pub fn save_project_as(&mut self) {
        let Some(project) = &self.project else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Network Project", &["network.json", "json"])
            .set_file_name(format!("{}.network.json", project.name))
            .save_file()
        {
            match crate::io::save_project(project, &path) {
                Ok(()) => {
                    self.file_path = Some(path);
                    self.status_message = "Project saved".to_string();
                }
                Err(e) => {
                    tracing::error!(error = %e, "save failed");
                    self.status_message = format!("Error saving: {}", e);
                }
            }
        }
    }

    pub fn close_project(&mut self) {
        self.project = None;
        self.canvas = None;
        self.file_path = None;
        self.diagnostics = Diagnostics::default();
        self.status_message = "Project closed".to_string();
    }

    // --- View operations ---

    pub fn reset_layout(&mut self) {
        if let Some(canvas) = &mut self.canvas {
            canvas.reset_layout();
            self.status_message = "Layout reset".to_string();
        }
    }

    /// Restore the saved (or default) canvas size; node positions are kept.
    pub fn reset_view(&mut self) {
        let size = self.settings.canvas_size();
        self.set_canvas_size(size);
        self.status_message = format!("View reset to {:.0} × {:.0}", size.x, size.y);
    }

    /// Resize the render surface for this session only.
    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size;
        if let Some(canvas) = &mut self.canvas {
            canvas.resize(size);
        }
        self.status_message = format!("Canvas size {:.0} × {:.0}", size.x, size.y);
    }

    /// Persist the current canvas size as the one Reset View returns to.
    pub fn save_canvas_size_as_default(&mut self) {
        self.settings.canvas_width = self.canvas_size.x;
        self.settings.canvas_height = self.canvas_size.y;
        match self.settings.save() {
            Ok(()) => self.status_message = "Canvas size saved as default".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "settings not saved");
                self.status_message = format!("Error saving settings: {}", e);
            }
        }
    }

    pub fn open_settings_folder(&mut self) {
        let dir = crate::config::settings_dir();
        if let Err(e) = std::fs::create_dir_all(&dir).and_then(|_| open::that(&dir)) {
            tracing::warn!(error = %e, dir = %dir.display(), "cannot open settings folder");
            self.status_message = format!("Cannot open {}: {}", dir.display(), e);
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_STATUS)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(project) = &self.project {
                            ui.label(
                                RichText::new(summary_line(project))
                                    .size(10.5)
                                    .color(ui::theme::TEXT_DIM),
                            );
                        }
                        if let Some(badge) = warning_badge(&self.diagnostics) {
                            ui.label(
                                RichText::new(format!("{} {}", egui_phosphor::regular::WARNING, badge))
                                    .size(10.5)
                                    .color(ui::theme::WARNING),
                            );
                        }
                    });
                });
            });
    }
}

impl eframe::App for NetworkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        self.show_status_bar(ctx);

        if let Some(activity) = self.canvas.as_ref().and_then(|c| c.hovered_activity()) {
            egui::TopBottomPanel::bottom("detail_panel")
                .min_height(ui::theme::DETAIL_PANEL_HEIGHT)
                .frame(
                    egui::Frame::default()
                        .fill(ui::theme::BG_PANEL)
                        .inner_margin(egui::Margin::symmetric(12.0, 4.0))
                        .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
                )
                .show(ctx, |ui| {
                    ui::detail_panel::show_detail_panel(activity, ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.canvas {
            Some(canvas) => {
                ui.label(
                    RichText::new(HINT)
                        .font(ui::theme::font_hint())
                        .color(ui::theme::TEXT_DIM),
                );
                ui.add_space(4.0);
                ui::network_canvas::show_network_canvas(canvas, &self.settings.style, ui);
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("No project open · File → Open...")
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                });
            }
        });

        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

/// Activity count, duration and variance for the status bar.
pub fn summary_line(project: &NetworkProject) -> String {
    let mut parts = vec![format!("Activities: {}", project.activity_count())];
    if let Some(analysis) = &project.analysis {
        parts.push(format!(
            "Duration: {:.2} {}",
            analysis.project_duration, project.time_unit
        ));
        if let Some(variance) = analysis.project_variance {
            parts.push(format!("Variance: {:.2}", variance));
        }
    }
    parts.join(" · ")
}

pub fn warning_badge(diagnostics: &Diagnostics) -> Option<String> {
    if diagnostics.is_clean() {
        return None;
    }
    let mut parts = Vec::new();
    if !diagnostics.cycles.is_empty() {
        parts.push(format!("{} cyclic link(s)", diagnostics.cycles.len()));
    }
    if !diagnostics.dangling.is_empty() {
        parts.push(format!("{} unknown predecessor(s)", diagnostics.dangling.len()));
    }
    Some(parts.join(", "))
}

/// Generate a sample project for demonstration.
pub fn sample_project() -> NetworkProject {
    let activities = vec![
        Activity::new("A", "Design").with_duration(3.0),
        Activity::new("B", "Build Prototype").with_predecessors("A").with_duration(5.0),
        Activity::new("C", "Order Test Rig").with_predecessors("A").with_duration(2.0),
        Activity::new("D", "Integration Testing").with_predecessors("B, C").with_duration(4.0),
        Activity::new("E", "Write Documentation").with_predecessors("A").with_duration(2.0),
        Activity::new("F", "Review").with_predecessors("E").with_duration(3.0),
        Activity::new("G", "Training").with_predecessors("F").with_duration(2.0),
        Activity::new("H", "Handover").with_predecessors("D, G").with_duration(1.0),
    ];
    //                 es    ef    ls    lf  slack
    let schedules = [
        (0.0, 3.0, 0.0, 3.0, 0.0),
        (3.0, 8.0, 3.0, 8.0, 0.0),
        (3.0, 5.0, 6.0, 8.0, 3.0),
        (8.0, 12.0, 8.0, 12.0, 0.0),
        (3.0, 5.0, 5.0, 7.0, 2.0),
        (5.0, 8.0, 7.0, 10.0, 2.0),
        (8.0, 10.0, 10.0, 12.0, 2.0),
        (12.0, 13.0, 12.0, 13.0, 0.0),
    ];
    let analyzed = activities
        .iter()
        .zip(schedules)
        .map(|(activity, (es, ef, ls, lf, slack))| AnalyzedActivity {
            activity: activity.clone(),
            es,
            ef,
            ls,
            lf,
            slack,
            is_critical: slack == 0.0,
        })
        .collect();

    NetworkProject {
        activities,
        analysis: Some(ProjectAnalysis {
            project_duration: 13.0,
            critical_path: ["A", "B", "D", "H"].iter().map(|s| s.to_string()).collect(),
            activities: analyzed,
            project_variance: None,
        }),
        ..NetworkProject::new("Sample Project")
    }
}
