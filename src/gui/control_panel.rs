//! Control Panel Widget
//! Left side panel with data source, export and binomial slider controls.

use crate::stats::BinomialControls;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side control panel.
pub struct ControlPanel {
    pub data_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub win_rate: Option<f64>,
    pub progress: f32,
    pub status: String,
    pub data_ready: bool,
}

impl ControlPanel {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            rows: 0,
            columns: 0,
            win_rate: None,
            progress: 0.0,
            status: "Ready".to_string(),
            data_ready: false,
        }
    }

    /// Update the data source summary after a load.
    pub fn set_loaded(&mut self, rows: usize, columns: usize, win_rate: f64) {
        self.rows = rows;
        self.columns = columns;
        self.win_rate = Some(win_rate);
        self.data_ready = true;
    }

    /// Forget the previous load.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.win_rate = None;
        self.data_ready = false;
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        controls: Option<&BinomialControls>,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏐 Volley Panel")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Team Technical Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let file_name = self
                        .data_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| self.data_path.display().to_string());

                    ui.label(RichText::new(&file_name).size(12.0).color(
                        if self.data_ready {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🔄 Reload").clicked() {
                            action = ControlPanelAction::Reload;
                        }
                    });
                });

                if self.data_ready {
                    ui.label(
                        RichText::new(format!("{} rows, {} columns", self.rows, self.columns))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.label(RichText::new("💾 Export Data").size(14.0).strong());
        ui.add_space(5.0);

        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.data_ready, |ui| {
                let button = egui::Button::new(RichText::new("⬇ Download CSV").size(14.0))
                    .min_size(egui::vec2(180.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportCsv;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Binomial Section =====
        ui.label(RichText::new("🎲 Win Probability").size(14.0).strong());
        ui.add_space(5.0);

        match controls {
            Some(controls) => {
                if let Some(p) = self.win_rate {
                    ui.label(
                        RichText::new(format!("Empirical win rate: {:.1}%", p * 100.0))
                            .size(12.0),
                    );
                    ui.add_space(5.0);
                }

                let mut trials = controls.trials;
                let trials_slider = egui::Slider::new(&mut trials, 1..=controls.max_trials)
                    .text("Matches");
                if ui.add(trials_slider).changed() && trials != controls.trials {
                    action = ControlPanelAction::TrialsChanged(trials);
                }

                let mut successes = controls.successes;
                let successes_slider =
                    egui::Slider::new(&mut successes, 0..=controls.trials).text("Wins");
                if ui.add(successes_slider).changed() && successes != controls.successes {
                    action = ControlPanelAction::SuccessesChanged(successes);
                }
            }
            None => {
                ui.label(RichText::new("Load data to enable").size(11.0).color(Color32::GRAY));
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Reload,
    ExportCsv,
    TrialsChanged(u64),
    SuccessesChanged(u64),
}
