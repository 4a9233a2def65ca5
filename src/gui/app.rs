//! Volley Panel Main Application
//! Main window with control panel and dashboard.

use crate::config::AppConfig;
use crate::data::CsvExporter;
use crate::gui::{BinomialView, ControlPanel, ControlPanelAction, Dashboard};
use crate::state::LoadedRoster;
use crate::stats::BinomialControls;
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Roster loading result from background thread
enum LoadResult {
    Progress(String),
    Complete(Box<LoadedRoster>),
    Error(String),
}

/// Main application window.
pub struct VolleyApp {
    config: AppConfig,
    roster: Option<LoadedRoster>,
    controls: Option<BinomialControls>,
    distribution: Vec<f64>,
    control_panel: ControlPanel,
    dashboard: Dashboard,

    // Async loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl VolleyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(config.data_path.clone()),
            config,
            roster: None,
            controls: None,
            distribution: Vec::new(),
            dashboard: Dashboard::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_loading();
        app
    }

    /// Load the roster file in a background thread.
    fn start_loading(&mut self) {
        if self.is_loading {
            return;
        }

        self.control_panel.set_progress(0.0, "Loading roster...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let config = self.config.clone();

        thread::spawn(move || {
            log::info!("Loading roster from {}", config.data_path.display());
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            match LoadedRoster::load(&config) {
                Ok(roster) => {
                    let _ = tx.send(LoadResult::Complete(Box::new(roster)));
                }
                Err(e) => {
                    log::error!("Roster load failed: {}", e);
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_progress(30.0, &status);
                    }
                    LoadResult::Complete(roster) => {
                        self.install_roster(*roster);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.roster = None;
                        self.controls = None;
                        self.distribution.clear();
                        self.control_panel.clear();
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Adopt a freshly loaded roster and reset the sliders around it.
    fn install_roster(&mut self, roster: LoadedRoster) {
        let rows = roster.row_count();
        let columns = roster.column_count();
        log::info!(
            "Loaded {} rows, {} columns, win rate {:.3}",
            rows,
            columns,
            roster.model.p()
        );

        let controls = BinomialControls::new(
            &roster.model,
            self.config.initial_trials(),
            self.config.max_trials,
        );
        self.distribution = roster.model.distribution_over(controls.trials);
        self.controls = Some(controls);

        self.control_panel.set_loaded(rows, columns, roster.model.p());
        self.control_panel.set_progress(
            100.0,
            &format!("Loaded {} rows, {} columns", rows, columns),
        );
        self.roster = Some(roster);
    }

    /// Trial count moved: recompute the distribution and reset k.
    fn handle_trials_changed(&mut self, trials: u64) {
        let (Some(roster), Some(controls)) = (&self.roster, &mut self.controls) else {
            return;
        };
        controls.set_trials(&roster.model, trials);
        self.distribution = roster.model.distribution_over(controls.trials);
        log::debug!("trials={} successes={}", controls.trials, controls.successes);
    }

    /// Success count moved: only the highlighted bar and the label change.
    fn handle_successes_changed(&mut self, successes: u64) {
        if let Some(controls) = &mut self.controls {
            controls.set_successes(successes);
            log::debug!("trials={} successes={}", controls.trials, controls.successes);
        }
    }

    /// Save the loaded table as CSV where the user chooses.
    fn handle_export_csv(&mut self) {
        let Some(roster) = &self.roster else {
            self.control_panel.set_progress(0.0, "No data to export");
            return;
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&self.config.export_file_name)
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        let exporter = match self.config.separator_byte() {
            Ok(separator) => CsvExporter::new(separator),
            Err(e) => {
                self.control_panel.set_progress(0.0, &format!("Error: {}", e));
                return;
            }
        };

        match exporter.write_file(&roster.df, &output_path) {
            Ok(bytes) => {
                let name = output_path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.control_panel
                    .set_progress(100.0, &format!("Exported {} ({} bytes)", name, bytes));
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.control_panel
                    .set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for VolleyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, self.controls.as_ref());

                    match action {
                        ControlPanelAction::Reload => self.start_loading(),
                        ControlPanelAction::ExportCsv => self.handle_export_csv(),
                        ControlPanelAction::TrialsChanged(n) => self.handle_trials_changed(n),
                        ControlPanelAction::SuccessesChanged(k) => {
                            self.handle_successes_changed(k)
                        }
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            let binomial = match (&self.roster, &self.controls) {
                (Some(roster), Some(controls)) => Some(BinomialView {
                    controls,
                    distribution: &self.distribution,
                    probability_label: controls.probability_label(&roster.model),
                }),
                _ => None,
            };
            self.dashboard.show(ui, self.roster.as_ref(), binomial);
        });
    }
}
