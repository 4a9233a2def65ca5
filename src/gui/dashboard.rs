//! Dashboard View
//! Central scrollable panel: metric cards, roster charts and the binomial chart.

use crate::charts::{ChartPlotter, POSITION_PALETTE, RESULT_PALETTE, SHIFT_PALETTE};
use crate::state::LoadedRoster;
use crate::stats::BinomialControls;
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 12.0;
const SECTION_SPACING: f32 = 18.0;

/// Derived values shown by the binomial section.
pub struct BinomialView<'a> {
    pub controls: &'a BinomialControls,
    pub distribution: &'a [f64],
    pub probability_label: String,
}

/// Renders the roster dashboard.
#[derive(Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &self,
        ui: &mut egui::Ui,
        roster: Option<&LoadedRoster>,
        binomial: Option<BinomialView<'_>>,
    ) {
        let Some(roster) = roster else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(RichText::new("🏐 Volleyball Technical Panel").size(24.0));
                ui.add_space(SECTION_SPACING);

                ui.label(RichText::new("General Statistics").size(18.0).strong());
                ui.add_space(8.0);
                Self::draw_metric_cards(ui, roster);

                ui.add_space(SECTION_SPACING);
                ui.separator();
                Self::draw_chart_grid(ui, roster);

                if let Some(view) = binomial {
                    ui.add_space(SECTION_SPACING);
                    ui.separator();
                    Self::draw_binomial_section(ui, &view);
                }
            });
    }

    fn draw_metric_cards(ui: &mut egui::Ui, roster: &LoadedRoster) {
        let summary = &roster.summary;
        let cards = [
            ("Average Age", summary.age_label()),
            ("Average Height", summary.height_label()),
            ("Total Matches", summary.total_matches.to_string()),
            ("Total Points", summary.total_points.to_string()),
        ];

        ui.columns(cards.len(), |columns| {
            for (ui, (title, value)) in columns.iter_mut().zip(cards.iter()) {
                Self::draw_metric_card(ui, title, value);
            }
        });
    }

    fn draw_metric_card(ui: &mut egui::Ui, title: &str, value: &str) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(100, 149, 237)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(CARD_SPACING)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).size(13.0).color(Color32::GRAY));
                ui.label(RichText::new(value).size(24.0).strong());
            });
    }

    fn draw_chart_grid(ui: &mut egui::Ui, roster: &LoadedRoster) {
        let charts = &roster.charts;

        ui.columns(2, |columns| {
            columns[0].label(RichText::new("Players by Position").size(15.0).strong());
            ChartPlotter::draw_count_chart(
                &mut columns[0],
                "players_by_position",
                &charts.by_position,
                &POSITION_PALETTE,
                "Position",
            );

            columns[1].label(RichText::new("Players by Training Shift").size(15.0).strong());
            ChartPlotter::draw_count_chart(
                &mut columns[1],
                "players_by_shift",
                &charts.by_shift,
                &SHIFT_PALETTE,
                "Shift",
            );
        });

        ui.add_space(CARD_SPACING);

        ui.columns(2, |columns| {
            columns[0].label(
                RichText::new("Height Distribution by Position")
                    .size(15.0)
                    .strong(),
            );
            ChartPlotter::draw_box_chart(
                &mut columns[0],
                "height_by_position",
                &charts.height_by_position,
            );

            columns[1].label(RichText::new("Last Match Result").size(15.0).strong());
            ChartPlotter::draw_count_chart(
                &mut columns[1],
                "last_match_result",
                &charts.by_result,
                &RESULT_PALETTE,
                "Result",
            );
        });
    }

    fn draw_binomial_section(ui: &mut egui::Ui, view: &BinomialView<'_>) {
        ui.label(
            RichText::new("Statistical Analysis (Distributions)")
                .size(18.0)
                .strong(),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new("Win Probability (Binomial Distribution)")
                .size(15.0)
                .strong(),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(&view.probability_label).size(14.0).strong());
        ui.add_space(6.0);
        ChartPlotter::draw_binomial_chart(ui, view.distribution, view.controls.successes);
    }
}
