//! Chart Plotter Module
//! Creates interactive roster charts using egui_plot.

use crate::stats::{BoxSummary, CategoryCounts};
use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Plot, Points};

/// Default chart height in the dashboard grid.
pub const CHART_HEIGHT: f32 = 240.0;

pub const POSITION_PALETTE: [Color32; 5] = [
    Color32::from_rgb(59, 76, 192),
    Color32::from_rgb(124, 159, 249),
    Color32::from_rgb(192, 212, 245),
    Color32::from_rgb(242, 203, 183),
    Color32::from_rgb(180, 4, 38),
];

pub const SHIFT_PALETTE: [Color32; 4] = [
    Color32::from_rgb(68, 1, 84),
    Color32::from_rgb(49, 104, 142),
    Color32::from_rgb(53, 183, 121),
    Color32::from_rgb(253, 231, 37),
];

pub const PASTEL_PALETTE: [Color32; 5] = [
    Color32::from_rgb(161, 201, 244),
    Color32::from_rgb(255, 180, 130),
    Color32::from_rgb(141, 229, 161),
    Color32::from_rgb(255, 159, 155),
    Color32::from_rgb(208, 187, 255),
];

pub const RESULT_PALETTE: [Color32; 4] = [
    Color32::from_rgb(102, 194, 165),
    Color32::from_rgb(252, 141, 98),
    Color32::from_rgb(141, 160, 203),
    Color32::from_rgb(231, 138, 195),
];

pub const BINOMIAL_COLOR: Color32 = Color32::from_rgb(49, 130, 189);
pub const SELECTED_COLOR: Color32 = Color32::from_rgb(8, 48, 107);

/// Creates the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Pick a palette color, cycling when there are more bars than colors.
    pub fn palette_color(palette: &[Color32], index: usize) -> Color32 {
        palette[index % palette.len()]
    }

    /// Axis formatter that maps integer positions to category labels.
    fn category_formatter(
        labels: Vec<String>,
    ) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String {
        move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        }
    }

    /// Count per category as vertical bars.
    pub fn draw_count_chart(
        ui: &mut egui::Ui,
        id: &str,
        counts: &CategoryCounts,
        palette: &[Color32],
        x_label: &str,
    ) {
        let bars: Vec<Bar> = counts
            .entries
            .iter()
            .enumerate()
            .map(|(i, (label, n))| {
                Bar::new(i as f64, *n as f64)
                    .width(0.7)
                    .name(label)
                    .fill(Self::palette_color(palette, i))
            })
            .collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_label("Count")
            .include_y(0.0)
            .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
            .x_axis_formatter(Self::category_formatter(counts.labels()))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Height distribution per position as box plots with outlier points.
    pub fn draw_box_chart(ui: &mut egui::Ui, id: &str, boxes: &[BoxSummary]) {
        let labels: Vec<String> = boxes.iter().map(|b| b.group.clone()).collect();

        Plot::new(id)
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Position")
            .y_axis_label("Height (cm)")
            .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
            .x_axis_formatter(Self::category_formatter(labels))
            .show(ui, |plot_ui| {
                for (i, summary) in boxes.iter().enumerate() {
                    let color = Self::palette_color(&PASTEL_PALETTE, i);
                    let elem = BoxElem::new(
                        i as f64,
                        BoxSpread::new(
                            summary.whisker_low,
                            summary.q1,
                            summary.median,
                            summary.q3,
                            summary.whisker_high,
                        ),
                    )
                    .box_width(0.6)
                    .fill(color)
                    .stroke(egui::Stroke::new(1.5, Color32::DARK_GRAY));

                    plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&summary.group));

                    if !summary.outliers.is_empty() {
                        let points: Vec<[f64; 2]> =
                            summary.outliers.iter().map(|&v| [i as f64, v]).collect();
                        plot_ui.points(
                            Points::new(points)
                                .radius(3.0)
                                .color(Color32::DARK_GRAY)
                                .name(format!("{} outliers", summary.group)),
                        );
                    }
                }
            });
    }

    /// Binomial distribution of wins, highlighting the selected count.
    pub fn draw_binomial_chart(ui: &mut egui::Ui, distribution: &[f64], selected: u64) {
        let bars: Vec<Bar> = distribution
            .iter()
            .enumerate()
            .map(|(k, &p)| {
                let color = if k as u64 == selected {
                    SELECTED_COLOR
                } else {
                    BINOMIAL_COLOR
                };
                Bar::new(k as f64, p)
                    .width(0.8)
                    .name(format!("{k} wins"))
                    .fill(color)
            })
            .collect();

        Plot::new("binomial_distribution")
            .height(CHART_HEIGHT + 60.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Number of Wins")
            .y_axis_label("Probability")
            .include_y(0.0)
            .include_x(-0.5)
            .include_x(distribution.len() as f64 - 0.5)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}
