//! Charts module - Chart rendering

mod plotter;

pub use plotter::{
    ChartPlotter, CHART_HEIGHT, PASTEL_PALETTE, POSITION_PALETTE, RESULT_PALETTE, SHIFT_PALETTE,
};
