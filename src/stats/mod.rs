//! Stats module - roster aggregates, category counts and the win model

pub mod binomial;
pub mod category;
pub mod summary;

pub use binomial::{win_rate, BinomialControls, WinModel};
pub use category::{BoxSummary, CategoryCounts, CountOrder, RosterCharts};
pub use summary::{summarize, RosterSummary, StatsError};
