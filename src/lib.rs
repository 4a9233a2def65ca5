//! Volley Panel - Volleyball Roster Statistics & Binomial Win Explorer
//!
//! Loads a semicolon-delimited roster, summarizes it, charts it and models
//! match wins with a binomial distribution.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod state;
pub mod stats;
