// src/data_analysis/mod.rs

pub mod alignment;
pub mod comparison_report;
pub mod path_metrics;
pub mod statistics;

// src/data_analysis/mod.rs
