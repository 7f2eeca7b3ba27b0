// src/plot_functions/mod.rs

pub mod plot_detailed_comparison;
pub mod plot_path_comparison;

// src/plot_functions/mod.rs
