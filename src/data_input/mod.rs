// src/data_input/mod.rs

pub mod path_data;
pub mod path_parser;
pub mod path_writer;

// src/data_input/mod.rs
