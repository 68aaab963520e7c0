pub mod cli;
pub mod config;
pub mod data_paths;
pub mod errors;
pub mod gemini;
pub mod keywords;
pub mod logging;
pub mod tui;
pub mod types;
