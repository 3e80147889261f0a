//! Clean a Cargo project, rebuild it with `-Z timings=json`, and chart how long each
//! target took as an SVG bar chart.

/// Command-line parsing and handlers.
pub mod cli;
/// File names, flags and default settings.
pub mod constants;
/// Settings, naming, timing decoding, layout and rendering.
pub mod core;
/// Phase timing helpers.
pub mod dev_utils;
/// Data types shared across the crate.
pub mod models;
/// Child processes and cargo invocations.
pub mod system;
