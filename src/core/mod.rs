// src/core/mod.rs

pub mod color;
pub mod config_loader;
pub mod layout;
pub mod naming;
pub mod paths;
pub mod plotter;
pub mod timings_parser;
