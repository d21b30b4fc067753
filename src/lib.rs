//! # Bracelet
//!
//! Draws a dual-ring "bracelet" diagram comparing the 24-hour days of two
//! cities. The inner ring is the home city's day, the outer ring the friend's,
//! rotated by the whole-hour offset between their time zones.
//!
//! ## Architecture
//!
//! - **args**: Command-line parsing
//! - **cities**: City registry, region grouping, and interactive city input
//! - **commands**: The generate command behind the binary
//! - **config**: Optional TOML configuration and validation
//! - **constants**: Canvas geometry, palette, and defaults
//! - **diagram**: Offset computation, ring layout, and rendering
//! - **logger**: Structured terminal output
//! - **svg**: SVG document model and serialization
//! - **utils**: Number formatting and display helpers

pub mod args;
pub mod cities;
pub mod commands;
pub mod config;
pub mod constants;
pub mod diagram;
pub mod logger;
pub mod svg;
pub mod utils;

// Re-export important types for easier access
pub use cities::{list_groups, resolve};
pub use config::Config;
pub use diagram::{DiagramStyle, build_document, render, render_at, render_with_style};
pub use logger::{Log, LogLevel};
