//! Application constants and default values for bracelet.
//!
//! This module contains the canvas geometry, the drawing palette, the
//! configuration defaults, and the exit codes used throughout the application.

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_OUTPUT_FILE: &str = "bracelet.svg";
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const CONFIG_DIR_NAME: &str = "bracelet";
pub const CONFIG_FILE_NAME: &str = "bracelet.toml";

// ═══ Canvas Geometry ═══
// Logical coordinate space is 0..CANVAS_SIZE on both axes

pub const CANVAS_SIZE: f64 = 300.0;
pub const CANVAS_PHYSICAL_SIZE: &str = "300mm";
pub const CENTER_X: f64 = 150.0;
pub const CENTER_Y: f64 = 150.0;
pub const INNER_RADIUS: f64 = 70.0; // home (reference) ring
pub const OUTER_RADIUS: f64 = 90.0; // friend ring

pub const HOURS_PER_DAY: i32 = 24;
pub const EMPHASIS_EVERY_HOURS: i32 = 6; // 0, 6, 12, 18

pub const BACKDROP_PADDING: f64 = 40.0; // backdrop radius = OUTER_RADIUS + padding
pub const DECOR_RING_GAP: f64 = 2.0; // decorative circles sit this far outside/inside the rings
pub const INNER_TICK_LENGTH: f64 = 8.0;
pub const OUTER_TICK_LENGTH: f64 = 12.0;
pub const INNER_LABEL_INSET: f64 = 15.0; // hour labels at radius - inset
pub const OUTER_LABEL_OUTSET: f64 = 20.0; // hour labels at radius + outset
pub const INNER_ZONE_LABEL_INSET: f64 = 35.0;
pub const OUTER_ZONE_LABEL_OUTSET: f64 = 25.0;
pub const RING_DOT_OUTSET: f64 = 5.0;
pub const RING_DOT_RADIUS: f64 = 1.0;
pub const CENTER_DOT_RADIUS: f64 = 4.0;
pub const CENTER_HIGHLIGHT_RADIUS: f64 = 2.0;
pub const CAPTION_OFFSET: f64 = OUTER_RADIUS + 40.0; // below the center

// ═══ Stroke Weights & Type Sizes ═══

pub const EMPHASIS_STROKE_WIDTH: f64 = 1.5;
pub const REGULAR_STROKE_WIDTH: f64 = 0.8;
pub const DECOR_STROKE_WIDTH: f64 = 0.5;
pub const HOUR_LABEL_FONT_SIZE: &str = "10px";
pub const ZONE_LABEL_FONT_SIZE: &str = "10px";
pub const CAPTION_FONT_SIZE: &str = "12px";

// ═══ Palette ═══

pub const GRADIENT_ID: &str = "background_gradient";
pub const GRADIENT_CENTER_COLOR: &str = "#f0f8ff"; // alice blue
pub const GRADIENT_CENTER_OPACITY: f64 = 0.8;
pub const GRADIENT_EDGE_COLOR: &str = "#e6e6fa"; // lavender
pub const GRADIENT_EDGE_OPACITY: f64 = 0.3;
pub const DECOR_RING_COLOR: &str = "#b0c4de";
pub const DECOR_RING_OPACITY: f64 = 0.6;
pub const EMPHASIS_TICK_COLOR: &str = "#4682b4";
pub const REGULAR_TICK_COLOR: &str = "#778899";
pub const EMPHASIS_LABEL_COLOR: &str = "#2f4f4f";
pub const REGULAR_LABEL_COLOR: &str = "#696969";
pub const ZONE_LABEL_COLOR: &str = "#4169e1";
pub const ACCENT_COLOR: &str = "#4682b4";
pub const RING_DOT_OPACITY: f64 = 0.8;
pub const CENTER_DOT_OPACITY: f64 = 0.9;
pub const HIGHLIGHT_COLOR: &str = "#f0f8ff";

// ═══ Element Classes ═══
// Every emitted primitive is tagged with its role

pub const CLASS_BACKDROP: &str = "backdrop";
pub const CLASS_DECOR_RING: &str = "decor-ring";
pub const CLASS_TICK: &str = "tick";
pub const CLASS_HOUR_LABEL: &str = "hour-label";
pub const CLASS_ZONE_LABEL: &str = "zone-label";
pub const CLASS_RING_DOT: &str = "ring-dot";
pub const CLASS_CENTER_DOT: &str = "center-dot";
pub const CLASS_CENTER_HIGHLIGHT: &str = "center-highlight";
pub const CLASS_CAPTION: &str = "caption";

// ═══ Exit Codes ═══
// Standard exit codes for process termination

pub const EXIT_FAILURE: i32 = 1; // General failure
