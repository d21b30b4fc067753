//! Command handlers for bracelet.
//!
//! Each handler logs inside the usual frame and returns the process exit code
//! for expected outcomes, leaving real failures to the caller as errors.

pub mod generate;
