//! Test helpers module
//!
//! Shared utilities for the integration tests: temporary bundle directories,
//! ready-made loader instances and log capture.

#![allow(dead_code, unused_imports)]

pub mod bundles;
pub mod log_capture;

pub use bundles::*;
pub use log_capture::*;
