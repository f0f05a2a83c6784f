//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the exporter:
//! - Math types shared by the scene snapshot and the writers
//! - Logging utilities

pub mod math;
pub mod logging;
