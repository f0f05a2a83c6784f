//! # Core Module
//!
//! Shared abstractions used throughout the exporter.
//!
//! ## Organization
//!
//! - **Config**: Export configuration (destination, output format, logging)

pub mod config;

pub use config::{ExportConfig, ExportFormat};
pub use crate::config::{Config, ConfigError};
