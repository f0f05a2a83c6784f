//! # Wray Export
//!
//! Writes scene files for the Wray ray tracer from snapshots of a 3D-authoring
//! tool's scene.
//!
//! ## Features
//!
//! - **Two Formats**: Strict JSON and a JavaScript object-literal script
//! - **Host Agnostic**: Scenes are read through the [`scene::SceneSource`] trait
//! - **Deterministic**: Fixed float precision, host enumeration order preserved
//! - **Configurable**: Destination and format from TOML or RON config files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wray_export::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mesh = MeshData::new(
//!         vec![
//!             Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
//!             Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
//!             Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
//!         ],
//!         vec![Polygon::new([0, 1, 2])],
//!     )
//!     .with_slot(Some("Red"));
//!
//!     let scene = MemoryScene::new()
//!         .with_camera(Camera::new(Vec3::new(0.0, 0.0, 5.0), AxisAngle::default()))
//!         .with_material(Material::new("Red", Color::new(1.0, 0.0, 0.0), 0.8))
//!         .with_object(SceneObject::mesh("Triangle", mesh));
//!
//!     let config = ExportConfig::new().with_format(ExportFormat::Strict);
//!     SceneExporter::new(config).export_to_file(&scene)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

// Core modules
pub mod core;
pub mod config;
pub mod foundation;

// Scene snapshot and export pipeline
pub mod scene;
pub mod export;

pub use export::{ExportError, ExportSummary, SceneExporter};

/// Common imports for exporter users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, ExportConfig, ExportFormat},
        export::{
            ExportError, ExportSummary, SceneExporter, SceneWriter, StrictWriter, ScriptWriter,
        },
        foundation::math::{AxisAngle, Color, Vec3, Vec4},
        scene::{
            Camera, Material, MemoryScene, MeshData, MirrorSettings, ObjectKind, Polygon,
            SceneError, SceneObject, SceneSource, Vertex,
        },
    };
}
