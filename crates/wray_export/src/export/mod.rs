//! Scene export pipeline
//!
//! [`SceneExporter`] runs the three export stages over a [`SceneSource`] and feeds
//! the results to the writer selected by [`ExportConfig::format`]:
//!
//! ```text
//! SceneSource ─┬─ camera ────► CameraRecord ───┐
//!              ├─ materials ─► MaterialRecord ─┼─► SceneWriter (strict | script)
//!              └─ objects ───► PolygonRecord ──┘
//! ```
//!
//! The export is a single pass. A failed export leaves whatever was already written
//! in place; callers must not trust a file from a failed run.

pub mod camera;
pub mod material;
pub mod geometry;
pub mod writer;
pub mod strict;
pub mod script;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::core::{ConfigError, ExportConfig, ExportFormat};
use crate::scene::{Material, SceneObject, SceneSource};

pub use camera::CameraRecord;
pub use material::{MaterialKind, MaterialRecord};
pub use geometry::{GeometryWalker, PolygonRecord, VertexRecord, VisibilityFilter};
pub use writer::SceneWriter;

use writer::for_each_marked;
pub use strict::StrictWriter;
pub use script::ScriptWriter;

/// Numerical tolerance handed to the renderer with every scene
pub const EPSILON: f64 = 0.000_001;

/// Errors raised during an export
#[derive(Error, Debug)]
pub enum ExportError {
    /// The scene has no active camera
    #[error("Scene has no active camera")]
    MissingCamera,

    /// Two materials share a name
    #[error("Duplicate material name '{0}'")]
    DuplicateMaterial(String),

    /// A polygon has fewer than three vertices
    #[error("Polygon {polygon} of '{object}' has {count} vertices, at least 3 required")]
    DegeneratePolygon {
        /// Owning object
        object: String,
        /// Polygon index within the mesh
        polygon: usize,
        /// Vertex count found
        count: usize,
    },

    /// A polygon references a vertex the mesh does not have
    #[error("Polygon {polygon} of '{object}' references vertex {index}, mesh has {available}")]
    VertexOutOfRange {
        /// Owning object
        object: String,
        /// Polygon index within the mesh
        polygon: usize,
        /// Offending vertex index
        index: usize,
        /// Size of the mesh's vertex table
        available: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Text could not be encoded
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Invalid export configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// What an export wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    /// Materials written
    pub materials: usize,
    /// Visible meshes walked
    pub meshes: usize,
    /// Polygons written across all meshes
    pub polygons: usize,
    /// Vertices written across all polygons
    pub vertices: usize,
}

/// Exports scene snapshots to Wray scene files
pub struct SceneExporter<'f> {
    config: ExportConfig,
    visibility: Box<VisibilityFilter<'f>>,
}

impl<'f> SceneExporter<'f> {
    /// Create an exporter that walks objects flagged visible by the host
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            visibility: Box::new(|object: &SceneObject| object.visible),
        }
    }

    /// Replace the visibility predicate
    pub fn with_visibility(mut self, visible: impl Fn(&SceneObject) -> bool + 'f) -> Self {
        self.visibility = Box::new(visible);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export into an arbitrary stream in the configured format
    pub fn export_to_writer<S, W>(&self, scene: &S, out: W) -> Result<ExportSummary, ExportError>
    where
        S: SceneSource + ?Sized,
        W: Write,
    {
        match self.config.format {
            ExportFormat::Strict => self.export_with(scene, &mut StrictWriter::new(out)),
            ExportFormat::Script => self.export_with(scene, &mut ScriptWriter::new(out)),
        }
    }

    /// Export into a string in the configured format
    pub fn export_to_string<S>(&self, scene: &S) -> Result<String, ExportError>
    where
        S: SceneSource + ?Sized,
    {
        let mut buffer = Vec::new();
        self.export_to_writer(scene, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ExportError::Encode(e.to_string()))
    }

    /// Export into the file named by [`ExportConfig::output_path`]
    pub fn export_to_file<S>(&self, scene: &S) -> Result<ExportSummary, ExportError>
    where
        S: SceneSource + ?Sized,
    {
        self.config.validate()?;

        let path = self.config.output_path();
        log::info!("Exporting scene to '{}' ({} format)", path.display(), self.config.format);

        let file = File::create(path)?;
        let summary = self.export_to_writer(scene, BufWriter::new(file))?;

        log::info!(
            "Wrote '{}': {} materials, {} meshes, {} polygons, {} vertices",
            path.display(),
            summary.materials,
            summary.meshes,
            summary.polygons,
            summary.vertices
        );
        Ok(summary)
    }

    /// Run the export stages against an explicit writer
    pub fn export_with<S, W>(&self, scene: &S, writer: &mut W) -> Result<ExportSummary, ExportError>
    where
        S: SceneSource + ?Sized,
        W: SceneWriter,
    {
        // Checked before the first byte so a rejected scene never produces output
        let camera = scene.camera().ok_or(ExportError::MissingCamera)?;
        check_unique_materials(scene.materials())?;

        let mut summary = ExportSummary::default();

        writer.begin(EPSILON)?;
        writer.camera(&CameraRecord::extract(camera))?;

        writer.begin_materials()?;
        summary.materials = for_each_marked(
            scene.materials().iter().map(MaterialRecord::encode),
            |material, is_last| {
                log::trace!("Material '{}' -> {}", material.name, material.kind.type_name());
                writer.material(&material, is_last)
            },
        )?;
        writer.end_materials()?;

        let walker = GeometryWalker::new(scene.objects(), &*self.visibility);
        summary.meshes = walker.mesh_count();
        log::debug!(
            "Walking {} visible meshes ({}), {} polygons",
            summary.meshes,
            walker.mesh_names().collect::<Vec<_>>().join(", "),
            walker.polygon_count()
        );

        writer.begin_polygons()?;
        summary.polygons = for_each_marked(walker.polygons(), |polygon, is_last| {
            let polygon = polygon?;
            summary.vertices += polygon.vertices.len();
            writer.polygon(&polygon, is_last)
        })?;
        writer.finish()?;

        Ok(summary)
    }
}

fn check_unique_materials(materials: &[Material]) -> Result<(), ExportError> {
    let mut seen = HashSet::new();
    for material in materials {
        if !seen.insert(material.name.as_str()) {
            return Err(ExportError::DuplicateMaterial(material.name.clone()));
        }
    }
    Ok(())
}

impl Default for SceneExporter<'_> {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}
