//! Owned in-memory scene snapshot
//!
//! Host bindings copy their live scene into a [`MemoryScene`] and hand it to the
//! exporter. Snapshots can also be stored and reloaded as RON documents.

use std::collections::HashSet;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::{Camera, Material, SceneObject, SceneSource};

/// Errors raised while building or loading a snapshot
#[derive(Error, Debug)]
pub enum SceneError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Two materials share a name
    #[error("Duplicate material name '{0}'")]
    DuplicateMaterial(String),
}

/// Scene snapshot held entirely in memory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryScene {
    /// Active camera
    pub camera: Option<Camera>,
    /// Materials in enumeration order
    pub materials: Vec<Material>,
    /// Objects in enumeration order
    pub objects: Vec<SceneObject>,
}

impl MemoryScene {
    /// Create an empty scene without a camera
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active camera
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Append a material
    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    /// Append an object
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Check that material names are unique
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = HashSet::new();
        for material in &self.materials {
            if !seen.insert(material.name.as_str()) {
                return Err(SceneError::DuplicateMaterial(material.name.clone()));
            }
        }
        Ok(())
    }

    /// Parse and validate a snapshot from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, SceneError> {
        let scene: Self = ron::from_str(contents).map_err(|e| SceneError::Parse(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a snapshot from a RON file
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let scene = Self::from_ron_str(&contents)?;
        log::debug!(
            "Loaded scene snapshot '{}': {} materials, {} objects",
            path.display(),
            scene.materials.len(),
            scene.objects.len()
        );
        Ok(scene)
    }

    /// Serialize the snapshot as pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String, SceneError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SceneError::Serialize(e.to_string()))
    }
}

impl SceneSource for MemoryScene {
    fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    fn materials(&self) -> &[Material] {
        &self.materials
    }

    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{AxisAngle, Color, Vec3};
    use crate::scene::{MeshData, ObjectKind, Polygon, Vertex};

    fn sample_scene() -> MemoryScene {
        let mesh = MeshData::new(
            vec![
                Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
                Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
                Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
            ],
            vec![Polygon::new([0, 1, 2]).with_smooth(true)],
        )
        .with_slot(Some("Red"));

        MemoryScene::new()
            .with_camera(Camera::new(
                Vec3::new(1.0, 2.0, 3.0),
                AxisAngle::from_wxyz([1.5, 0.0, 1.0, 0.0]),
            ))
            .with_material(Material::new("Red", Color::new(1.0, 0.0, 0.0), 0.8))
            .with_object(SceneObject::mesh("Triangle", mesh))
            .with_object(SceneObject::other("Lamp", ObjectKind::Light).with_visible(false))
    }

    #[test]
    fn test_source_accessors() {
        let scene = sample_scene();
        assert!(scene.camera().is_some());
        assert_eq!(scene.materials().len(), 1);
        assert_eq!(scene.objects().len(), 2);
        assert_eq!(scene.materials()[0].name, "Red");
    }

    #[test]
    fn test_duplicate_material_rejected() {
        let scene =
            sample_scene().with_material(Material::new("Red", Color::new(0.0, 1.0, 0.0), 1.0));
        match scene.validate() {
            Err(SceneError::DuplicateMaterial(name)) => assert_eq!(name, "Red"),
            other => panic!("Expected duplicate material error, got {other:?}"),
        }
    }

    #[test]
    fn test_ron_round_trip() {
        let scene = sample_scene();
        let text = scene.to_ron_string().unwrap();
        let loaded = MemoryScene::from_ron_str(&text).unwrap();
        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_ron_parse_error() {
        let result = MemoryScene::from_ron_str("(camera: ");
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }
}
