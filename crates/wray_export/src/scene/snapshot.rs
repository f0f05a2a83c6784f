//! Plain data types making up a scene snapshot

use serde::{Serialize, Deserialize};

use crate::foundation::math::{AxisAngle, Color, Vec3};

/// Scene camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Position in world space
    pub location: Vec3,
    /// Orientation in the host's native angle-then-axis form
    pub rotation: AxisAngle,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            location: Vec3::zeros(),
            rotation: AxisAngle::default(),
        }
    }
}

impl Camera {
    /// Create a camera at `location` with the given orientation
    pub fn new(location: Vec3, rotation: AxisAngle) -> Self {
        Self { location, rotation }
    }
}

/// Ray-traced mirror settings of a material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorSettings {
    /// Whether mirror reflection is turned on
    pub enabled: bool,
    /// Amount of light reflected, conventionally `0..=1`
    pub reflect_factor: f32,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            reflect_factor: 1.0,
        }
    }
}

/// Surface material as the host describes it
///
/// Several of these properties can be set at once on the host side; the exporter
/// decides which one wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Material name, unique within the scene
    pub name: String,
    /// Diffuse color
    pub diffuse_color: Color,
    /// Diffuse intensity, written as "albedo"
    pub diffuse_intensity: f32,
    /// Mirror settings
    pub mirror: MirrorSettings,
    /// Emission intensity; zero means the material does not emit
    pub emit: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse_color: Color::new(0.8, 0.8, 0.8),
            diffuse_intensity: 0.8,
            mirror: MirrorSettings::default(),
            emit: 0.0,
        }
    }
}

impl Material {
    /// Create a plain diffuse material
    pub fn new(name: impl Into<String>, diffuse_color: Color, diffuse_intensity: f32) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
            diffuse_intensity,
            ..Default::default()
        }
    }

    /// Turn on mirror reflection with the given factor
    pub fn with_mirror(mut self, reflect_factor: f32) -> Self {
        self.mirror = MirrorSettings {
            enabled: true,
            reflect_factor,
        };
        self
    }

    /// Set the emission intensity
    pub fn with_emit(mut self, emit: f32) -> Self {
        self.emit = emit;
        self
    }
}

/// Mesh vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in object space
    pub position: Vec3,
    /// Vertex normal; only exported for smooth-shaded polygons
    pub normal: Vec3,
}

impl Vertex {
    /// Create a vertex
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Mesh polygon, possibly an n-gon
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Polygon {
    /// Indices into the mesh's vertex table, in winding order
    pub vertices: Vec<usize>,
    /// Whether vertex normals are interpolated across the face
    pub use_smooth: bool,
    /// Index into the mesh's material slots
    pub material_index: usize,
}

impl Polygon {
    /// Create a flat-shaded polygon using material slot 0
    pub fn new(vertices: impl Into<Vec<usize>>) -> Self {
        Self {
            vertices: vertices.into(),
            use_smooth: false,
            material_index: 0,
        }
    }

    /// Set smooth shading
    pub fn with_smooth(mut self, use_smooth: bool) -> Self {
        self.use_smooth = use_smooth;
        self
    }

    /// Set the material slot index
    pub fn with_material_index(mut self, index: usize) -> Self {
        self.material_index = index;
        self
    }
}

/// Mesh geometry with its material slot table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshData {
    /// Vertex table
    pub vertices: Vec<Vertex>,
    /// Polygons referencing the vertex table
    pub polygons: Vec<Polygon>,
    /// Material slots; `None` is an empty slot
    pub material_slots: Vec<Option<String>>,
}

impl MeshData {
    /// Create a mesh without material slots
    pub fn new(vertices: Vec<Vertex>, polygons: Vec<Polygon>) -> Self {
        Self {
            vertices,
            polygons,
            material_slots: Vec::new(),
        }
    }

    /// Append a material slot
    pub fn with_slot(mut self, material: Option<&str>) -> Self {
        self.material_slots.push(material.map(str::to_string));
        self
    }

    /// Material name in `slot`, if the slot exists and is filled
    pub fn slot_material(&self, slot: usize) -> Option<&str> {
        self.material_slots.get(slot)?.as_deref()
    }
}

/// What kind of object a [`SceneObject`] is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Polygon mesh
    Mesh(MeshData),
    /// Camera object
    Camera,
    /// Light source
    Light,
    /// Empty / helper object
    Empty,
}

/// Object in the host scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Object name
    pub name: String,
    /// Visibility as evaluated by the host's current view
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Object kind and data
    pub kind: ObjectKind,
}

fn default_visible() -> bool {
    true
}

impl SceneObject {
    /// Create a visible mesh object
    pub fn mesh(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            visible: true,
            kind: ObjectKind::Mesh(mesh),
        }
    }

    /// Create a visible object of a non-geometric kind
    pub fn other(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            visible: true,
            kind,
        }
    }

    /// Set visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Mesh data, for mesh objects
    pub fn mesh_data(&self) -> Option<&MeshData> {
        match &self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}
