//! Scene snapshot model
//!
//! Read-only view of the host application's scene at export time. The exporter only
//! ever talks to a [`SceneSource`]; host bindings implement it over their live data,
//! and [`MemoryScene`] implements it over owned snapshots.
//!
//! ## Architecture
//!
//! ```text
//! Host scene graph
//!      ↓
//! SceneSource (snapshot)
//!      ↓
//! SceneExporter → SceneWriter → scene file
//! ```

mod snapshot;
mod memory_scene;

pub use snapshot::{
    Camera, Material, MirrorSettings, MeshData, Polygon, Vertex, SceneObject, ObjectKind,
};
pub use memory_scene::{MemoryScene, SceneError};

/// Read-only access to a scene snapshot
///
/// Sequences are returned in host enumeration order. The exporter relies on that order
/// being stable: exporting an unchanged scene twice must produce identical bytes.
pub trait SceneSource {
    /// The active camera, if the scene has one
    fn camera(&self) -> Option<&Camera>;

    /// Every material in the scene, unique by name
    fn materials(&self) -> &[Material];

    /// Every object in the scene, visible or not
    fn objects(&self) -> &[SceneObject];
}
