//! Camera extraction

use crate::foundation::math::{Vec3, Vec4};
use crate::scene::Camera;

/// Camera as the renderer reads it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRecord {
    /// Position in world space
    pub position: Vec3,
    /// Rotation axis in `xyz`, angle in `w`
    pub axis_angle: Vec4,
}

impl CameraRecord {
    /// Reorder the host camera into the renderer's layout
    ///
    /// This is a direct field shuffle. The axis is not normalized or checked.
    pub fn extract(camera: &Camera) -> Self {
        Self {
            position: camera.location,
            axis_angle: camera.rotation.to_xyzw(),
        }
    }
}
