//! Math utilities and types
//!
//! Provides the small set of math types the scene snapshot and the writers share.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGB color; channels are unconstrained but conventionally in `0..=1`
pub type Color = Vector3<f32>;

/// Rotation as an angle around an axis, in the order authoring tools store it
///
/// Hosts keep the quadruple as `(angle, axis_x, axis_y, axis_z)`. The renderer wants
/// `(axis_x, axis_y, axis_z, angle)`; see [`AxisAngle::to_xyzw`]. The axis is taken
/// as-is and never normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    /// Rotation angle in radians
    pub angle: f32,
    /// Rotation axis, nominally unit length
    pub axis: Vec3,
}

impl AxisAngle {
    /// Create a rotation of `angle` radians around `axis`
    pub fn new(angle: f32, axis: Vec3) -> Self {
        Self { angle, axis }
    }

    /// Build from the host's native `(angle, x, y, z)` quadruple
    pub fn from_wxyz(wxyz: [f32; 4]) -> Self {
        Self {
            angle: wxyz[0],
            axis: Vec3::new(wxyz[1], wxyz[2], wxyz[3]),
        }
    }

    /// Axis in `xyz`, angle in `w`
    pub fn to_xyzw(&self) -> Vec4 {
        Vec4::new(self.axis.x, self.axis.y, self.axis.z, self.angle)
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self {
            angle: 0.0,
            axis: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}
