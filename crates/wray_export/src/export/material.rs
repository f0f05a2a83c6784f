//! Material classification
//!
//! Every host material maps to exactly one renderer material kind. The host may have
//! mirror reflection and emission turned on together; the renderer supports only one
//! behavior per surface, so the kinds form a priority chain:
//!
//! 1. **reflective** when mirror reflection is enabled
//! 2. **emissive** when the emission intensity is non-zero
//! 3. **lambertian** otherwise

use crate::foundation::math::Color;
use crate::scene::Material;

/// Renderer material kind with its kind-specific parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    /// Mirror-like surface
    Reflective {
        /// Diffuse intensity
        albedo: f32,
        /// Mirror reflect factor
        reflectance: f32,
    },
    /// Light-emitting surface
    Emissive {
        /// Emission intensity
        intensity: f32,
    },
    /// Plain diffuse surface
    Lambertian {
        /// Diffuse intensity
        albedo: f32,
    },
}

impl MaterialKind {
    /// Classify a host material
    ///
    /// Depends only on the mirror flag and the emission value.
    pub fn classify(material: &Material) -> Self {
        if material.mirror.enabled {
            Self::Reflective {
                albedo: material.diffuse_intensity,
                reflectance: material.mirror.reflect_factor,
            }
        } else if material.emit != 0.0 {
            Self::Emissive {
                intensity: material.emit,
            }
        } else {
            Self::Lambertian {
                albedo: material.diffuse_intensity,
            }
        }
    }

    /// Value of the `type` field in the strict format
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Reflective { .. } => "reflective",
            Self::Emissive { .. } => "emissive",
            Self::Lambertian { .. } => "lambertian",
        }
    }
}

/// Classified material ready for a writer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRecord<'a> {
    /// Material name
    pub name: &'a str,
    /// Diffuse color, as given by the host
    pub color: Color,
    /// Classified kind
    pub kind: MaterialKind,
}

impl<'a> MaterialRecord<'a> {
    /// Classify and encode a host material
    pub fn encode(material: &'a Material) -> Self {
        Self {
            name: &material.name,
            color: material.diffuse_color,
            kind: MaterialKind::classify(material),
        }
    }

    /// Color scaled by the emission intensity for emissive materials, unchanged otherwise
    pub fn premultiplied_color(&self) -> Color {
        match self.kind {
            MaterialKind::Emissive { intensity } => self.color * intensity,
            _ => self.color,
        }
    }
}
