//! Strict (JSON) scene format
//!
//! Layout of the emitted document:
//!
//! ```text
//! {
//!     "epsilon":0.000001,
//!     "camera":{"position":{..},"axisAngle":{..}},
//!     "materials":{"<name>":{"type":..,..},..},
//!     "triangles":[{"material":"<name>","vertices":[{"position":{..},"normal":null},..]},..]
//! }
//! ```
//!
//! Floats carry 6 decimals. No element list has a trailing comma.

use std::io::Write;

use crate::core::ExportFormat;
use crate::foundation::math::{Color, Vec3, Vec4};

use super::camera::CameraRecord;
use super::geometry::{PolygonRecord, VertexRecord};
use super::material::{MaterialKind, MaterialRecord};
use super::writer::{for_each_marked, quoted, Fixed, SceneWriter};
use super::ExportError;

const PRECISION: usize = ExportFormat::Strict.precision();

/// Writes the strict JSON scene format
pub struct StrictWriter<W: Write> {
    out: W,
}

impl<W: Write> StrictWriter<W> {
    /// Wrap an output stream
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the output stream
    pub fn into_inner(self) -> W {
        self.out
    }

    fn vec3(&mut self, v: &Vec3) -> Result<(), ExportError> {
        write!(
            self.out,
            "{{\"x\":{},\"y\":{},\"z\":{}}}",
            Fixed::new(v.x, PRECISION),
            Fixed::new(v.y, PRECISION),
            Fixed::new(v.z, PRECISION)
        )?;
        Ok(())
    }

    fn vec4(&mut self, v: &Vec4) -> Result<(), ExportError> {
        write!(
            self.out,
            "{{\"x\":{},\"y\":{},\"z\":{},\"w\":{}}}",
            Fixed::new(v.x, PRECISION),
            Fixed::new(v.y, PRECISION),
            Fixed::new(v.z, PRECISION),
            Fixed::new(v.w, PRECISION)
        )?;
        Ok(())
    }

    fn color(&mut self, c: &Color) -> Result<(), ExportError> {
        write!(
            self.out,
            "{{\"r\":{},\"g\":{},\"b\":{}}}",
            Fixed::new(c.x, PRECISION),
            Fixed::new(c.y, PRECISION),
            Fixed::new(c.z, PRECISION)
        )?;
        Ok(())
    }

    fn vertex(&mut self, vertex: &VertexRecord, is_last: bool) -> Result<(), ExportError> {
        self.out.write_all(b"\t\t\t\t{\"position\":")?;
        self.vec3(&vertex.position)?;
        self.out.write_all(b",\"normal\":")?;
        match &vertex.normal {
            Some(normal) => self.vec3(normal)?,
            None => self.out.write_all(b"null")?,
        }
        self.out.write_all((if is_last { "}" } else { "},\n" }).as_bytes())?;
        Ok(())
    }
}

impl<W: Write> SceneWriter for StrictWriter<W> {
    fn begin(&mut self, epsilon: f64) -> Result<(), ExportError> {
        writeln!(self.out, "{{")?;
        writeln!(self.out, "\t\"epsilon\":{},", Fixed::wide(epsilon, PRECISION))?;
        Ok(())
    }

    fn camera(&mut self, camera: &CameraRecord) -> Result<(), ExportError> {
        self.out.write_all(b"\n\t\"camera\":{\n")?;
        self.out.write_all(b"\t\t\"position\":")?;
        self.vec3(&camera.position)?;
        self.out.write_all(b",\n\t\t\"axisAngle\":")?;
        self.vec4(&camera.axis_angle)?;
        self.out.write_all(b"\n\t},\n\n")?;
        Ok(())
    }

    fn begin_materials(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\t\"materials\":{\n")?;
        Ok(())
    }

    fn material(
        &mut self,
        material: &MaterialRecord<'_>,
        is_last: bool,
    ) -> Result<(), ExportError> {
        writeln!(self.out, "\t\t{}:{{", quoted(material.name)?)?;
        writeln!(self.out, "\t\t\t\"type\":\"{}\",", material.kind.type_name())?;
        self.out.write_all(b"\t\t\t\"color\":")?;
        self.color(&material.color)?;
        self.out.write_all(b",\n")?;

        match material.kind {
            MaterialKind::Reflective { albedo, reflectance } => {
                writeln!(self.out, "\t\t\t\"albedo\":{},", Fixed::new(albedo, PRECISION))?;
                writeln!(self.out, "\t\t\t\"reflectance\":{}", Fixed::new(reflectance, PRECISION))?;
            }
            MaterialKind::Emissive { intensity } => {
                writeln!(self.out, "\t\t\t\"intensity\":{}", Fixed::new(intensity, PRECISION))?;
            }
            MaterialKind::Lambertian { albedo } => {
                writeln!(self.out, "\t\t\t\"albedo\":{}", Fixed::new(albedo, PRECISION))?;
            }
        }

        self.out.write_all((if is_last { "\t\t}\n" } else { "\t\t},\n" }).as_bytes())?;
        Ok(())
    }

    fn end_materials(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\t},\n\n")?;
        Ok(())
    }

    fn begin_polygons(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\t\"triangles\":[\n")?;
        Ok(())
    }

    fn polygon(&mut self, polygon: &PolygonRecord<'_>, is_last: bool) -> Result<(), ExportError> {
        self.out.write_all(b"\t\t{\n")?;
        if let Some(name) = polygon.material {
            writeln!(self.out, "\t\t\t\"material\":{},", quoted(name)?)?;
        }
        self.out.write_all(b"\t\t\t\"vertices\":[\n")?;
        for_each_marked(&polygon.vertices, |vertex, last| self.vertex(vertex, last))?;
        self.out.write_all(b"]\n")?;
        self.out.write_all((if is_last { "\t\t}\n" } else { "\t\t},\n" }).as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\t]\n}\n")?;
        self.out.flush()?;
        Ok(())
    }
}
