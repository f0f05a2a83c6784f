//! Script (JavaScript object literal) scene format
//!
//! The renderer's loader evaluates this file rather than parsing it as JSON. The
//! `triangles` value is an immediately-invoked function that binds short aliases for
//! the renderer's constructors, builds a material table and returns the polygon list:
//!
//! ```text
//! triangles:(()=>{
//!     const t = Wray.triangle;
//!     const v = Wray.vertex;
//!     const n = Wray.vector3;
//!     const m = {"Red":Wray.material.lambertian(Wray.color_rgb(1.0000,0.0000,0.0000),0.8000),};
//!     return [t([v(n(0.0000,0.0000,0.0000),null),..],m["Red"]),..];
//! })(),
//! ```
//!
//! Floats carry 4 decimals. Every element is followed by a comma, last one included.

use std::io::Write;

use crate::core::ExportFormat;
use crate::foundation::math::{Color, Vec3};

use super::camera::CameraRecord;
use super::geometry::PolygonRecord;
use super::material::{MaterialKind, MaterialRecord};
use super::writer::{quoted, Fixed, SceneWriter};
use super::ExportError;

const PRECISION: usize = ExportFormat::Script.precision();

/// Precision of the epsilon constant, which would round to zero at 4 decimals
const EPSILON_PRECISION: usize = ExportFormat::Strict.precision();

/// Writes the script scene format
pub struct ScriptWriter<W: Write> {
    out: W,
}

impl<W: Write> ScriptWriter<W> {
    /// Wrap an output stream
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the output stream
    pub fn into_inner(self) -> W {
        self.out
    }

    fn vector3(&mut self, v: &Vec3) -> Result<(), ExportError> {
        write!(
            self.out,
            "n({},{},{})",
            Fixed::new(v.x, PRECISION),
            Fixed::new(v.y, PRECISION),
            Fixed::new(v.z, PRECISION)
        )?;
        Ok(())
    }

    fn color_rgb(&mut self, c: &Color) -> Result<(), ExportError> {
        write!(
            self.out,
            "Wray.color_rgb({},{},{})",
            Fixed::new(c.x, PRECISION),
            Fixed::new(c.y, PRECISION),
            Fixed::new(c.z, PRECISION)
        )?;
        Ok(())
    }
}

impl<W: Write> SceneWriter for ScriptWriter<W> {
    fn begin(&mut self, epsilon: f64) -> Result<(), ExportError> {
        writeln!(self.out, "{{")?;
        writeln!(self.out, "\tepsilon:{},", Fixed::wide(epsilon, EPSILON_PRECISION))?;
        Ok(())
    }

    fn camera(&mut self, camera: &CameraRecord) -> Result<(), ExportError> {
        let p = camera.position;
        let a = camera.axis_angle;
        self.out.write_all(b"\n\tcamera:{\n")?;
        writeln!(
            self.out,
            "\t\tposition:{{x:{},y:{},z:{}}},",
            Fixed::new(p.x, PRECISION),
            Fixed::new(p.y, PRECISION),
            Fixed::new(p.z, PRECISION)
        )?;
        writeln!(
            self.out,
            "\t\taxisAngle:{{x:{},y:{},z:{},w:{}}},",
            Fixed::new(a.x, PRECISION),
            Fixed::new(a.y, PRECISION),
            Fixed::new(a.z, PRECISION),
            Fixed::new(a.w, PRECISION)
        )?;
        self.out.write_all(b"\t},\n\n")?;
        Ok(())
    }

    fn begin_materials(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\ttriangles:(()=>{\n")?;
        self.out.write_all(b"\t\tconst t = Wray.triangle;\n")?;
        self.out.write_all(b"\t\tconst v = Wray.vertex;\n")?;
        self.out.write_all(b"\t\tconst n = Wray.vector3;\n\n")?;
        self.out.write_all(b"\t\tconst m = {\n")?;
        Ok(())
    }

    fn material(
        &mut self,
        material: &MaterialRecord<'_>,
        _is_last: bool,
    ) -> Result<(), ExportError> {
        write!(self.out, "\t\t\t{}:", quoted(material.name)?)?;

        match material.kind {
            MaterialKind::Reflective { albedo, reflectance } => {
                self.out.write_all(b"Wray.material.reflective(")?;
                self.color_rgb(&material.color)?;
                write!(
                    self.out,
                    ",{},{})",
                    Fixed::new(reflectance, PRECISION),
                    Fixed::new(albedo, PRECISION)
                )?;
            }
            MaterialKind::Emissive { .. } => {
                self.out.write_all(b"Wray.material.emissive(")?;
                self.color_rgb(&material.premultiplied_color())?;
                self.out.write_all(b")")?;
            }
            MaterialKind::Lambertian { albedo } => {
                self.out.write_all(b"Wray.material.lambertian(")?;
                self.color_rgb(&material.color)?;
                write!(self.out, ",{})", Fixed::new(albedo, PRECISION))?;
            }
        }

        self.out.write_all(b",\n")?;
        Ok(())
    }

    fn end_materials(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\t\t};\n\n")?;
        Ok(())
    }

    fn begin_polygons(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\t\treturn [\n")?;
        Ok(())
    }

    fn polygon(&mut self, polygon: &PolygonRecord<'_>, _is_last: bool) -> Result<(), ExportError> {
        self.out.write_all(b"\t\t\tt([")?;
        for vertex in &polygon.vertices {
            self.out.write_all(b"v(")?;
            self.vector3(&vertex.position)?;
            self.out.write_all(b",")?;
            match &vertex.normal {
                Some(normal) => self.vector3(normal)?,
                None => self.out.write_all(b"null")?,
            }
            self.out.write_all(b"),")?;
        }
        self.out.write_all(b"]")?;

        if let Some(name) = polygon.material {
            write!(self.out, ",m[{}]", quoted(name)?)?;
        }

        self.out.write_all(b"),\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.out.write_all(b"\t\t];\n")?;
        self.out.write_all(b"\t})(),\n")?;
        self.out.write_all(b"}\n")?;
        self.out.flush()?;
        Ok(())
    }
}
