//! Writer abstraction shared by the output formats
//!
//! The exporter drives a [`SceneWriter`] through a fixed sequence of calls:
//!
//! ```text
//! begin → camera → begin_materials → material* → end_materials
//!       → begin_polygons → polygon* → finish
//! ```
//!
//! Element calls carry an `is_last` flag so a writer can place separators without
//! tracking positions itself.

use std::fmt;

use super::camera::CameraRecord;
use super::geometry::PolygonRecord;
use super::material::MaterialRecord;
use super::ExportError;

/// Output syntax strategy
pub trait SceneWriter {
    /// Open the root object and write the epsilon constant
    fn begin(&mut self, epsilon: f64) -> Result<(), ExportError>;

    /// Write the camera block
    fn camera(&mut self, camera: &CameraRecord) -> Result<(), ExportError>;

    /// Open the material collection
    fn begin_materials(&mut self) -> Result<(), ExportError>;

    /// Write one classified material
    fn material(&mut self, material: &MaterialRecord<'_>, is_last: bool) -> Result<(), ExportError>;

    /// Close the material collection
    fn end_materials(&mut self) -> Result<(), ExportError>;

    /// Open the polygon list
    fn begin_polygons(&mut self) -> Result<(), ExportError>;

    /// Write one polygon; `is_last` refers to the whole export, not the owning mesh
    fn polygon(&mut self, polygon: &PolygonRecord<'_>, is_last: bool) -> Result<(), ExportError>;

    /// Close the polygon list and the root object, then flush
    fn finish(&mut self) -> Result<(), ExportError>;
}

/// Calls `f` for every item along with whether it is the final one
///
/// Returns the number of items visited.
pub fn for_each_marked<I, E, F>(items: I, mut f: F) -> Result<usize, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, bool) -> Result<(), E>,
{
    let mut items = items.into_iter().peekable();
    let mut count = 0;
    while let Some(item) = items.next() {
        let is_last = items.peek().is_none();
        f(item, is_last)?;
        count += 1;
    }
    Ok(count)
}

/// Float printed with a fixed number of decimals
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    value: f64,
    precision: usize,
}

impl Fixed {
    /// Format an `f32` sample with `precision` decimals
    pub fn new(value: f32, precision: usize) -> Self {
        Self {
            value: f64::from(value),
            precision,
        }
    }

    /// Format an `f64` with `precision` decimals
    pub const fn wide(value: f64, precision: usize) -> Self {
        Self { value, precision }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.precision, self.value)
    }
}

/// Quote and escape `text` as a string literal valid in both JSON and JavaScript
pub fn quoted(text: &str) -> Result<String, ExportError> {
    serde_json::to_string(text).map_err(|e| ExportError::Encode(e.to_string()))
}
