//! Geometry walking
//!
//! Flattens every visible mesh into one sequence of polygon records. Polygons are
//! emitted exactly as the host stores them: n-gons stay n-gons and the vertex order
//! follows the source winding.

use crate::foundation::math::Vec3;
use crate::scene::{MeshData, Polygon, SceneObject};

use super::ExportError;

/// Decides whether a scene object counts as visible for this export
pub type VisibilityFilter<'f> = dyn Fn(&SceneObject) -> bool + 'f;

/// Vertex as written to the scene file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord {
    /// Vertex position
    pub position: Vec3,
    /// Vertex normal for smooth polygons; `None` tells the renderer to use the face normal
    pub normal: Option<Vec3>,
}

/// Polygon as written to the scene file
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRecord<'a> {
    /// Name of the material in the polygon's slot, if it resolves
    pub material: Option<&'a str>,
    /// Vertices in winding order
    pub vertices: Vec<VertexRecord>,
}

impl<'a> PolygonRecord<'a> {
    /// Resolve one polygon of `mesh` into a record
    pub fn build(
        object: &SceneObject,
        mesh: &'a MeshData,
        index: usize,
        polygon: &Polygon,
    ) -> Result<Self, ExportError> {
        if polygon.vertices.len() < 3 {
            return Err(ExportError::DegeneratePolygon {
                object: object.name.clone(),
                polygon: index,
                count: polygon.vertices.len(),
            });
        }

        let material = mesh.slot_material(polygon.material_index);
        if material.is_none() && !mesh.material_slots.is_empty() {
            log::debug!(
                "Polygon {} of '{}' has no material in slot {}, omitting reference",
                index,
                object.name,
                polygon.material_index
            );
        }

        let vertices = polygon
            .vertices
            .iter()
            .map(|&vertex_index| {
                let vertex =
                    mesh.vertices.get(vertex_index).ok_or_else(|| ExportError::VertexOutOfRange {
                        object: object.name.clone(),
                        polygon: index,
                        index: vertex_index,
                        available: mesh.vertices.len(),
                    })?;

                Ok(VertexRecord {
                    position: vertex.position,
                    normal: polygon.use_smooth.then_some(vertex.normal),
                })
            })
            .collect::<Result<Vec<_>, ExportError>>()?;

        Ok(Self { material, vertices })
    }
}

/// Walks the visible meshes of a scene in enumeration order
pub struct GeometryWalker<'a> {
    meshes: Vec<(&'a SceneObject, &'a MeshData)>,
}

impl<'a> GeometryWalker<'a> {
    /// Select the mesh objects accepted by `visible`
    pub fn new(objects: &'a [SceneObject], visible: &VisibilityFilter<'_>) -> Self {
        let meshes = objects
            .iter()
            .filter_map(|object| {
                let mesh = object.mesh_data()?;
                if visible(object) {
                    Some((object, mesh))
                } else {
                    log::debug!("Skipping hidden mesh '{}'", object.name);
                    None
                }
            })
            .collect();

        Self { meshes }
    }

    /// Number of meshes that will be walked
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Names of the meshes that will be walked
    pub fn mesh_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.meshes.iter().map(|&(object, _)| object.name.as_str())
    }

    /// Total number of polygons across all walked meshes
    pub fn polygon_count(&self) -> usize {
        self.meshes.iter().map(|(_, mesh)| mesh.polygons.len()).sum()
    }

    /// Every polygon of every walked mesh, as one sequence
    pub fn polygons(&self) -> impl Iterator<Item = Result<PolygonRecord<'a>, ExportError>> + '_ {
        self.meshes.iter().flat_map(|&(object, mesh)| {
            mesh.polygons
                .iter()
                .enumerate()
                .map(move |(index, polygon)| PolygonRecord::build(object, mesh, index, polygon))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ObjectKind, Vertex};

    fn quad_mesh() -> MeshData {
        MeshData::new(
            vec![
                Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
                Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.1, 0.0, 0.9)),
                Vertex::new(Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.1, 0.9)),
                Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.1, 0.1, 0.8)),
            ],
            vec![
                Polygon::new([3, 0, 2, 1]),
                Polygon::new([0, 1, 2]).with_smooth(true).with_material_index(1),
            ],
        )
        .with_slot(Some("Red"))
        .with_slot(None)
    }

    fn all_visible(object: &SceneObject) -> bool {
        object.visible
    }

    #[test]
    fn test_ngon_keeps_winding_order() {
        let objects = vec![SceneObject::mesh("Quad", quad_mesh())];
        let walker = GeometryWalker::new(&objects, &all_visible);
        let polygons: Vec<_> = walker.polygons().collect::<Result<_, _>>().unwrap();

        let positions: Vec<Vec3> = polygons[0].vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_normals_follow_smooth_flag() {
        let mesh = quad_mesh();
        let objects = vec![SceneObject::mesh("Quad", mesh.clone())];
        let walker = GeometryWalker::new(&objects, &all_visible);
        let polygons: Vec<_> = walker.polygons().collect::<Result<_, _>>().unwrap();

        assert!(polygons[0].vertices.iter().all(|v| v.normal.is_none()));

        for (record, &source) in polygons[1].vertices.iter().zip(&mesh.polygons[1].vertices) {
            assert_eq!(record.normal, Some(mesh.vertices[source].normal));
        }
    }

    #[test]
    fn test_material_resolution() {
        let objects = vec![
            SceneObject::mesh("Quad", quad_mesh()),
            SceneObject::mesh(
                "Bare",
                MeshData::new(quad_mesh().vertices, vec![Polygon::new([0, 1, 2])]),
            ),
            SceneObject::mesh(
                "OutOfRange",
                MeshData::new(
                    quad_mesh().vertices,
                    vec![Polygon::new([0, 1, 2]).with_material_index(4)],
                )
                .with_slot(Some("Red")),
            ),
        ];
        let walker = GeometryWalker::new(&objects, &all_visible);
        let materials: Vec<_> = walker.polygons().map(|p| p.unwrap().material).collect();

        // Filled slot, empty slot, no slots at all, index past the slot table
        assert_eq!(materials, vec![Some("Red"), None, None, None]);
    }

    #[test]
    fn test_visibility_filter() {
        let objects = vec![
            SceneObject::mesh("Shown", quad_mesh()),
            SceneObject::mesh("Hidden", quad_mesh()).with_visible(false),
            SceneObject::other("Lamp", ObjectKind::Light),
            SceneObject::mesh("Proxy", quad_mesh()),
        ];

        let walker = GeometryWalker::new(&objects, &all_visible);
        assert_eq!(walker.mesh_names().collect::<Vec<_>>(), vec!["Shown", "Proxy"]);
        assert_eq!(walker.polygon_count(), 4);

        let custom = |object: &SceneObject| !object.name.starts_with("Proxy");
        let walker = GeometryWalker::new(&objects, &custom);
        assert_eq!(walker.mesh_names().collect::<Vec<_>>(), vec!["Shown", "Hidden"]);
    }

    #[test]
    fn test_degenerate_polygon_is_error() {
        let mesh = MeshData::new(quad_mesh().vertices, vec![Polygon::new([0, 1])]);
        let objects = vec![SceneObject::mesh("Broken", mesh)];
        let walker = GeometryWalker::new(&objects, &all_visible);

        let first = walker.polygons().next();
        match first {
            Some(Err(ExportError::DegeneratePolygon { object, polygon, count })) => {
                assert_eq!(object, "Broken");
                assert_eq!(polygon, 0);
                assert_eq!(count, 2);
            }
            other => panic!("Expected degenerate polygon error, got {other:?}"),
        }
    }

    #[test]
    fn test_vertex_out_of_range_is_error() {
        let mesh = MeshData::new(quad_mesh().vertices, vec![Polygon::new([0, 1, 9])]);
        let objects = vec![SceneObject::mesh("Broken", mesh)];
        let walker = GeometryWalker::new(&objects, &all_visible);

        let first = walker.polygons().next();
        assert!(matches!(
            first,
            Some(Err(ExportError::VertexOutOfRange { index: 9, available: 4, .. }))
        ));
    }
}
