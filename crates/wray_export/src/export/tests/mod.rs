//! End-to-end export tests over in-memory scenes


use crate::foundation::math::{AxisAngle, Color, Vec3};
use crate::scene::{Camera, Material, MemoryScene, MeshData, Polygon, SceneObject, Vertex};

/// Camera at (1,2,3) rotated a quarter turn around +Y
pub(super) fn reference_camera() -> Camera {
    Camera::new(Vec3::new(1.0, 2.0, 3.0), AxisAngle::from_wxyz([1.5708, 0.0, 1.0, 0.0]))
}

/// Three vertices spanning a unit right triangle in the XY plane
pub(super) fn triangle_vertices() -> Vec<Vertex> {
    vec![
        Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
    ]
}

/// One flat triangle using a lambertian "Red"
pub(super) fn red_triangle_scene() -> MemoryScene {
    let mesh = MeshData::new(triangle_vertices(), vec![Polygon::new([0, 1, 2])])
        .with_slot(Some("Red"));

    MemoryScene::new()
        .with_camera(reference_camera())
        .with_material(Material::new("Red", Color::new(1.0, 0.0, 0.0), 0.8))
        .with_object(SceneObject::mesh("Triangle", mesh))
}

/// Several meshes, materials of every kind, n-gons, smooth and flat shading
pub(super) fn mixed_scene() -> MemoryScene {
    let quad_vertices = vec![
        Vertex::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(-0.5, 0.7, -0.5)),
        Vertex::new(Vec3::new(1.0, 0.0, -1.0), Vec3::new(0.5, 0.7, -0.5)),
        Vertex::new(Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.5, 0.7, 0.5)),
        Vertex::new(Vec3::new(-1.0, 0.0, 1.0), Vec3::new(-0.5, 0.7, 0.5)),
        Vertex::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
    ];

    let pyramid = MeshData::new(
        quad_vertices,
        vec![
            Polygon::new([0, 1, 2, 3]).with_material_index(1),
            Polygon::new([0, 1, 4]).with_smooth(true),
            Polygon::new([1, 2, 4]).with_smooth(true),
            Polygon::new([2, 3, 4]).with_material_index(2),
            Polygon::new([3, 0, 4]).with_material_index(9),
        ],
    )
    .with_slot(Some("Mirror"))
    .with_slot(Some("Floor"))
    .with_slot(None);

    let lamp = MeshData::new(triangle_vertices(), vec![Polygon::new([2, 1, 0])])
        .with_slot(Some("Lamp"));
    let hidden = MeshData::new(triangle_vertices(), vec![Polygon::new([0, 1, 2])]);

    MemoryScene::new()
        .with_camera(reference_camera())
        .with_material(Material::new("Floor", Color::new(0.6, 0.6, 0.6), 0.7))
        .with_material(Material::new("Mirror", Color::new(1.0, 1.0, 1.0), 0.5).with_mirror(0.9))
        .with_material(Material::new("Lamp", Color::new(1.0, 0.9, 0.8), 0.8).with_emit(3.0))
        .with_material(
            Material::new("Both", Color::new(0.2, 0.2, 0.2), 0.8)
                .with_mirror(0.4)
                .with_emit(2.0),
        )
        .with_object(SceneObject::mesh("Pyramid", pyramid))
        .with_object(SceneObject::mesh("Hidden", hidden).with_visible(false))
        .with_object(SceneObject::mesh("Lamp", lamp))
}
