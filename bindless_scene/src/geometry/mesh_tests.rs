use super::*;
use crate::error::Error;

const EPSILON: f32 = 1e-6;

fn quad_positions() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ]
}

// ============================================================================
// Vertex tests
// ============================================================================

#[test]
fn test_vertex_layout() {
    assert_eq!(std::mem::size_of::<Vertex>(), 32);
    assert_eq!(Vertex::GPU_ALIGNMENT, 16);
}

#[test]
fn test_vertex_homogeneous_coordinates() {
    let v = Vertex::with_normal(Vec3::new(1.0, 2.0, 3.0), Vec3::Y);
    assert_eq!(v.position, Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(v.normal, Vec4::new(0.0, 1.0, 0.0, 0.0));

    let bare = Vertex::new(Vec3::ONE);
    assert_eq!(bare.normal, Vec4::ZERO);
}

// ============================================================================
// Construction / validation tests
// ============================================================================

#[test]
fn test_from_positions_counts() {
    let mesh = Mesh::from_positions(&quad_positions(), vec![0, 1, 2, 2, 3, 0]).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.index_count(), 6);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.indices(), &[0, 1, 2, 2, 3, 0]);
}

#[test]
fn test_index_count_not_multiple_of_three_fails() {
    let result = Mesh::from_positions(&quad_positions(), vec![0, 1, 2, 3]);
    assert!(matches!(result, Err(Error::InvalidMesh(_))));
}

#[test]
fn test_index_out_of_range_fails() {
    let result = Mesh::from_positions(&quad_positions(), vec![0, 1, 4]);
    match result {
        Err(Error::InvalidMesh(msg)) => assert!(msg.contains("index 4")),
        other => panic!("expected InvalidMesh, got {:?}", other),
    }
}

#[test]
fn test_empty_mesh_is_valid() {
    let mesh = Mesh::from_positions(&[], vec![]).unwrap();
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.index_count(), 0);
}

#[test]
fn test_from_vertices_keeps_normals() {
    let vertices = vec![
        Vertex::with_normal(Vec3::ZERO, Vec3::X),
        Vertex::with_normal(Vec3::X, Vec3::X),
        Vertex::with_normal(Vec3::Y, Vec3::X),
    ];
    let mesh = Mesh::from_vertices(vertices.clone(), vec![0, 1, 2]).unwrap();
    assert_eq!(mesh.vertices(), vertices.as_slice());
}

#[test]
fn test_from_vertices_validates() {
    let vertices = vec![Vertex::new(Vec3::ZERO)];
    assert!(Mesh::from_vertices(vertices, vec![0, 0]).is_err());
}

// ============================================================================
// Flat normal tests
// ============================================================================

#[test]
fn test_flat_normals_counter_clockwise_faces_positive_z() {
    let mesh = Mesh::from_positions(&quad_positions(), vec![0, 1, 2, 2, 3, 0]).unwrap();
    for vertex in mesh.vertices() {
        assert!((vertex.normal - Vec4::new(0.0, 0.0, 1.0, 0.0)).length() < EPSILON);
    }
}

#[test]
fn test_flat_normals_last_triangle_wins_on_shared_vertices() {
    // Triangle A lies in z = 0 (normal +Z), triangle B folds up into x = 1 (normal -X)
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    let mesh = Mesh::from_positions(&positions, vec![0, 1, 2, 1, 3, 2]).unwrap();
    let normals: Vec<Vec4> = mesh.vertices().iter().map(|v| v.normal).collect();

    // Only triangle A touches vertex 0
    assert!((normals[0] - Vec4::Z).length() < EPSILON);
    // Vertices 1 and 2 are shared; triangle B was written last
    let b = (positions[3] - positions[1]).cross(positions[2] - positions[1]).normalize();
    assert!((normals[1] - b.extend(0.0)).length() < EPSILON);
    assert!((normals[2] - b.extend(0.0)).length() < EPSILON);
    assert!((normals[3] - b.extend(0.0)).length() < EPSILON);
}

#[test]
fn test_degenerate_triangle_gets_zero_normal() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0];
    let mesh = Mesh::from_positions(&positions, vec![0, 1, 2]).unwrap();
    assert!(mesh.vertices().iter().all(|v| v.normal == Vec4::ZERO));
}

// ============================================================================
// Built-in mesh tests
// ============================================================================

#[test]
fn test_cube_counts() {
    let cube = Mesh::cube();
    assert_eq!(cube.vertex_count(), 24);
    assert_eq!(cube.index_count(), 36);
    assert!(cube.indices().iter().all(|&i| i < 24));
}

#[test]
fn test_cube_normals_point_outward() {
    let cube = Mesh::cube();
    for vertex in cube.vertices() {
        let normal = vertex.normal.truncate();
        assert!((normal.length() - 1.0).abs() < EPSILON);
        // Every vertex sits on its face at distance 0.5 along the normal
        assert!((vertex.position.truncate().dot(normal) - 0.5).abs() < EPSILON);
    }
}

#[test]
fn test_cube_first_face_is_positive_z() {
    let cube = Mesh::cube();
    for vertex in &cube.vertices()[0..4] {
        assert!((vertex.normal - Vec4::Z).length() < EPSILON);
    }
}

#[test]
fn test_plane_faces_up() {
    let plane = Mesh::plane();
    assert_eq!(plane.vertex_count(), 4);
    assert_eq!(plane.index_count(), 6);
    for vertex in plane.vertices() {
        assert!((vertex.normal - Vec4::Y).length() < EPSILON);
        assert_eq!(vertex.position.y, 0.0);
        assert_eq!(vertex.position.w, 1.0);
    }
}
