//! Mesh and vertex types.
//!
//! A `Mesh` is an immutable triangle list. Vertices are stored in the exact
//! layout the vertex shader reads from the scene buffer: a homogeneous
//! position followed by a flat-shaded normal.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use crate::error::Result;
use crate::scene_bail;

/// Index type used by every mesh (`VK_INDEX_TYPE_UINT32`)
pub type IndexType = u32;

// ===== VERTEX =====

/// GPU vertex: position (w = 1) and normal (w = 0).
///
/// 32 bytes, 16-byte aligned on the GPU side.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec4,
    pub normal: Vec4,
}

impl Vertex {
    /// Alignment the shader-side vertex struct requires
    pub const GPU_ALIGNMENT: usize = 16;

    /// Vertex at `position` with a zero normal
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            normal: Vec4::ZERO,
        }
    }

    /// Vertex at `position` with the given normal
    pub fn with_normal(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            normal: normal.extend(0.0),
        }
    }
}

// ===== MESH =====

/// Immutable triangle list
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<IndexType>,
}

impl Mesh {
    /// Build a flat-shaded mesh from positions and a triangle list.
    ///
    /// Each triangle's face normal is written to its three vertices. Where
    /// triangles share a vertex, the last triangle in index order wins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMesh` if the index count is not a multiple of 3 or an
    /// index points past the last position.
    pub fn from_positions(positions: &[Vec3], indices: Vec<IndexType>) -> Result<Self> {
        validate_triangle_list(positions.len(), &indices)?;
        Ok(Self::flat_shaded(positions, indices))
    }

    /// Build a mesh from ready-made vertices, keeping their normals.
    ///
    /// # Errors
    ///
    /// Same validation as [`Mesh::from_positions`].
    pub fn from_vertices(vertices: Vec<Vertex>, indices: Vec<IndexType>) -> Result<Self> {
        validate_triangle_list(vertices.len(), &indices)?;
        Ok(Self { vertices, indices })
    }

    /// Unit cube centred on the origin, one quad per face (24 vertices, 36 indices)
    pub fn cube() -> Self {
        const POSITIONS: [[f32; 3]; 24] = [
            // +Z face
            [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5],
            // -Z face
            [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5],
            // -X face
            [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5],
            // +X face
            [0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5],
            // +Y face
            [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5],
            // -Y face
            [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5],
        ];
        const INDICES: [IndexType; 36] = [
            0, 1, 2, 2, 3, 0,
            4, 7, 6, 6, 5, 4,
            8, 9, 10, 10, 11, 8,
            12, 13, 14, 14, 15, 12,
            16, 19, 18, 18, 17, 16,
            20, 21, 22, 22, 23, 20,
        ];

        let positions: Vec<Vec3> = POSITIONS.iter().map(|p| Vec3::from_array(*p)).collect();
        Self::flat_shaded(&positions, INDICES.to_vec())
    }

    /// Unit quad in the XZ plane facing +Y (4 vertices, 6 indices)
    pub fn plane() -> Self {
        let positions = [
            Vec3::new(0.5, 0.0, 0.5),
            Vec3::new(-0.5, 0.0, 0.5),
            Vec3::new(-0.5, 0.0, -0.5),
            Vec3::new(0.5, 0.0, -0.5),
        ];
        Self::flat_shaded(&positions, vec![0, 2, 1, 0, 3, 2])
    }

    // ===== ACCESSORS =====

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[IndexType] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    // ===== INTERNAL =====

    /// Caller guarantees `indices` is a valid triangle list over `positions`
    fn flat_shaded(positions: &[Vec3], indices: Vec<IndexType>) -> Self {
        let mut vertices: Vec<Vertex> = positions.iter().map(|p| Vertex::new(*p)).collect();

        for triangle in indices.chunks_exact(3) {
            let a = positions[triangle[0] as usize];
            let b = positions[triangle[1] as usize];
            let c = positions[triangle[2] as usize];
            let normal = (b - a).cross(c - a).normalize_or_zero().extend(0.0);

            for &index in triangle {
                vertices[index as usize].normal = normal;
            }
        }

        Self { vertices, indices }
    }
}

fn validate_triangle_list(vertex_count: usize, indices: &[IndexType]) -> Result<()> {
    if vertex_count > u32::MAX as usize {
        scene_bail!("bindless::Mesh", InvalidMesh,
            "{} vertices do not fit 32-bit indexing", vertex_count);
    }
    if indices.len() % 3 != 0 {
        scene_bail!("bindless::Mesh", InvalidMesh,
            "index count {} is not a multiple of 3", indices.len());
    }
    if let Some(position) = indices.iter().position(|&i| i as usize >= vertex_count) {
        scene_bail!("bindless::Mesh", InvalidMesh,
            "index {} at position {} is out of range (vertex count: {})",
            indices[position], position, vertex_count);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
