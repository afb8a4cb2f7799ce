//! Mesh instance description consumed by `SceneBuffer::push_instances_of`

use glam::{Quat, Vec3, Vec4};
use super::mesh::Mesh;

/// One placed copy of a mesh.
///
/// `index_offset`/`index_count` select the sub-range of the mesh's own
/// indices to draw. Every instance of a batch must use the same sub-range.
/// An `id` of 0 asks the encoder to assign one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub color_blend: Vec4,
    pub id: u32,
    pub index_offset: u32,
    pub index_count: u32,
}

impl Default for MeshInstance {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            color_blend: Vec4::ZERO,
            id: 0,
            index_offset: 0,
            index_count: 0,
        }
    }
}

impl MeshInstance {
    /// Instance drawing every index of `mesh`
    pub fn covering(mesh: &Mesh) -> Self {
        Self {
            index_count: mesh.index_count(),
            ..Default::default()
        }
    }

    /// Instance drawing `index_count` indices starting at `index_offset`
    pub fn sub_range(index_offset: u32, index_count: u32) -> Self {
        Self {
            index_offset,
            index_count,
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color_blend(mut self, color_blend: Vec4) -> Self {
        self.color_blend = color_blend;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Whether both instances draw the same index sub-range
    pub fn same_range(&self, other: &MeshInstance) -> bool {
        self.index_offset == other.index_offset && self.index_count == other.index_count
    }

    /// One-past-the-end of the sub-range, in mesh-local indices
    pub(crate) fn range_end(&self) -> u64 {
        self.index_offset as u64 + self.index_count as u64
    }
}
