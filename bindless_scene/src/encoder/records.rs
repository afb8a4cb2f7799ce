//! GPU records written into the command and property regions

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3, Vec4};
use crate::geometry::MeshInstance;

/// Indexed indirect draw command (`VkDrawIndexedIndirectCommand`, 20 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct DrawIndexedIndirectCommand {
    pub index_count: u32,
    pub instance_count: u32,
    pub first_index: u32,
    pub vertex_offset: i32,
    pub first_instance: u32,
}

/// Per-instance record read by the vertex shader (std430, 80 bytes)
///
/// | offset | field |
/// |---|---|
/// | 0 | position (`vec3`) |
/// | 16 | rotation (`vec4` quaternion) |
/// | 32 | scale (`vec3`) |
/// | 48 | color blend (`vec4`) |
/// | 64 | id (`uint`) |
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceProperty {
    pub position: Vec3,
    _position_padding: f32,
    pub rotation: Quat,
    pub scale: Vec3,
    _scale_padding: f32,
    pub color_blend: Vec4,
    pub id: u32,
    _padding: [u32; 3],
}

impl InstanceProperty {
    pub const GPU_ALIGNMENT: usize = 16;

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3, color_blend: Vec4, id: u32) -> Self {
        Self {
            position,
            _position_padding: 0.0,
            rotation,
            scale,
            _scale_padding: 0.0,
            color_blend,
            id,
            _padding: [0; 3],
        }
    }

    /// Property for `instance`, tagged with an already-resolved id
    pub(crate) fn from_instance(instance: &MeshInstance, id: u32) -> Self {
        Self::new(instance.position, instance.rotation, instance.scale, instance.color_blend, id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
