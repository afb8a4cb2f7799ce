//! Typed accessors for the scene buffer header.
//!
//! Each accessor reads or writes one fixed-offset field through the arena.
//! Fields are independent: setters do no cross-field validation.

use glam::{Mat4, Vec3};
use super::layout::*;
use super::scene_buffer::SceneBuffer;

/// Generate a getter/setter pair for a `u32` header field
macro_rules! header_u32 {
    ($($(#[$doc:meta])* $getter:ident, $setter:ident => $offset:expr;)*) => {
        impl SceneBuffer {
            $(
                $(#[$doc])*
                pub fn $getter(&self) -> u32 {
                    self.arena.read::<u32>($offset)
                }

                $(#[$doc])*
                pub fn $setter(&mut self, value: u32) {
                    self.arena.write::<u32>($offset, &value);
                }
            )*
        }
    };
}

header_u32! {
    /// Vertices in the vertex region
    vertex_count, set_vertex_count => VERTEX_COUNT_OFFSET;
    /// Indices in the index region
    index_count, set_index_count => INDEX_COUNT_OFFSET;
    /// Byte offset of the index region
    index_offset, set_index_offset => INDEX_OFFSET_OFFSET;
    material_count, set_material_count => MATERIAL_COUNT_OFFSET;
    /// Indirect draw commands written; doubles as the draw count buffer
    instance_commands_count, set_instance_commands_count => INSTANCE_COMMANDS_COUNT_OFFSET;
    /// Byte offset of the first indirect draw command
    instance_commands_offset, set_instance_commands_offset => INSTANCE_COMMANDS_OFFSET_OFFSET;
    /// Byte offset of the instance-property region (16-byte aligned)
    properties_offset, set_properties_offset => PROPERTIES_OFFSET_OFFSET;
    lights_count, set_lights_count => LIGHTS_COUNT_OFFSET;
    /// Byte offset of the light region
    lights_offset, set_lights_offset => LIGHTS_OFFSET_OFFSET;
    texture_count, set_texture_count => TEXTURE_COUNT_OFFSET;
    mirror_count, set_mirror_count => MIRROR_COUNT_OFFSET;
}

impl SceneBuffer {
    // ===== CAMERA STATE =====

    pub fn view_matrix(&self) -> Mat4 {
        self.arena.read::<Mat4>(VIEW_MATRIX_OFFSET)
    }

    pub fn set_view_matrix(&mut self, view: Mat4) {
        self.arena.write(VIEW_MATRIX_OFFSET, &view);
    }

    pub fn proj_matrix(&self) -> Mat4 {
        self.arena.read::<Mat4>(PROJ_MATRIX_OFFSET)
    }

    pub fn set_proj_matrix(&mut self, projection: Mat4) {
        self.arena.write(PROJ_MATRIX_OFFSET, &projection);
    }

    /// World-space camera position (12 bytes, 4 bytes of padding follow)
    pub fn camera_position(&self) -> Vec3 {
        self.arena.read::<Vec3>(CAMERA_POSITION_OFFSET)
    }

    pub fn set_camera_position(&mut self, position: Vec3) {
        self.arena.write(CAMERA_POSITION_OFFSET, &position);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
