//! Fixed byte layout of the scene buffer header.
//!
//! These offsets are shared with the shaders that read the buffer. Changing
//! any of them requires the matching shader change.

use glam::Mat4;
use std::mem::size_of;
use crate::geometry::Vertex;
use super::records::InstanceProperty;

/// Stride between 4-byte header fields
pub const HEADER_FIELD_STRIDE: usize = 4;

pub const VERTEX_COUNT_OFFSET: usize = 0;
pub const INDEX_COUNT_OFFSET: usize = 4;
pub const INDEX_OFFSET_OFFSET: usize = 8;
pub const MATERIAL_COUNT_OFFSET: usize = 12;
pub const INSTANCE_COMMANDS_COUNT_OFFSET: usize = 16;
pub const INSTANCE_COMMANDS_OFFSET_OFFSET: usize = 20;
pub const PROPERTIES_OFFSET_OFFSET: usize = 24;
pub const LIGHTS_COUNT_OFFSET: usize = 28;
pub const LIGHTS_OFFSET_OFFSET: usize = 32;
pub const TEXTURE_COUNT_OFFSET: usize = 36;
pub const MIRROR_COUNT_OFFSET: usize = 40;

/// View matrix, followed by the projection matrix
pub const CAMERAS_OFFSET: usize = 64;
/// Camera position, 12 bytes padded to 16, right before the matrices
pub const CAMERA_POSITION_OFFSET: usize = CAMERAS_OFFSET - 16;
pub const VIEW_MATRIX_OFFSET: usize = CAMERAS_OFFSET;
pub const PROJ_MATRIX_OFFSET: usize = CAMERAS_OFFSET + size_of::<Mat4>();

/// First byte of vertex data
pub const VERTICES_OFFSET: usize = 256;

/// Alignment of the instance-property region, taken from the record itself
pub const PROPERTIES_ALIGNMENT: usize = InstanceProperty::GPU_ALIGNMENT;

const _: () = assert!(MIRROR_COUNT_OFFSET + HEADER_FIELD_STRIDE <= CAMERA_POSITION_OFFSET);
const _: () = assert!(VERTICES_OFFSET >= CAMERAS_OFFSET + 2 * size_of::<Mat4>());
const _: () = assert!(VERTICES_OFFSET % Vertex::GPU_ALIGNMENT == 0);
const _: () = assert!(size_of::<InstanceProperty>() % PROPERTIES_ALIGNMENT == 0);

/// Round `value` up to the next multiple of `alignment` (a power of two)
pub const fn align_up(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) & !(alignment - 1)
}
