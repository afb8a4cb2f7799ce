//! Bindless scene buffer encoder.
//!
//! One arena holds a whole frame: header, vertices, indices, indirect draw
//! commands, instance properties and lights, written in that order.
//!
//! Frame sequence:
//! ```text
//! reset → push_mesh* → push_indices → push_instances_of* → push_properties → upload
//! ```
//! The sequence is enforced by `FramePhase`. A call in the wrong phase
//! returns `OutOfOrder`; any failing call leaves the encoder untouched.

use crate::error::{Error, Result, log_and_return_error};
use crate::{scene_bail, scene_debug, scene_trace, scene_warn};
use crate::camera::FlyCamera;
use crate::geometry::{IndexType, Mesh, MeshInstance, Vertex};
use crate::light::{Light, LightSet};
use super::arena::Arena;
use super::bindings::{DrawBindings, UploadTarget};
use super::budget::FrameBudget;
use super::layout::{
    align_up, CAMERA_POSITION_OFFSET, INSTANCE_COMMANDS_COUNT_OFFSET, PROPERTIES_ALIGNMENT,
    VERTICES_OFFSET,
};
use super::records::{DrawIndexedIndirectCommand, InstanceProperty};
use std::fmt;
use std::mem::size_of;

const SOURCE: &str = "bindless::SceneBuffer";

// ===== CONFIG =====

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneBufferConfig {
    /// Fixed arena size in bytes, header included
    pub capacity: usize,
    /// Maximum number of lights in the encoder's light set
    pub max_lights: usize,
}

impl Default for SceneBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 16 * 1024,
            max_lights: 10,
        }
    }
}

impl SceneBufferConfig {
    /// Config sized exactly for frames described by `budget`
    pub fn for_budget(budget: &FrameBudget) -> Self {
        Self {
            capacity: budget.required_capacity(),
            max_lights: budget.lights,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity < VERTICES_OFFSET {
            scene_bail!(SOURCE, InvalidConfig,
                "capacity {} is smaller than the {}-byte header", self.capacity, VERTICES_OFFSET);
        }
        Ok(())
    }
}

// ===== FRAME PHASE =====

/// Position of the encoder in the per-frame sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Right after `new` or `reset`
    Empty,
    /// At least one mesh pushed, index region not written yet
    MeshesPushed,
    /// Index region written, instance commands may follow
    IndicesFinalized,
    /// At least one instance command written
    InstancesPushed,
    /// Properties and lights written, buffer ready for upload
    PropertiesFinalized,
}

// ===== MESH HANDLES =====

/// Handle to a mesh pushed during the current frame (push order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshIndex(usize);

impl MeshIndex {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a pushed mesh landed in the vertex and index regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshRange {
    /// Vertices pushed before this mesh
    pub vertex_offset: u32,
    /// Pending indices queued before this mesh
    pub index_offset: u32,
    pub index_count: u32,
}

// ===== SCENE BUFFER =====

/// Frame encoder over a fixed-capacity arena
#[derive(Clone)]
pub struct SceneBuffer {
    pub(super) arena: Arena,
    phase: FramePhase,
    meshes: Vec<MeshRange>,
    pending_indices: Vec<IndexType>,
    pending_properties: Vec<InstanceProperty>,
    /// Instances covered by the commands written so far
    instance_count: u32,
    /// Last id handed out to an instance with id 0
    next_instance_id: u32,
    lights: LightSet,
}

impl SceneBuffer {
    /// Allocate the arena and start in the `Empty` phase with a zeroed header.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the capacity cannot hold the header.
    pub fn new(config: SceneBufferConfig) -> Result<Self> {
        config.validate()?;

        let mut arena = Arena::new(config.capacity);
        arena.rewind(VERTICES_OFFSET);

        scene_debug!(SOURCE, "Created scene buffer: {} bytes, up to {} lights",
            config.capacity, config.max_lights);

        Ok(Self {
            arena,
            phase: FramePhase::Empty,
            meshes: Vec::new(),
            pending_indices: Vec::new(),
            pending_properties: Vec::new(),
            instance_count: 0,
            next_instance_id: 0,
            lights: LightSet::new(config.max_lights),
        })
    }

    /// Start a new frame.
    ///
    /// Counters and offsets go back to zero. Camera position, view and
    /// projection matrices and the light set are kept. Storage is kept.
    pub fn reset(&mut self) {
        self.arena.zero(0..CAMERA_POSITION_OFFSET);
        self.arena.rewind(VERTICES_OFFSET);
        self.meshes.clear();
        self.pending_indices.clear();
        self.pending_properties.clear();
        self.instance_count = 0;
        self.next_instance_id = 0;
        self.phase = FramePhase::Empty;
    }

    // ===== FRAME SEQUENCE =====

    /// Append a mesh's vertices and queue its indices.
    ///
    /// Indices stay mesh-local; draw commands rebase them through
    /// `vertex_offset`.
    pub fn push_mesh(&mut self, mesh: &Mesh) -> Result<MeshIndex> {
        self.expect_phase("push_mesh", &[FramePhase::Empty, FramePhase::MeshesPushed])?;
        debug_assert_eq!(self.index_count(), 0, "push_mesh after the index region was written");

        let range = MeshRange {
            vertex_offset: self.vertex_count(),
            index_offset: self.pending_indices.len() as u32,
            index_count: mesh.index_count(),
        };

        self.arena.append::<Vertex>(mesh.vertices())
            .map_err(|e| log_and_return_error(SOURCE, e))?;
        self.set_vertex_count(range.vertex_offset + mesh.vertex_count());
        self.pending_indices.extend_from_slice(mesh.indices());
        self.meshes.push(range);
        self.phase = FramePhase::MeshesPushed;

        Ok(MeshIndex(self.meshes.len() - 1))
    }

    /// Write the queued indices of every pushed mesh as the index region
    pub fn push_indices(&mut self) -> Result<()> {
        self.expect_phase("push_indices", &[FramePhase::Empty, FramePhase::MeshesPushed])?;
        debug_assert_eq!(self.instance_commands_count(), 0,
            "push_indices after instance commands were written");

        let offset = self.arena.append::<IndexType>(&self.pending_indices)
            .map_err(|e| log_and_return_error(SOURCE, e))?;
        self.set_index_count(self.pending_indices.len() as u32);
        self.set_index_offset(offset as u32);
        self.set_instance_commands_offset(self.arena.len() as u32);
        self.phase = FramePhase::IndicesFinalized;
        Ok(())
    }

    /// Write one indirect draw command covering `instances` of a mesh and
    /// queue their properties.
    ///
    /// All instances must share one index sub-range lying inside the mesh.
    /// Instances with id 0 get the next per-frame id (1, 2, ...).
    pub fn push_instances_of(
        &mut self,
        mesh_index: MeshIndex,
        instances: &[MeshInstance],
    ) -> Result<DrawIndexedIndirectCommand> {
        self.expect_phase("push_instances_of",
            &[FramePhase::IndicesFinalized, FramePhase::InstancesPushed])?;

        let mesh = match self.meshes.get(mesh_index.0) {
            Some(mesh) => *mesh,
            None => {
                return Err(log_and_return_error(SOURCE, Error::UnknownMesh {
                    index: mesh_index.0,
                    mesh_count: self.meshes.len(),
                }));
            }
        };

        let Some(first) = instances.first() else {
            scene_bail!(SOURCE, InvalidInstanceBatch, "empty batch for mesh {}", mesh_index.0);
        };
        if let Some(position) = instances.iter().position(|i| !i.same_range(first)) {
            scene_bail!(SOURCE, InvalidInstanceBatch,
                "instance {} draws indices [{}, +{}) but the batch draws [{}, +{})",
                position, instances[position].index_offset, instances[position].index_count,
                first.index_offset, first.index_count);
        }
        if first.range_end() > mesh.index_count as u64 {
            scene_bail!(SOURCE, InvalidInstanceBatch,
                "indices [{}, +{}) outside mesh {} ({} indices)",
                first.index_offset, first.index_count, mesh_index.0, mesh.index_count);
        }
        let Ok(batch_size) = u32::try_from(instances.len()) else {
            scene_bail!(SOURCE, InvalidInstanceBatch, "{} instances in one batch", instances.len());
        };

        let command = DrawIndexedIndirectCommand {
            index_count: first.index_count,
            instance_count: batch_size,
            first_index: mesh.index_offset + first.index_offset,
            vertex_offset: mesh.vertex_offset as i32,
            first_instance: self.instance_count,
        };

        self.arena.append(std::slice::from_ref(&command))
            .map_err(|e| log_and_return_error(SOURCE, e))?;
        self.set_instance_commands_count(self.instance_commands_count() + 1);
        self.instance_count += batch_size;

        self.pending_properties.reserve(instances.len());
        for instance in instances {
            let id = if instance.id == 0 {
                self.next_instance_id += 1;
                self.next_instance_id
            } else {
                instance.id
            };
            self.pending_properties.push(InstanceProperty::from_instance(instance, id));
        }

        self.phase = FramePhase::InstancesPushed;
        Ok(command)
    }

    /// Write the instance properties (16-byte aligned) followed by the lights.
    ///
    /// Capacity for padding, properties and lights is checked up front.
    pub fn push_properties(&mut self) -> Result<()> {
        self.expect_phase("push_properties",
            &[FramePhase::IndicesFinalized, FramePhase::InstancesPushed])?;

        let padding = align_up(self.arena.len(), PROPERTIES_ALIGNMENT) - self.arena.len();
        let properties_size = self.pending_properties.len() * size_of::<InstanceProperty>();
        self.arena.ensure_available(padding + properties_size + self.lights.byte_size())
            .map_err(|e| log_and_return_error(SOURCE, e))?;

        let properties_offset = self.arena.pad_to(PROPERTIES_ALIGNMENT)?;
        self.arena.append(&self.pending_properties)?;
        let lights_offset = self.arena.len();
        for (_, light) in self.lights.iter() {
            self.arena.append::<Light>(std::slice::from_ref(light))?;
        }

        self.set_properties_offset(properties_offset as u32);
        self.set_lights_offset(lights_offset as u32);
        self.set_lights_count(self.lights.len() as u32);
        self.phase = FramePhase::PropertiesFinalized;

        if self.instance_count == 0 {
            scene_warn!(SOURCE, "Frame finalized with no instances, nothing will be drawn");
        }
        scene_trace!(SOURCE,
            "Frame encoded: {} vertices, {} indices, {} commands, {} instances, {} lights, {} bytes",
            self.vertex_count(), self.index_count(), self.instance_commands_count(),
            self.instance_count, self.lights.len(), self.arena.len());
        Ok(())
    }

    /// Send the encoded frame to `target` at offset 0
    pub fn upload(&self, target: &dyn UploadTarget) -> Result<()> {
        self.expect_phase("upload", &[FramePhase::PropertiesFinalized])?;
        target.update(0, self.data())
            .map_err(|e| log_and_return_error(SOURCE, e))
    }

    /// Offsets, counts and strides a renderer needs to bind and draw the frame
    pub fn draw_bindings(&self) -> Result<DrawBindings> {
        self.expect_phase("draw_bindings", &[FramePhase::PropertiesFinalized])?;

        Ok(DrawBindings {
            vertex_offset: VERTICES_OFFSET as u64,
            vertex_count: self.vertex_count(),
            vertex_stride: size_of::<Vertex>() as u32,
            property_offset: self.properties_offset() as u64,
            property_count: self.instance_count,
            property_stride: size_of::<InstanceProperty>() as u32,
            index_offset: self.index_offset() as u64,
            index_count: self.index_count(),
            command_offset: self.instance_commands_offset() as u64,
            command_count: self.instance_commands_count(),
            command_stride: size_of::<DrawIndexedIndirectCommand>() as u32,
            command_count_offset: INSTANCE_COMMANDS_COUNT_OFFSET as u64,
            light_offset: self.lights_offset() as u64,
            light_count: self.lights_count(),
        })
    }

    // ===== CAMERA =====

    /// Write the camera's view matrix and position into the header
    pub fn set_camera(&mut self, camera: &FlyCamera) {
        self.set_view_matrix(camera.view_matrix());
        self.set_camera_position(camera.position);
    }

    // ===== LIGHTS =====

    pub fn lights(&self) -> &LightSet {
        &self.lights
    }

    /// Lights are copied by the next `push_properties`
    pub fn lights_mut(&mut self) -> &mut LightSet {
        &mut self.lights
    }

    // ===== ACCESSORS =====

    /// Encoded bytes `[0, len)`
    pub fn data(&self) -> &[u8] {
        self.arena.as_bytes()
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.arena.as_ptr()
    }

    /// Logical size in bytes
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Never true: the header is always present
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Meshes pushed this frame
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn mesh_range(&self, mesh_index: MeshIndex) -> Option<MeshRange> {
        self.meshes.get(mesh_index.0).copied()
    }

    /// Instances covered by the commands pushed this frame
    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    // ===== INTERNAL =====

    fn expect_phase(&self, operation: &str, allowed: &[FramePhase]) -> Result<()> {
        if !allowed.contains(&self.phase) {
            scene_bail!(SOURCE, OutOfOrder,
                "{} not allowed in phase {:?} (expected one of {:?})",
                operation, self.phase, allowed);
        }
        Ok(())
    }
}

impl fmt::Debug for SceneBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneBuffer")
            .field("phase", &self.phase)
            .field("len", &self.arena.len())
            .field("capacity", &self.arena.capacity())
            .field("meshes", &self.meshes.len())
            .field("instances", &self.instance_count)
            .field("lights", &self.lights.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "scene_buffer_tests.rs"]
mod tests;
