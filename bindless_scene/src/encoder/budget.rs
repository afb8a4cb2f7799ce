//! Frame budget: exact arena size for a known frame shape

use std::mem::size_of;
use crate::geometry::{IndexType, Mesh, Vertex};
use crate::light::Light;
use super::layout::{align_up, PROPERTIES_ALIGNMENT, VERTICES_OFFSET};
use super::records::{DrawIndexedIndirectCommand, InstanceProperty};

/// Element counts of one frame
///
/// `required_capacity` returns the logical size the encoder reaches after
/// `push_properties` for a frame with exactly these counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameBudget {
    pub vertices: usize,
    pub indices: usize,
    pub instance_commands: usize,
    pub instances: usize,
    pub lights: usize,
}

impl FrameBudget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one `push_mesh`
    pub fn add_mesh(&mut self, mesh: &Mesh) -> &mut Self {
        self.vertices += mesh.vertices().len();
        self.indices += mesh.indices().len();
        self
    }

    /// Account for one `push_instances_of` with `instance_count` instances
    pub fn add_batch(&mut self, instance_count: usize) -> &mut Self {
        self.instance_commands += 1;
        self.instances += instance_count;
        self
    }

    pub fn add_lights(&mut self, count: usize) -> &mut Self {
        self.lights += count;
        self
    }

    /// Bytes from the start of the header to the end of the light region
    pub fn required_capacity(&self) -> usize {
        let commands_end = VERTICES_OFFSET
            + self.vertices * size_of::<Vertex>()
            + self.indices * size_of::<IndexType>()
            + self.instance_commands * size_of::<DrawIndexedIndirectCommand>();

        align_up(commands_end, PROPERTIES_ALIGNMENT)
            + self.instances * size_of::<InstanceProperty>()
            + self.lights * size_of::<Light>()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
