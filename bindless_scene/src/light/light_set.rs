//! Light storage for the scene buffer.
//!
//! Lights live in a bounded SlotMap owned by the encoder. Like camera state
//! they survive `SceneBuffer::reset`; every `push_properties` copies the
//! whole set into the light region in iteration order.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result, log_and_return_error};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a Light within a LightSet.
    ///
    /// A key becomes invalid only when its own light is removed.
    pub struct LightKey;
}

// ===== LIGHT =====

/// GPU light record (144 bytes)
///
/// `transform` is the light's view matrix, `projection` its shadow
/// projection, `position` its world-space origin.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Light {
    pub transform: Mat4,
    pub projection: Mat4,
    pub position: Vec3,
    _padding: f32,
}

impl Light {
    pub fn new(transform: Mat4, projection: Mat4, position: Vec3) -> Self {
        Self {
            transform,
            projection,
            position,
            _padding: 0.0,
        }
    }

    /// Light at `position` looking at `target`
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3, projection: Mat4) -> Self {
        Self::new(Mat4::look_at_rh(position, target, up), projection, position)
    }
}

// ===== LIGHT SET =====

/// Bounded set of lights with stable keys
#[derive(Debug, Clone)]
pub struct LightSet {
    lights: SlotMap<LightKey, Light>,
    max_lights: usize,
}

impl LightSet {
    /// Empty set holding at most `max_lights` lights
    pub fn new(max_lights: usize) -> Self {
        Self {
            lights: SlotMap::with_capacity_and_key(max_lights),
            max_lights,
        }
    }

    /// Add a light.
    ///
    /// # Errors
    ///
    /// Returns `LightLimitReached` when the set is full.
    pub fn insert(&mut self, light: Light) -> Result<LightKey> {
        if self.lights.len() >= self.max_lights {
            return Err(log_and_return_error(
                "bindless::LightSet",
                Error::LightLimitReached(self.max_lights),
            ));
        }
        Ok(self.lights.insert(light))
    }

    /// Remove a light, returning it if the key was live
    pub fn remove(&mut self, key: LightKey) -> Option<Light> {
        self.lights.remove(key)
    }

    pub fn get(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    pub fn get_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }

    pub fn contains(&self, key: LightKey) -> bool {
        self.lights.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Maximum number of lights
    pub fn capacity(&self) -> usize {
        self.max_lights
    }

    /// Lights in upload order
    pub fn iter(&self) -> impl Iterator<Item = (LightKey, &Light)> {
        self.lights.iter()
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Bytes the set occupies in the light region
    pub fn byte_size(&self) -> usize {
        self.lights.len() * std::mem::size_of::<Light>()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "light_set_tests.rs"]
mod tests;
