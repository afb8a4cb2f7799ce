//! Free-flying camera.
//!
//! The camera only produces matrices. Input handling belongs to the caller,
//! which moves `position` and turns `pitch`/`yaw` between frames.

use glam::{Mat4, Quat, Vec3};

/// Camera described by a position and two Euler angles (radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Rotation about +X, positive looks up
    pub pitch: f32,
    /// Rotation about -Y, positive turns right
    pub yaw: f32,
}

impl FlyCamera {
    pub fn new(position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self { position, pitch, yaw }
    }

    // ===== MATRICES =====

    /// World-space orientation: yaw applied after pitch
    pub fn rotation_matrix(&self) -> Mat4 {
        let pitch_rotation = Quat::from_axis_angle(Vec3::X, self.pitch);
        let yaw_rotation = Quat::from_axis_angle(Vec3::NEG_Y, self.yaw);
        Mat4::from_quat(yaw_rotation) * Mat4::from_quat(pitch_rotation)
    }

    /// Inverse of the camera's world transform
    pub fn view_matrix(&self) -> Mat4 {
        (Mat4::from_translation(self.position) * self.rotation_matrix()).inverse()
    }

    // ===== MOVEMENT =====

    /// Direction the camera looks at (-Z rotated into world space)
    pub fn forward(&self) -> Vec3 {
        self.rotation_matrix().transform_vector3(Vec3::NEG_Z)
    }

    pub fn right(&self) -> Vec3 {
        self.rotation_matrix().transform_vector3(Vec3::X)
    }

    /// Move by `velocity` expressed in camera space
    pub fn translate_local(&mut self, velocity: Vec3) {
        self.position += self.rotation_matrix().transform_vector3(velocity);
    }
}

/// Right-handed perspective with reversed depth and Vulkan's downward Y.
///
/// `near` maps to depth 1, `far` to depth 0. Both must be positive.
pub fn reverse_z_perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let mut projection = Mat4::perspective_rh(fov_y, aspect, far, near);
    projection.y_axis.y = -projection.y_axis.y;
    projection
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "fly_camera_tests.rs"]
mod tests;
