//! Checkerboard layout of mesh instances (floor tiles)

use glam::Vec3;
use super::instance::MeshInstance;

/// Grid parameters for [`make_checkerboard_plane`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerboardDesc {
    /// Centre of the grid; tiles spread in X and Z around it
    pub origin: Vec3,
    /// Distance between neighbouring tile centres
    pub tile_spacing: f32,
    /// Uniform scale applied to each tile
    pub tile_scale: f32,
    pub columns: u32,
    pub rows: u32,
}

impl Default for CheckerboardDesc {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            tile_spacing: 1.0,
            tile_scale: 1.0,
            columns: 1,
            rows: 1,
        }
    }
}

/// Lay out `columns × rows` copies of two templates as a checkerboard.
///
/// Tile `(row, column)` takes `even` when `(row + column) % 2 == 0`, `odd`
/// otherwise, keeping the template's rotation, color, id and index range.
/// Instances are returned in row-major order.
pub fn make_checkerboard_plane(
    desc: &CheckerboardDesc,
    even: &MeshInstance,
    odd: &MeshInstance,
) -> Vec<MeshInstance> {
    let half_width = (desc.columns.saturating_sub(1)) as f32 * desc.tile_spacing * 0.5;
    let half_depth = (desc.rows.saturating_sub(1)) as f32 * desc.tile_spacing * 0.5;

    let mut tiles = Vec::with_capacity(desc.columns as usize * desc.rows as usize);
    for row in 0..desc.rows {
        for column in 0..desc.columns {
            let template = if (row + column) % 2 == 0 { even } else { odd };
            let offset = Vec3::new(
                column as f32 * desc.tile_spacing - half_width,
                0.0,
                row as f32 * desc.tile_spacing - half_depth,
            );
            tiles.push(MeshInstance {
                position: desc.origin + offset,
                scale: Vec3::splat(desc.tile_scale),
                ..*template
            });
        }
    }
    tiles
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "checkerboard_tests.rs"]
mod tests;
