//! Geometry module: meshes, mesh instances, and instance layouts.
//!
//! Meshes are immutable CPU-side triangle lists. They are packed into the
//! scene buffer once per frame by `SceneBuffer::push_mesh`.

mod mesh;
mod instance;
mod checkerboard;

pub use mesh::{Mesh, Vertex, IndexType};
pub use instance::MeshInstance;
pub use checkerboard::{CheckerboardDesc, make_checkerboard_plane};
