//! Encoder module: the scene buffer and its byte layout.
//!
//! - `layout`: header offsets shared with shaders
//! - `Arena`: fixed-capacity byte storage with typed access
//! - `SceneBuffer`: the per-frame encoder and header accessors
//! - `FrameBudget`: exact capacity for a frame shape
//! - `UploadTarget` / `DrawBindings`: renderer-facing interfaces

pub mod layout;
mod arena;
mod records;
mod scene_buffer;
mod header;
mod budget;
mod bindings;

pub use arena::Arena;
pub use records::{DrawIndexedIndirectCommand, InstanceProperty};
pub use scene_buffer::{SceneBuffer, SceneBufferConfig, FramePhase, MeshIndex, MeshRange};
pub use budget::FrameBudget;
pub use bindings::{DrawBindings, UploadTarget};
