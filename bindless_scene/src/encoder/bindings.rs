//! Interfaces between the encoder and the renderer that consumes it

use crate::error::Result;

/// GPU-visible destination for an encoded frame
///
/// Implemented by the renderer's host-visible buffer (or a staging copy).
/// The encoder calls [`UploadTarget::update`] once per frame with the whole
/// logical byte range at offset 0.
pub trait UploadTarget: Send + Sync {
    /// Copy `data` into the target starting at byte `offset`
    ///
    /// Return `Error::UploadFailed` if the data does not fit or the device
    /// rejects the write.
    fn update(&self, offset: u64, data: &[u8]) -> Result<()>;
}

/// Everything a renderer needs to bind the scene buffer and issue
/// `drawIndexedIndirectCount`
///
/// Offsets are bytes from the start of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBindings {
    /// Vertex buffer binding 0 (per vertex)
    pub vertex_offset: u64,
    pub vertex_count: u32,
    pub vertex_stride: u32,

    /// Vertex buffer binding 1 (per instance)
    pub property_offset: u64,
    pub property_count: u32,
    pub property_stride: u32,

    /// Index buffer binding (`u32` indices)
    pub index_offset: u64,
    pub index_count: u32,

    /// Indirect command array
    pub command_offset: u64,
    pub command_count: u32,
    pub command_stride: u32,

    /// Header field holding the command count, used as the count buffer
    pub command_count_offset: u64,

    pub light_offset: u64,
    pub light_count: u32,
}
