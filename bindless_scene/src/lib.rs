/*!
# Bindless Scene

CPU-side encoder for a bindless GPU scene buffer.

One fixed-capacity byte arena holds everything a frame needs: a header read
by shaders at fixed offsets, vertices, indices, indirect draw commands,
per-instance properties and lights. The renderer uploads the bytes once and
draws everything with a single `drawIndexedIndirectCount`.

## Architecture

- **SceneBuffer**: per-frame encoder enforcing the write order
- **Arena**: fixed-capacity byte storage with typed access
- **Mesh / MeshInstance**: geometry and placed copies of it
- **LightSet**: bounded light storage uploaded after the instances
- **FlyCamera**: view matrix and camera position for the header
- **FrameBudget**: exact capacity for a known frame shape

Windowing, device and pipeline work stay with the renderer. It sees the
encoder through `UploadTarget` and `DrawBindings`.
*/

// Internal modules
mod error;
pub mod log;
pub mod encoder;
pub mod geometry;
pub mod camera;
pub mod light;

// Main bindless namespace module
pub mod bindless {
    // Error types
    pub use crate::error::{Error, Result};

    // Encoder
    pub use crate::encoder::{
        SceneBuffer, SceneBufferConfig, FramePhase, MeshIndex, MeshRange, FrameBudget,
        DrawIndexedIndirectCommand, InstanceProperty, DrawBindings, UploadTarget,
    };

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Byte layout shared with shaders
    pub mod layout {
        pub use crate::encoder::layout::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Light sub-module
    pub mod light {
        pub use crate::light::*;
    }
}

// Re-export math library at crate root
pub use glam;
