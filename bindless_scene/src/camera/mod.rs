//! Camera module: fly camera and projection helpers feeding the header

mod fly_camera;

pub use fly_camera::{FlyCamera, reverse_z_perspective};
