//! Light module: shadow-casting lights uploaded after the instance properties

mod light_set;

pub use light_set::{Light, LightKey, LightSet};
