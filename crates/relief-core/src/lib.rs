pub mod camera;
pub mod constants;
pub mod controls;
pub mod error;
pub mod frame;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod heightmap;
pub mod math;
pub mod mesh;
pub mod scene;

pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use error::ReliefError;
pub use frame::{FrameInputs, FrameMatrices, FrameUniforms};
pub use heightmap::*;
pub use mesh::*;
pub use scene::*;

// Shaders bundled as string constants
pub static TERRAIN_WGSL: &str = include_str!("../shaders/terrain.wgsl");
