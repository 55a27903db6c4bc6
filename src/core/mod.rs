//! Platform-free core: scene layout, interaction state and asset decoding.
//!
//! Nothing in here touches the DOM or the GPU, so the host-side tests can
//! pull these files in directly.

/// Stop/schedule bookkeeping for the animation-frame loop.
pub mod animation;
/// Loaded resources and their readiness. Every asynchronously loaded
/// resource is tracked as a [`ResourceState`] so commands and the renderer
/// can ask whether it is usable yet instead of racing the load.
pub mod assets;
/// Perspective camera; orientation is kept as a look-at target.
pub mod camera;
pub mod constants;
/// Projector power, the selected slide and the latest scroll position,
/// applied to the owned [`Scene`]. The controller is the only thing that
/// mutates the scene after assembly.
pub mod controller;
/// CPU-side mesh data and primitive builders.
pub mod geometry;
/// Scene description: camera, lights and meshes. [`assemble`] builds the
/// static layout once.
pub mod scene;
pub mod scroll;
pub mod viewport;

pub use animation::*;
pub use assets::*;
pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use scene::*;
pub use scroll::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
