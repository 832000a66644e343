//! Rendering module
//!
//! `scene` decides what is drawn and where; `shapes` turns that into colored
//! triangles; `pipeline` pushes them through wgpu.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::{DrawCommand, Scene, bird_rotation, compose};
pub use shapes::tessellate;
pub use vertex::Vertex;
