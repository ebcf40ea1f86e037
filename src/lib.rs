//! A minimal CPU flat-shading renderer for triangular OBJ meshes.
//!
//! The crate parses a Wavefront-style model file into an immutable
//! [`Model`], projects each triangle onto a caller-owned BGRA pixel
//! buffer with a simple orthographic screen mapping, and fills it with
//! grayscale flat shading from a fixed directional light. SDL2 is used
//! only to create the window and present the buffer; every pixel is
//! produced on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use faceted::prelude::*;
//!
//! let mut engine = Engine::new(1024, 768);
//! engine.load_model("body.obj")?;
//!
//! let mut pixels = vec![0u8; 1024 * 768 * BYTES_PER_PIXEL];
//! engine.render(&mut pixels);
//! ```

pub mod colors;
pub mod engine;
pub mod face;
pub mod light;
pub mod math;
pub mod model;
pub mod render;
pub mod sequence;
pub mod viewport;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use engine::{Engine, RenderMode};
pub use model::{LoadError, Model};
pub use render::{DrawError, FrameBuffer, ScanlineRasterizer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use faceted::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colors::Color;
    pub use crate::engine::{Engine, RenderMode};
    pub use crate::face::Face;
    pub use crate::light::DirectionalLight;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::model::{LoadError, Model};
    pub use crate::render::{DrawError, FrameBuffer, ScanlineRasterizer, BYTES_PER_PIXEL};
    pub use crate::viewport::{ScreenPoint, Viewport};
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
