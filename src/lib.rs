//! A small CPU rasterizer for triangle meshes.
//!
//! Meshes are drawn with nothing but lines and bounding-box triangle fills:
//! there is no projection, clipping or depth buffer. Faces are flat shaded
//! against a single directional light and faces turned away from it are
//! culled. A per-column "y-buffer" offers a one-dimensional visibility test
//! for 2D segments.
//!
//! # Quick Start
//!
//! ```no_run
//! use tinyraster::prelude::*;
//!
//! let mut engine = Engine::new(RenderConfig::default());
//! engine.render_model(&Mesh::cube());
//!
//! let mut canvas = engine.into_canvas();
//! canvas.flip_vertically();
//! canvas.save("out/output.tga")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod light;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use config::{ConfigError, RenderConfig};
pub use engine::{Engine, RenderStats};
pub use light::{DirectionalLight, FaceShade, FillStyle};
pub use mesh::{LoadError, Mesh, MeshSource};
pub use render::{Canvas, OutputError};
pub use scene::Scene;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use tinyraster::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::RenderConfig;
    pub use crate::engine::{Engine, RenderStats};

    // Geometry
    pub use crate::mesh::{Mesh, MeshSource};
    pub use crate::scene::Scene;

    // Math
    pub use crate::math::{Vec2i, Vec3};

    // Rendering
    pub use crate::colors::Color;
    pub use crate::light::{DirectionalLight, FaceShade, FillStyle};
    pub use crate::render::{Canvas, Triangle, YBuffer};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        draw_line, rasterize_segment, Canvas, EdgeFunctionRasterizer, Rasterizer, Triangle,
        YBuffer,
    };
}
