//! Rasterization primitives.
//!
//! Everything here draws into a [`Canvas`] passed in by exclusive reference;
//! no primitive keeps a reference past the call.

pub mod canvas;
pub mod line;
pub mod rasterizer;
pub mod triangle;
pub mod ybuffer;

pub use canvas::{Canvas, OutputError};
pub use line::{draw_line, draw_triangle_edges};
pub use rasterizer::{EdgeFunctionRasterizer, Rasterizer};
pub use triangle::{face_normal, BoundingBox, Triangle};
pub use ybuffer::{rasterize_segment, YBuffer};
