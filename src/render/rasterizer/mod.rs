//! Triangle fill algorithms.
//!
//! [`Rasterizer`] is the seam between the model walker and the fill strategy,
//! so an alternative algorithm can be benchmarked against
//! [`EdgeFunctionRasterizer`] without touching the engine.

mod edgefunction;

pub use edgefunction::EdgeFunctionRasterizer;

use super::canvas::Canvas;
use super::triangle::Triangle;
use crate::colors::Color;

/// Trait for triangle rasterization algorithms.
pub trait Rasterizer {
    /// Fill a triangle into the canvas.
    ///
    /// Every covered pixel is set to `color`; uncovered pixels are left
    /// untouched. Implementations must never write outside the canvas.
    fn fill_triangle(&self, triangle: &Triangle, canvas: &mut Canvas, color: Color);
}
