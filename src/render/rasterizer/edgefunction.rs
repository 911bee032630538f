//! Bounding-box triangle fill driven by the edge-function inside test.
//!
//! The algorithm visits every pixel of the triangle's bounding box (clamped
//! to the canvas) and paints those for which [`Triangle::inside`] holds.
//! Pixels are sampled at their integer coordinates, with no coverage
//! weighting: a pixel is either fully painted or untouched.

use super::Rasterizer;
use crate::colors::Color;
use crate::math::Vec2i;
use crate::render::canvas::Canvas;
use crate::render::triangle::Triangle;

/// Triangle rasterizer using the edge function algorithm.
///
/// Degenerate (zero-area) triangles are not rejected up front; the inside
/// test then only accepts pixels lying on the collapsed triangle, so they
/// paint at most a thin line of pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, canvas: &mut Canvas, color: Color) {
        let bbox = triangle.bounding_box(canvas.width(), canvas.height());

        for y in bbox.min.y..=bbox.max.y {
            for x in bbox.min.x..=bbox.max.x {
                if triangle.inside(Vec2i::new(x, y)) {
                    canvas.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED};

    fn fill(triangle: Triangle, width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height, BLACK);
        EdgeFunctionRasterizer::new().fill_triangle(&triangle, &mut canvas, RED);
        canvas
    }

    #[test]
    fn test_fills_right_triangle() {
        let triangle = Triangle::new(Vec2i::new(0, 0), Vec2i::new(10, 0), Vec2i::new(0, 10));
        let canvas = fill(triangle, 20, 20);
        // Lattice points with x + y <= 10, x >= 0, y >= 0.
        assert_eq!(canvas.count_color(RED), 66);
        assert_eq!(canvas.get_pixel(1, 1), Some(RED));
        assert_eq!(canvas.get_pixel(5, 0), Some(RED));
        assert_eq!(canvas.get_pixel(9, 9), Some(BLACK));
    }

    #[test]
    fn test_fill_matches_inside_test() {
        let triangle = Triangle::new(Vec2i::new(3, 17), Vec2i::new(28, 4), Vec2i::new(14, 29));
        let canvas = fill(triangle, 32, 32);
        for y in 0..32 {
            for x in 0..32 {
                let expected = if triangle.inside(Vec2i::new(x, y)) { RED } else { BLACK };
                assert_eq!(canvas.get_pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_winding_does_not_matter() {
        let a = Vec2i::new(2, 2);
        let b = Vec2i::new(20, 5);
        let c = Vec2i::new(8, 18);
        let ccw = fill(Triangle::new(a, b, c), 24, 24);
        let cw = fill(Triangle::new(a, c, b), 24, 24);
        assert_eq!(ccw.count_color(RED), cw.count_color(RED));
        assert!(ccw.count_color(RED) > 0);
    }

    #[test]
    fn test_partially_off_canvas_is_clamped() {
        let triangle = Triangle::new(Vec2i::new(-50, -50), Vec2i::new(100, -50), Vec2i::new(-50, 100));
        let canvas = fill(triangle, 16, 16);
        // x + y <= 50 covers the whole 16x16 canvas.
        assert_eq!(canvas.count_color(RED), 16 * 16);
    }

    #[test]
    fn test_fully_off_canvas_paints_nothing() {
        let triangle = Triangle::new(Vec2i::new(40, 40), Vec2i::new(60, 40), Vec2i::new(50, 60));
        assert_eq!(fill(triangle, 16, 16).count_color(RED), 0);
    }

    #[test]
    fn test_collinear_triangle_does_not_panic() {
        let triangle = Triangle::new(Vec2i::new(1, 1), Vec2i::new(5, 5), Vec2i::new(9, 9));
        let canvas = fill(triangle, 16, 16);
        // Only the lattice points on the segment survive the inside test.
        assert_eq!(canvas.count_color(RED), 9);
    }

    #[test]
    fn test_point_triangle_paints_single_pixel() {
        let p = Vec2i::new(4, 6);
        let canvas = fill(Triangle::new(p, p, p), 16, 16);
        assert_eq!(canvas.count_color(RED), 1);
        assert_eq!(canvas.get_pixel(4, 6), Some(RED));
    }
}
