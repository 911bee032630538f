//! Single-pixel-wide line drawing.

use super::canvas::Canvas;
use crate::colors::Color;
use crate::math::Vec2i;

/// Draws a line from `p0` to `p1` using Bresenham's integer algorithm.
///
/// The line is always walked along its major axis (the axis with the greater
/// extent), one pixel per step, so steep lines have no gaps. Steep lines are
/// handled by transposing x and y for the walk and transposing back when
/// plotting. Endpoints are ordered so the walk runs toward increasing major
/// coordinate, which makes `draw_line(a, b)` and `draw_line(b, a)` paint the
/// same pixels.
///
/// A zero-length line plots exactly one pixel. Coordinates are not clamped;
/// off-canvas pixels are dropped by [`Canvas::set_pixel`]. Deltas are worked
/// out in `i64` and the walk starts at the first major coordinate on the
/// canvas, so endpoints anywhere in the `i32` range are fine.
pub fn draw_line(p0: Vec2i, p1: Vec2i, canvas: &mut Canvas, color: Color) {
    let steep =
        (i64::from(p1.y) - i64::from(p0.y)).abs() > (i64::from(p1.x) - i64::from(p0.x)).abs();

    // Walk along x in transposed space for steep lines.
    let (mut start, mut end) = if steep {
        (p0.transposed(), p1.transposed())
    } else {
        (p0, p1)
    };
    if start.x > end.x {
        std::mem::swap(&mut start, &mut end);
    }

    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);

    // Error is kept doubled so every comparison stays in integers.
    let error_step = dy.abs() * 2;
    let y_step = if dy > 0 { 1 } else { -1 };

    let major_extent = if steep { canvas.height() } else { canvas.width() };
    let first = start.x.max(0);
    let last = end.x.min(i32::try_from(major_extent).unwrap_or(i32::MAX) - 1);
    if first > last {
        return;
    }

    let skipped = i64::from(first) - i64::from(start.x);
    let (minor_steps, mut error) = skip_ahead(skipped, dx, error_step);
    let mut y = i64::from(start.y) + y_step * minor_steps;

    for x in first..=last {
        if let Ok(minor) = i32::try_from(y) {
            if steep {
                canvas.set_pixel(minor, x, color);
            } else {
                canvas.set_pixel(x, minor, color);
            }
        }

        error += error_step;
        if error > dx {
            y += y_step;
            error -= dx * 2;
        }
    }
}

/// Minor-axis steps taken and the error term left after `steps` iterations
/// of the walk, without running them.
///
/// After `k` iterations the walk has stepped the minor axis the smallest
/// `m` with `k * error_step - 2 * m * dx <= dx`.
fn skip_ahead(steps: i64, dx: i64, error_step: i64) -> (i64, i64) {
    let accumulated = i128::from(steps) * i128::from(error_step);
    let excess = accumulated - i128::from(dx);
    let period = 2 * i128::from(dx);
    let minor_steps = if excess <= 0 {
        0
    } else {
        (excess + period - 1) / period
    };
    (minor_steps as i64, (accumulated - minor_steps * period) as i64)
}

/// Outline a triangle by drawing its three edges.
pub fn draw_triangle_edges(points: [Vec2i; 3], canvas: &mut Canvas, color: Color) {
    let [p0, p1, p2] = points;
    draw_line(p0, p1, canvas, color);
    draw_line(p1, p2, canvas, color);
    draw_line(p2, p0, canvas, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    fn painted(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get_pixel(x, y) == Some(WHITE) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    fn line_pixels(p0: Vec2i, p1: Vec2i) -> Vec<(i32, i32)> {
        let mut canvas = Canvas::new(32, 32, BLACK);
        draw_line(p0, p1, &mut canvas, WHITE);
        painted(&canvas)
    }

    #[test]
    fn test_point_line_plots_one_pixel() {
        for p in [Vec2i::new(0, 0), Vec2i::new(5, 7), Vec2i::new(31, 31)] {
            assert_eq!(line_pixels(p, p), vec![(p.x, p.y)]);
        }
    }

    #[test]
    fn test_horizontal_line() {
        let pixels = line_pixels(Vec2i::new(2, 4), Vec2i::new(6, 4));
        assert_eq!(pixels, vec![(2, 4), (3, 4), (4, 4), (5, 4), (6, 4)]);
    }

    #[test]
    fn test_vertical_line_has_no_gaps() {
        let pixels = line_pixels(Vec2i::new(3, 1), Vec2i::new(3, 9));
        assert_eq!(pixels.len(), 9);
        assert!(pixels.iter().all(|&(x, _)| x == 3));
    }

    #[test]
    fn test_diagonal_line() {
        let pixels = line_pixels(Vec2i::new(0, 0), Vec2i::new(4, 4));
        assert_eq!(pixels, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_one_pixel_per_major_step() {
        // Shallow: one pixel per column. Steep: one pixel per row.
        let shallow = line_pixels(Vec2i::new(1, 2), Vec2i::new(21, 9));
        assert_eq!(shallow.len(), 21);
        let steep = line_pixels(Vec2i::new(4, 1), Vec2i::new(10, 25));
        assert_eq!(steep.len(), 25);
        for row in 1..=25 {
            assert_eq!(steep.iter().filter(|&&(_, y)| y == row).count(), 1);
        }
    }

    #[test]
    fn test_reversed_line_paints_same_pixels() {
        let cases = [
            (Vec2i::new(0, 0), Vec2i::new(13, 5)),
            (Vec2i::new(2, 30), Vec2i::new(9, 1)),
            (Vec2i::new(30, 3), Vec2i::new(1, 17)),
            (Vec2i::new(5, 5), Vec2i::new(25, 25)),
            (Vec2i::new(20, 8), Vec2i::new(3, 8)),
            (Vec2i::new(7, 29), Vec2i::new(7, 2)),
        ];
        for (a, b) in cases {
            assert_eq!(line_pixels(a, b), line_pixels(b, a), "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_endpoints_are_painted() {
        let (a, b) = (Vec2i::new(30, 3), Vec2i::new(1, 17));
        let pixels = line_pixels(a, b);
        assert!(pixels.contains(&(a.x, a.y)));
        assert!(pixels.contains(&(b.x, b.y)));
    }

    #[test]
    fn test_off_canvas_line_does_not_panic() {
        let mut canvas = Canvas::new(8, 8, BLACK);
        draw_line(Vec2i::new(-5, -5), Vec2i::new(12, 12), &mut canvas, WHITE);
        assert_eq!(painted(&canvas).len(), 8);
    }

    #[test]
    fn test_skipping_ahead_matches_walking() {
        // Same pixels whether the walk starts on canvas or far off it.
        let mut on_canvas = Canvas::new(32, 32, BLACK);
        draw_line(Vec2i::new(0, 3), Vec2i::new(31, 20), &mut on_canvas, WHITE);

        let mut shifted = Canvas::new(32, 32, BLACK);
        draw_line(Vec2i::new(-31, -14), Vec2i::new(31, 20), &mut shifted, WHITE);
        let mut expected = Canvas::new(32, 32, BLACK);
        let mut x = -31;
        let mut y = -14;
        let (dx, dy) = (62, 34);
        let mut error = 0;
        while x <= 31 {
            expected.set_pixel(x, y, WHITE);
            error += dy * 2;
            if error > dx {
                y += 1;
                error -= dx * 2;
            }
            x += 1;
        }
        assert_eq!(painted(&shifted), painted(&expected));
        assert_eq!(painted(&on_canvas).len(), 32);
    }

    #[test]
    fn test_extreme_endpoints_do_not_overflow() {
        let mut canvas = Canvas::new(16, 16, BLACK);
        draw_line(Vec2i::new(0, 0), Vec2i::new(i32::MAX, i32::MAX), &mut canvas, WHITE);
        assert_eq!(painted(&canvas).len(), 16);
        assert_eq!(canvas.get_pixel(15, 15), Some(WHITE));

        let mut canvas = Canvas::new(16, 16, BLACK);
        draw_line(Vec2i::new(i32::MIN, 3), Vec2i::new(i32::MAX, 3), &mut canvas, WHITE);
        assert_eq!(painted(&canvas), (0..16).map(|x| (x, 3)).collect::<Vec<_>>());

        let mut canvas = Canvas::new(16, 16, BLACK);
        draw_line(Vec2i::new(5, i32::MIN), Vec2i::new(5, i32::MAX), &mut canvas, WHITE);
        assert_eq!(painted(&canvas).len(), 16);
    }

    #[test]
    fn test_triangle_edges() {
        let mut canvas = Canvas::new(16, 16, BLACK);
        draw_triangle_edges(
            [Vec2i::new(0, 0), Vec2i::new(10, 0), Vec2i::new(0, 10)],
            &mut canvas,
            WHITE,
        );
        assert_eq!(canvas.get_pixel(5, 0), Some(WHITE));
        assert_eq!(canvas.get_pixel(0, 5), Some(WHITE));
        assert_eq!(canvas.get_pixel(5, 5), Some(WHITE));
        assert_eq!(canvas.get_pixel(2, 2), Some(BLACK));
    }
}
