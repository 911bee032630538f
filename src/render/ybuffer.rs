//! Per-column visibility for 2D segments.
//!
//! A [`YBuffer`] stores, for every canvas column, the highest elevation drawn
//! so far. Segments are treated as height functions over x: a column is only
//! painted when the segment rises strictly above what the buffer already
//! holds there. This is the one-dimensional analogue of a depth buffer and is
//! only meaningful for segments that are single-valued functions of x.

use super::canvas::Canvas;
use crate::colors::Color;
use crate::math::Vec2i;

/// Elevation of a column nothing has been drawn in.
pub const EMPTY_ELEVATION: i32 = i32::MIN;

pub struct YBuffer {
    elevations: Vec<i32>,
    visible: Vec<Option<Color>>,
}

impl YBuffer {
    pub fn new(width: u32) -> Self {
        Self {
            elevations: vec![EMPTY_ELEVATION; width as usize],
            visible: vec![None; width as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.elevations.len() as u32
    }

    /// Forget everything drawn, ready for a new scene.
    pub fn reset(&mut self) {
        self.elevations.fill(EMPTY_ELEVATION);
        self.visible.fill(None);
    }

    /// Highest elevation recorded at column `x`, or `None` outside the buffer.
    pub fn elevation(&self, x: i32) -> Option<i32> {
        usize::try_from(x)
            .ok()
            .and_then(|x| self.elevations.get(x))
            .copied()
    }

    /// Color of the segment currently visible at column `x`.
    pub fn visible_color(&self, x: i32) -> Option<Color> {
        usize::try_from(x)
            .ok()
            .and_then(|x| self.visible.get(x))
            .copied()
            .flatten()
    }

    pub fn elevations(&self) -> &[i32] {
        &self.elevations
    }

    /// Raise column `x` to `y` if that is strictly higher than what is stored.
    ///
    /// Returns whether the column was raised. Columns outside the buffer are
    /// never raised.
    fn raise(&mut self, x: i32, y: i32, color: Color) -> bool {
        let Ok(column) = usize::try_from(x) else {
            return false;
        };
        match self.elevations.get_mut(column) {
            Some(elevation) if y > *elevation => {
                *elevation = y;
                self.visible[column] = Some(color);
                true
            }
            _ => false,
        }
    }

    /// Render the visible color of every column as a `height`-pixel-tall
    /// strip. Uncovered columns keep `background`.
    pub fn to_strip(&self, height: u32, background: Color) -> Canvas {
        let mut strip = Canvas::new(self.width(), height, background);
        for (x, color) in self.visible.iter().enumerate() {
            if let Some(color) = color {
                for y in 0..height as i32 {
                    strip.set_pixel(x as i32, y, *color);
                }
            }
        }
        strip
    }
}

/// Rasterize the segment `p0`-`p1` through the y-buffer.
///
/// For every integer column between the endpoints the segment's height is
/// linearly interpolated (and truncated toward zero). When it is strictly
/// above the buffered elevation the buffer is raised and the pixel
/// `(x, height)` is painted; otherwise the column is occluded. A vertical
/// segment only covers its single column, at the higher of its two ends.
/// Columns outside the buffer are not visited.
///
/// Returns the number of pixels painted. A column raised above the top (or
/// below the bottom) of the canvas still occludes later segments but is not
/// counted, since nothing lands on the canvas there.
pub fn rasterize_segment(
    p0: Vec2i,
    p1: Vec2i,
    ybuffer: &mut YBuffer,
    canvas: &mut Canvas,
    color: Color,
) -> usize {
    let last_column = i32::try_from(ybuffer.width()).unwrap_or(i32::MAX) - 1;
    let mut painted = 0;
    let mut plot = |x: i32, y: i32| {
        if ybuffer.raise(x, y, color) && canvas.contains(x, y) {
            canvas.set_pixel(x, y, color);
            painted += 1;
        }
    };

    if p0.x == p1.x {
        plot(p0.x, p0.y.max(p1.y));
        return painted;
    }

    let (start, end) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
    let span = (i64::from(end.x) - i64::from(start.x)) as f32;
    let rise = (i64::from(end.y) - i64::from(start.y)) as f32;

    let first = start.x.max(0);
    let last = end.x.min(last_column);
    for x in first..=last {
        let t = (i64::from(x) - i64::from(start.x)) as f32 / span;
        let y = (start.y as f32 + rise * t) as i32;
        plot(x, y);
    }

    painted
}
