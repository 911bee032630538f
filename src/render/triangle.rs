//! Screen-space triangles and their coverage test.

use crate::math::{Vec2i, Vec3};

/// Inclusive pixel rectangle, already clamped to a canvas.
///
/// An empty box (triangle entirely off-canvas) has `min > max` on some axis,
/// so iterating `min..=max` visits nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Vec2i,
    pub max: Vec2i,
}

impl BoundingBox {
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }
}

/// A triangle defined by three integer screen-space points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    points: [Vec2i; 3],
}

impl Triangle {
    pub const fn new(p0: Vec2i, p1: Vec2i, p2: Vec2i) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    pub fn points(&self) -> [Vec2i; 3] {
        self.points
    }

    /// Axis-aligned bounds of the three points, clamped to a
    /// `width` x `height` canvas.
    pub fn bounding_box(&self, width: u32, height: u32) -> BoundingBox {
        let [a, b, c] = self.points;
        let last = |extent: u32| i32::try_from(extent).unwrap_or(i32::MAX) - 1;
        BoundingBox {
            min: Vec2i::new(a.x.min(b.x).min(c.x).max(0), a.y.min(b.y).min(c.y).max(0)),
            max: Vec2i::new(
                a.x.max(b.x).max(c.x).min(last(width)),
                a.y.max(b.y).max(c.y).min(last(height)),
            ),
        }
    }

    /// Edge-function coverage test.
    ///
    /// Each edge contributes the signed area `(end - start) x (p - start)`.
    /// The point is inside unless the three areas contain both a strictly
    /// positive and a strictly negative value, so points on an edge count as
    /// inside and either winding order works.
    pub fn inside(&self, p: Vec2i) -> bool {
        let [a, b, c] = self.points;
        let areas = [edge_function(a, b, p), edge_function(b, c, p), edge_function(c, a, p)];
        let has_negative = areas.iter().any(|&area| area < 0);
        let has_positive = areas.iter().any(|&area| area > 0);
        !(has_negative && has_positive)
    }
}

/// Twice the signed area of `start`, `end`, `p`, widened so that any pair of
/// `i32` points is safe.
fn edge_function(start: Vec2i, end: Vec2i, p: Vec2i) -> i128 {
    let (sx, sy) = (i128::from(start.x), i128::from(start.y));
    (i128::from(end.x) - sx) * (i128::from(p.y) - sy)
        - (i128::from(end.y) - sy) * (i128::from(p.x) - sx)
}

impl From<[Vec2i; 3]> for Triangle {
    fn from([p0, p1, p2]: [Vec2i; 3]) -> Self {
        Self::new(p0, p1, p2)
    }
}

/// Unit normal of the plane spanned by two edge vectors.
///
/// Returns NaN components when the edges are parallel (zero-area face).
pub fn face_normal(edge_a: Vec3, edge_b: Vec3) -> Vec3 {
    edge_a.cross(edge_b).normalize()
}
