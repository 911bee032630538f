//! Flat shading and light-facing culling.

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::math::Vec3;
use crate::render::face_normal;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// All rays are parallel, so a face's brightness depends only on its normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// The normalized light direction.
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Signed light intensity for a surface normal.
    ///
    /// Positive when the face is lit, zero or negative when it is edge-on or
    /// turned away. Not clamped: callers decide what to do with the sign.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        self.direction.dot(normal.normalize())
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::BACK)
    }
}

/// How visible faces pick their fill color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillStyle {
    /// Base color scaled by the light intensity.
    #[default]
    Shaded,
    /// A random color per face. Culling still follows the light.
    Random,
}

/// Outcome of shading a single face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FaceShade {
    /// The face is lit; draw it with `color`.
    Lit { intensity: f32, color: Color },
    /// The face is turned away from the light (or degenerate); draw nothing.
    Culled,
}

impl FaceShade {
    pub fn color(&self) -> Option<Color> {
        match self {
            FaceShade::Lit { color, .. } => Some(*color),
            FaceShade::Culled => None,
        }
    }

    pub fn is_culled(&self) -> bool {
        matches!(self, FaceShade::Culled)
    }
}

/// Flat-shade a face given its world-space vertices in winding order.
///
/// The normal is `(v2 - v1) x (v1 - v0)`. Faces whose intensity is not
/// strictly positive are culled; that includes zero-area faces, whose normal
/// is undefined.
pub fn shade_face(light: &DirectionalLight, vertices: [Vec3; 3], base: Color) -> FaceShade {
    let [v0, v1, v2] = vertices;
    let normal = face_normal(v2 - v1, v1 - v0);
    let intensity = light.intensity(normal);

    if intensity > 0.0 {
        FaceShade::Lit {
            intensity,
            color: base * intensity,
        }
    } else {
        FaceShade::Culled
    }
}
