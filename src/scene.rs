//! Explicit 2D scenes: screen-space triangles and y-buffer segments.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors::{self, Color};
use crate::config::ConfigError;
use crate::math::Vec2i;
use crate::render::Triangle;

/// A triangle given directly in screen coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneTriangle {
    /// Written as a list of exactly three points.
    #[serde(with = "point_list")]
    pub points: [Vec2i; 3],
    pub color: Color,
    #[serde(default = "default_true")]
    pub fill: bool,
    /// Outline color; no outline when absent.
    #[serde(default)]
    pub outline: Option<Color>,
}

impl SceneTriangle {
    pub fn triangle(&self) -> Triangle {
        Triangle::from(self.points)
    }
}

/// A segment rasterized through the y-buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Vec2i,
    pub to: Vec2i,
    pub color: Color,
}

fn default_true() -> bool {
    true
}

mod point_list {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::math::Vec2i;

    pub fn serialize<S: Serializer>(points: &[Vec2i; 3], serializer: S) -> Result<S::Ok, S::Error> {
        points.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[Vec2i; 3], D::Error> {
        let points = Vec::<Vec2i>::deserialize(deserializer)?;
        <[Vec2i; 3]>::try_from(points)
            .map_err(|points| D::Error::invalid_length(points.len(), &"three points"))
    }
}

/// Triangles are drawn first, then segments, each in list order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub triangles: Vec<SceneTriangle>,
    pub segments: Vec<Segment>,
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    /// Three triangles (two filled, one outlined only) on a 500x500 canvas
    /// and three overlapping segments for the y-buffer.
    pub fn demo() -> Self {
        let triangle = |points: [(i32, i32); 3], color, fill| SceneTriangle {
            points: points.map(Vec2i::from),
            color,
            fill,
            outline: Some(color),
        };
        let segment = |from: (i32, i32), to: (i32, i32), color| Segment {
            from: from.into(),
            to: to.into(),
            color,
        };

        Self {
            triangles: vec![
                triangle([(100, 100), (150, 300), (350, 350)], colors::WHITE, true),
                triangle([(200, 450), (450, 450), (100, 350)], colors::GREEN, true),
                triangle([(400, 250), (200, 50), (250, 150)], colors::RED, false),
            ],
            segments: vec![
                segment((20, 34), (244, 400), colors::RED),
                segment((120, 434), (444, 400), colors::GREEN),
                segment((330, 463), (494, 199), colors::BLUE),
            ],
        }
    }
}
