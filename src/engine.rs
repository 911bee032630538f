//! Core rendering engine.
//!
//! The [`Engine`] owns everything a single render pass mutates (the canvas,
//! the y-buffer and the random color source) and drives the primitives in
//! [`crate::render`]: it walks mesh faces, maps them to screen space, shades
//! them and hands the survivors to the line and triangle rasterizers.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::colors::Color;
use crate::config::RenderConfig;
use crate::light::{shade_face, DirectionalLight, FaceShade, FillStyle};
use crate::math::{Vec2i, Vec3};
use crate::mesh::MeshSource;
use crate::render::{
    draw_triangle_edges, rasterize_segment, Canvas, EdgeFunctionRasterizer, Rasterizer, Triangle,
    YBuffer,
};
use crate::scene::Scene;

/// Counters describing what a render pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces (or scene triangles) visited.
    pub faces: usize,
    pub drawn: usize,
    pub culled: usize,
    /// Segments pushed through the y-buffer.
    pub segments: usize,
    /// Columns those segments raised and painted on the canvas.
    pub columns_painted: usize,
}

pub struct Engine<R: Rasterizer = EdgeFunctionRasterizer> {
    config: RenderConfig,
    canvas: Canvas,
    ybuffer: YBuffer,
    rasterizer: R,
    light: DirectionalLight,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        Self::with_rasterizer(config, EdgeFunctionRasterizer::new())
    }
}

impl<R: Rasterizer> Engine<R> {
    pub fn with_rasterizer(config: RenderConfig, rasterizer: R) -> Self {
        Self {
            canvas: Canvas::new(config.width, config.height, config.background),
            ybuffer: YBuffer::new(config.width),
            light: DirectionalLight::new(config.light_direction),
            rng: StdRng::seed_from_u64(config.seed),
            rasterizer,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    pub fn ybuffer(&self) -> &YBuffer {
        &self.ybuffer
    }

    /// Clear the canvas to the background color and forget all elevations.
    pub fn clear(&mut self) {
        self.canvas.clear(self.config.background);
        self.ybuffer.reset();
    }

    /// Map a world-space point in roughly `[-1, 1]` to screen space.
    pub fn to_screen(&self, v: Vec3) -> Vec2i {
        let scale = self.config.scale_ratio;
        Vec2i::new(((v.x + 1.0) * scale) as i32, ((v.y + 1.0) * scale) as i32)
    }

    /// Fill and/or outline a screen-space triangle.
    pub fn draw_triangle(&mut self, triangle: &Triangle, fill: Option<Color>, edge: Option<Color>) {
        if let Some(color) = fill {
            self.rasterizer.fill_triangle(triangle, &mut self.canvas, color);
        }
        if let Some(color) = edge {
            draw_triangle_edges(triangle.points(), &mut self.canvas, color);
        }

        if self.config.trace {
            let [a, b, c] = triangle.points();
            log::debug!(
                "triangle ({}, {}), ({}, {}), ({}, {}) drawn",
                a.x,
                a.y,
                b.x,
                b.y,
                c.x,
                c.y
            );
        }
    }

    /// Render every face of `mesh`, in face order.
    ///
    /// Faces turned away from the light are skipped entirely, fill and edges
    /// alike. An oversized scale ratio is logged but does not stop the pass.
    pub fn render_model<M: MeshSource + ?Sized>(&mut self, mesh: &M) -> RenderStats {
        if let Some(warning) = self.config.scale_warning() {
            log::warn!("{warning}");
        }

        let face_count = mesh.face_count();
        let mut stats = RenderStats {
            faces: face_count,
            ..RenderStats::default()
        };

        for face in 0..face_count {
            let world = mesh
                .face_vertex_indices(face)
                .map(|index| mesh.vertex_position(index));
            let triangle = Triangle::from(world.map(|v| self.to_screen(v)));

            let color = match shade_face(&self.light, world, self.config.base_color) {
                FaceShade::Culled => {
                    stats.culled += 1;
                    if self.config.trace {
                        log::debug!("face [{face} / {face_count}] culled");
                    }
                    continue;
                }
                FaceShade::Lit { color, .. } => match self.config.fill_style {
                    FillStyle::Shaded => color,
                    FillStyle::Random => Color::random(&mut self.rng),
                },
            };

            let fill = self.config.fill.then_some(color);
            let edge = self.config.edges.then_some(self.config.edge_color);
            self.draw_triangle(&triangle, fill, edge);
            stats.drawn += 1;

            if self.config.trace {
                log::debug!("drawing model triangle: [{face} / {face_count}]");
            }
        }

        log::info!(
            "model pass: {} faces, {} drawn, {} culled",
            stats.faces,
            stats.drawn,
            stats.culled
        );
        stats
    }

    /// Render an explicit scene: its triangles, then its segments through a
    /// freshly reset y-buffer.
    pub fn render_scene(&mut self, scene: &Scene) -> RenderStats {
        self.ybuffer.reset();
        let mut stats = RenderStats::default();

        for item in &scene.triangles {
            stats.faces += 1;
            self.draw_triangle(&item.triangle(), item.fill.then_some(item.color), item.outline);
            stats.drawn += 1;
        }

        for segment in &scene.segments {
            stats.segments += 1;
            stats.columns_painted += rasterize_segment(
                segment.from,
                segment.to,
                &mut self.ybuffer,
                &mut self.canvas,
                segment.color,
            );
        }

        log::info!(
            "scene pass: {} triangles, {} segments, {} y-buffer pixels painted",
            stats.drawn,
            stats.segments,
            stats.columns_painted
        );
        stats
    }
}
