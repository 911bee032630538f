use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tinyraster::bench::{
    draw_line, rasterize_segment, Canvas, EdgeFunctionRasterizer, Rasterizer, Triangle, YBuffer,
};
use tinyraster::colors::{BLACK, RED};
use tinyraster::math::Vec2i;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_canvas() -> Canvas {
    Canvas::new(BUFFER_WIDTH, BUFFER_HEIGHT, BLACK)
}

fn small_triangle() -> Triangle {
    Triangle::new(Vec2i::new(100, 100), Vec2i::new(120, 100), Vec2i::new(110, 120))
}

fn medium_triangle() -> Triangle {
    Triangle::new(Vec2i::new(100, 100), Vec2i::new(300, 100), Vec2i::new(200, 300))
}

fn large_triangle() -> Triangle {
    Triangle::new(Vec2i::new(50, 50), Vec2i::new(750, 100), Vec2i::new(400, 550))
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let edge_fn = EdgeFunctionRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("edge_function", name), &triangle, |b, tri| {
            let mut canvas = create_canvas();
            b.iter(|| edge_fn.fill_triangle(black_box(tri), &mut canvas, RED));
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let edge_fn = EdgeFunctionRasterizer::new();

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                Triangle::new(
                    Vec2i::new(x, y),
                    Vec2i::new(x + 35, y),
                    Vec2i::new(x + 17, y + 25),
                )
            })
        })
        .collect();

    c.bench_function("edge_function_400_triangles", |b| {
        let mut canvas = create_canvas();
        b.iter(|| {
            for tri in &triangles {
                edge_fn.fill_triangle(black_box(tri), &mut canvas, RED);
            }
        });
    });
}

fn benchmark_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for (name, end) in [
        ("shallow", Vec2i::new(790, 300)),
        ("steep", Vec2i::new(420, 590)),
        ("diagonal", Vec2i::new(590, 590)),
    ] {
        group.bench_with_input(BenchmarkId::new("bresenham", name), &end, |b, &end| {
            let mut canvas = create_canvas();
            b.iter(|| draw_line(black_box(Vec2i::new(5, 5)), end, &mut canvas, RED));
        });
    }

    group.finish();
}

fn benchmark_ybuffer(c: &mut Criterion) {
    let segments: Vec<(Vec2i, Vec2i)> = (0..100)
        .map(|i| (Vec2i::new(i * 3, i * 5 % 600), Vec2i::new(i * 3 + 400, (i * 7 + 100) % 600)))
        .collect();

    c.bench_function("ybuffer_100_segments", |b| {
        let mut canvas = create_canvas();
        let mut ybuffer = YBuffer::new(BUFFER_WIDTH);
        b.iter(|| {
            ybuffer.reset();
            for &(p0, p1) in &segments {
                rasterize_segment(black_box(p0), p1, &mut ybuffer, &mut canvas, RED);
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_lines,
    benchmark_ybuffer
);
criterion_main!(benches);
