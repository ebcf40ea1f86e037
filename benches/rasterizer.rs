use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faceted::prelude::*;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffer() -> Vec<u8> {
    vec![0u8; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize * BYTES_PER_PIXEL]
}

fn small_triangle() -> [ScreenPoint; 3] {
    [
        ScreenPoint::new(100, 100),
        ScreenPoint::new(120, 100),
        ScreenPoint::new(110, 120),
    ]
}

fn medium_triangle() -> [ScreenPoint; 3] {
    [
        ScreenPoint::new(100, 100),
        ScreenPoint::new(300, 100),
        ScreenPoint::new(200, 300),
    ]
}

fn large_triangle() -> [ScreenPoint; 3] {
    [
        ScreenPoint::new(50, 50),
        ScreenPoint::new(750, 100),
        ScreenPoint::new(400, 550),
    ]
}

fn benchmark_fill_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_triangle");
    let rasterizer = ScanlineRasterizer::new();
    let mut pixels = create_buffer();

    for (name, [p1, p2, p3]) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut pixels, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_triangle(
                    &mut fb,
                    black_box(p1),
                    black_box(p2),
                    black_box(p3),
                    Color::gray(180),
                );
            })
        });
    }

    group.finish();
}

fn benchmark_draw_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    let rasterizer = ScanlineRasterizer::new();
    let mut pixels = create_buffer();

    for (name, (x0, y0, x1, y1)) in [
        ("horizontal", (10, 300, 790, 300)),
        ("diagonal", (10, 10, 790, 590)),
        ("steep", (400, 10, 420, 590)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut pixels, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.draw_line(
                    &mut fb,
                    black_box(x0),
                    black_box(y0),
                    black_box(x1),
                    black_box(y1),
                    Color::WHITE,
                );
            })
        });
    }

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    // A small fan of triangles around the screen center, built as OBJ
    // text so the bench exercises the same path as a loaded model.
    let mut obj = String::from("v 0.0 0.0 0.0\n");
    let spokes = 16;
    for i in 0..=spokes {
        let angle = i as f32 * std::f32::consts::TAU / spokes as f32;
        obj.push_str(&format!(
            "v {} {} -0.5\n",
            0.8 * angle.cos(),
            0.8 * angle.sin()
        ));
    }
    for i in 0..spokes {
        obj.push_str(&format!("f 1/1/1 {}/1/1 {}/1/1\n", i + 2, i + 3));
    }
    let model = Model::from_obj_str(&obj).unwrap();

    let rasterizer = ScanlineRasterizer::new();
    let mut pixels = create_buffer();

    c.bench_function("full_frame", |b| {
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut pixels, BUFFER_WIDTH, BUFFER_HEIGHT);
            fb.clear(Color::BLACK);
            for face_index in 0..model.face_count() {
                let _ = rasterizer.draw_face(&mut fb, black_box(&model), face_index);
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_fill_triangle,
    benchmark_draw_line,
    benchmark_full_frame
);
criterion_main!(benches);
