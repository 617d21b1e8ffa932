use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softraster::bench::{
    Camera, Color, Lighting, LightSource, Mesh, Raster, Renderer, Shading, Transform, Triangle,
    Vec2, Vec3, Vertex,
};

const BUFFER_WIDTH: i32 = 800;
const BUFFER_HEIGHT: i32 = 600;

fn lights() -> Vec<LightSource> {
    vec![
        LightSource::Ambient {
            color: Vec3::new(0.2, 0.2, 0.2),
        },
        LightSource::Directional {
            color: Vec3::new(0.8, 0.8, 0.8),
            direction: Vec3::new(-0.3, -1.0, -0.2),
        },
    ]
}

fn camera() -> Camera {
    Camera::new(
        false,
        std::f64::consts::FRAC_PI_3,
        BUFFER_WIDTH as f64 / BUFFER_HEIGHT as f64,
        0.1,
        Vec3::new(0.0, 0.0, 4.0),
        0.0,
        0.0,
        0.0,
    )
}

fn triangle_mesh(scale: f64) -> Mesh {
    let v = |x: f64, y: f64| Vertex::new(Vec3::new(x * scale, y * scale, 0.0), Vec3::ONE, Vec2::ZERO, Vec3::new(0.0, 0.0, 1.0));
    Mesh::new(
        vec![v(-1.0, -1.0), v(1.0, -1.0), v(0.0, 1.0)],
        vec![Triangle::new(0, 1, 2)],
        Shading::KeepNormals,
    )
}

fn grid_mesh(rows: usize, cols: usize) -> Mesh {
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();
    let cell = 0.08;
    for row in 0..=rows {
        for col in 0..=cols {
            let x = (col as f64 - cols as f64 / 2.0) * cell;
            let y = (row as f64 - rows as f64 / 2.0) * cell;
            vertices.push(Vertex::new(
                Vec3::new(x, y, 0.0),
                Vec3::ONE,
                Vec2::ZERO,
                Vec3::new(0.0, 0.0, 1.0),
            ));
        }
    }
    let stride = cols + 1;
    for row in 0..rows {
        for col in 0..cols {
            let a = row * stride + col;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            triangles.push(Triangle::new(a, b, d));
            triangles.push(Triangle::new(a, d, c));
        }
    }
    Mesh::new(vertices, triangles, Shading::KeepNormals)
}

fn render_once(mesh: &Mesh, texture: &Raster, camera: &Camera, lighting: Lighting, buffer: &mut Raster) {
    let mut renderer = Renderer::new(buffer);
    renderer.clear_color_depth(Color::BLACK);
    renderer.enable_depth_test(true);
    renderer.render_mesh(mesh, texture, &Transform::combined(vec![]), camera, &lights(), lighting);
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let texture = Raster::filled(1, 1, Color::WHITE);
    let cam = camera();

    for (name, mesh) in [
        ("small", triangle_mesh(0.2)),
        ("medium", triangle_mesh(1.0)),
        ("large", triangle_mesh(2.5)),
    ] {
        group.bench_with_input(BenchmarkId::new("unlit", name), &mesh, |b, mesh| {
            let mut buffer = Raster::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| render_once(black_box(mesh), &texture, &cam, Lighting::None, &mut buffer));
        });

        group.bench_with_input(BenchmarkId::new("diffuse", name), &mesh, |b, mesh| {
            let mut buffer = Raster::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| render_once(black_box(mesh), &texture, &cam, Lighting::Diffuse, &mut buffer));
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");
    let texture = Raster::filled(1, 1, Color::WHITE);
    let cam = camera();
    let mesh = grid_mesh(20, 20);

    group.bench_function("unlit_800_triangles", |b| {
        let mut buffer = Raster::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| render_once(black_box(&mesh), &texture, &cam, Lighting::None, &mut buffer));
    });

    group.bench_function("diffuse_800_triangles", |b| {
        let mut buffer = Raster::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| render_once(black_box(&mesh), &texture, &cam, Lighting::Diffuse, &mut buffer));
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
