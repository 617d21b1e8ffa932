//! Interactive demonstration binary: spins a generated sphere mesh under a
//! fly camera and presents the rendered frame in an SDL2 window. Exercises
//! the library's public API the way an embedding application would; not
//! part of the rasterizer's tested contract.

use softraster::loaders::generate_uv_sphere;
use softraster::math::{radians, Vec3};
use softraster::mesh::Shading;
use softraster::transform::Transform;
use softraster::window::{FpsCounter, FrameLimiter, InputState, Window, WindowEvent};
use softraster::{Camera, Color, LightSource, Lighting, Raster, Renderer};

const WINDOW_WIDTH: u32 = 960;
const WINDOW_HEIGHT: u32 = 540;
const MOVE_SPEED: f64 = 3.0;
const LOOK_SPEED: f64 = 0.5 * 0.016;

fn main() -> Result<(), String> {
    env_logger::init();

    let mut window = Window::new("softraster", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut limiter = FrameLimiter::new(&window);
    let mut fps = FpsCounter::new();
    let mut input = InputState::default();

    let mesh = generate_uv_sphere(16, 24, Shading::KeepNormals);
    let texture = Raster::filled(1, 1, Color::WHITE);

    let mut camera = Camera::new(
        false,
        radians(60.0),
        WINDOW_WIDTH as f64 / WINDOW_HEIGHT as f64,
        0.1,
        Vec3::new(0.0, 0.0, 4.0),
        0.0,
        0.0,
        0.0,
    );

    let lights = [
        LightSource::Ambient {
            color: Vec3::new(0.15, 0.15, 0.15),
        },
        LightSource::Directional {
            color: Vec3::new(0.85, 0.85, 0.85),
            direction: Vec3::new(-0.4, -1.0, -0.3),
        },
    ];

    let mut spin = 0.0_f64;

    'running: loop {
        let delta_ms = limiter.wait_and_get_delta(&window) as f64;
        let delta_s = delta_ms / 1000.0;

        match window.poll_events(&mut input) {
            WindowEvent::Quit => break 'running,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                camera.set_aspect(w as f64 / h as f64);
            }
            WindowEvent::None => {}
        }

        camera.rotate_yaw(input.mouse_dx * LOOK_SPEED);
        camera.rotate_pitch(input.mouse_dy * LOOK_SPEED);

        let mut movement = Vec3::ZERO;
        if input.forward {
            movement.add(camera.front());
        }
        if input.back {
            let mut back = camera.front();
            back.scl(-1.0);
            movement.add(back);
        }
        if input.right {
            movement.add(camera.right());
        }
        if input.left {
            let mut left = camera.right();
            left.scl(-1.0);
            movement.add(left);
        }
        if input.up {
            movement.add(Vec3::UP);
        }
        if input.down {
            let mut down = Vec3::UP;
            down.scl(-1.0);
            movement.add(down);
        }
        movement.scl(MOVE_SPEED * delta_s);
        camera.translate(movement);

        spin += delta_s;
        let model = Transform::rotate(softraster::transform::Axis::Y, spin);

        let mut raster = Raster::new(window.width() as i32, window.height() as i32);
        {
            let mut renderer = Renderer::new(&mut raster);
            renderer.clear_color_depth(Color::BLACK);
            renderer.enable_depth_test(true);
            renderer.render_mesh(&mesh, &texture, &model, &camera, &lights, Lighting::Diffuse);
        }

        window.present(raster.data())?;

        if let Some(rate) = fps.tick() {
            window.set_title(&format!("softraster - {rate:.1} fps"));
        }
    }

    Ok(())
}
