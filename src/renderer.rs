//! The rendering pipeline: lighting, culling, clipping, projection, and
//! scanline rasterization with a Z-buffer.

use crate::camera::Camera;
use crate::color::Color;
use crate::light::LightSource;
use crate::math::{get_t, Vec2, Vec3};
use crate::mesh::{Mesh, Vertex};
use crate::raster::Raster;

const DEPTH_SENTINEL: f64 = 1.0e100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lighting {
    None,
    Diffuse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClipPlane {
    Near,
    Left,
    Right,
    Bottom,
    Top,
    None,
}

impl ClipPlane {
    fn next(self) -> ClipPlane {
        match self {
            ClipPlane::Near => ClipPlane::Left,
            ClipPlane::Left => ClipPlane::Right,
            ClipPlane::Right => ClipPlane::Bottom,
            ClipPlane::Bottom => ClipPlane::Top,
            ClipPlane::Top => ClipPlane::None,
            ClipPlane::None => ClipPlane::None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EdgeResult {
    Removed,
    Clipped,
    Kept,
}

struct EdgeClip {
    result: EdgeResult,
    v: Vertex,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TriResult {
    Removed,
    ClippedOne,
    ClippedTwo,
    Kept,
}

struct TriangleClip {
    result: TriResult,
    t0: [Vertex; 3],
    t1: [Vertex; 3],
}

/// Vertex attribute difference/increment helper used by both the edge
/// clipper and the scanline fill: build the per-step increment once, then
/// `step()` repeatedly rather than recomputing a lerp from scratch every
/// pixel.
struct LinearInterpolate {
    value: Vertex,
    inc: Vertex,
}

fn vertex_diff(v0: Vertex, v1: Vertex) -> Vertex {
    let mut d = Vertex::default();
    d.xyz = v1.xyz;
    d.xyz.sub(v0.xyz);
    d.rgb = v1.rgb;
    d.rgb.sub(v0.rgb);
    d.uv = v1.uv;
    d.uv.sub(v0.uv);
    d
}

fn vertex_scl(mut v: Vertex, s: f64) -> Vertex {
    v.xyz.scl(s);
    v.rgb.scl(s);
    v.uv.scl(s);
    v
}

fn vertex_add(mut a: Vertex, b: Vertex) -> Vertex {
    a.xyz.add(b.xyz);
    a.rgb.add(b.rgb);
    a.uv.add(b.uv);
    a
}

impl LinearInterpolate {
    fn new(v0: Vertex, v1: Vertex, start_t: f64, inc_t: f64) -> Self {
        let difference = vertex_diff(v0, v1);
        let inc = vertex_scl(difference, inc_t);
        let start = vertex_add(vertex_scl(difference, start_t), v0);
        Self { value: start, inc }
    }

    fn step(&mut self) {
        self.value.xyz.add(self.inc.xyz);
        self.value.rgb.add(self.inc.rgb);
        self.value.uv.add(self.inc.uv);
    }
}

/// Borrows the framebuffer for the renderer's lifetime.
pub struct Renderer<'a> {
    image: &'a mut Raster,
    depth: Vec<f64>,
    depth_test_enabled: bool,
    vertices_copy: Vec<Vertex>,
    render_face: Vec<bool>,
}

impl<'a> Renderer<'a> {
    pub fn new(image: &'a mut Raster) -> Self {
        let size = (image.width() * image.height()).max(0) as usize;
        let mut renderer = Self {
            image,
            depth: vec![DEPTH_SENTINEL; size],
            depth_test_enabled: true,
            vertices_copy: Vec::new(),
            render_face: Vec::new(),
        };
        renderer.clear_depth();
        renderer
    }

    pub fn clear_color(&mut self, color: Color) {
        self.image.clear(color);
    }

    pub fn clear_depth(&mut self) {
        let size = (self.image.width() * self.image.height()).max(0) as usize;
        self.depth.clear();
        self.depth.resize(size, DEPTH_SENTINEL);
    }

    pub fn clear_color_depth(&mut self, color: Color) {
        self.clear_color(color);
        self.clear_depth();
    }

    pub fn enable_depth_test(&mut self, enable: bool) {
        self.depth_test_enabled = enable;
    }

    fn test_depth(&mut self, index: i32, d: f64) -> bool {
        if index < 0 || index as usize >= self.depth.len() {
            return false;
        }
        let slot = &mut self.depth[index as usize];
        if d < *slot || !self.depth_test_enabled {
            *slot = d;
            true
        } else {
            false
        }
    }

    pub fn fog_post_process(&mut self, fog_start: f64, fog_end: f64, fog_color: Color) {
        for (i, &d) in self.depth.iter().enumerate() {
            let fog_amount = ((d - fog_start) / (fog_end - fog_start)).clamp(0.0, 1.0);
            let kept_amount = 1.0 - fog_amount;
            let pixel_index = (i as i32) * 4;
            let mut pixel = self.image.get_pixel_at(pixel_index);
            pixel.r = (pixel.r as f64 * kept_amount + fog_color.r as f64 * fog_amount) as i32;
            pixel.g = (pixel.g as f64 * kept_amount + fog_color.g as f64 * fog_amount) as i32;
            pixel.b = (pixel.b as f64 * kept_amount + fog_color.b as f64 * fog_amount) as i32;
            self.image.set_pixel_at(pixel_index, pixel);
        }
    }

    pub fn render_mesh(
        &mut self,
        mesh: &Mesh,
        texture: &Raster,
        transform: &crate::transform::Transform,
        camera: &Camera,
        lights: &[LightSource],
        lighting: Lighting,
    ) {
        let vertices = mesh.vertices();
        let triangles = mesh.triangles();
        let face_normals = mesh.face_normals();

        if self.vertices_copy.len() < vertices.len() {
            self.vertices_copy.resize(vertices.len(), Vertex::default());
        }
        if self.render_face.len() < triangles.len() {
            self.render_face.resize(triangles.len(), false);
        }

        for (i, src) in vertices.iter().enumerate() {
            let mut v = *src;
            v.xyz = transform.apply(v.xyz);
            v.normal = transform.apply_normal(v.normal);
            v.normal.norm();

            if lighting == Lighting::Diffuse {
                let mut accum = Vec3::ZERO;
                for light in lights {
                    accum.add(light.contribution(v.xyz, v.normal));
                }
                v.rgb.mul(accum);
            }

            self.vertices_copy[i] = v;
        }

        if camera.orthographic() {
            let cam_dir = camera.forward();
            for (i, _) in triangles.iter().enumerate() {
                let normal = transform.apply_normal(face_normals[i]);
                self.render_face[i] = cam_dir.dot(normal) < 0.0;
            }
        } else {
            let view = camera.position();
            for (i, tri) in triangles.iter().enumerate() {
                let mut diff = self.vertices_copy[tri.v0].xyz;
                diff.sub(view);
                let normal = transform.apply_normal(face_normals[i]);
                self.render_face[i] = diff.dot(normal) < 0.0;
            }
        }

        for v in self.vertices_copy.iter_mut().take(vertices.len()) {
            v.xyz = camera.transform().apply(v.xyz);
        }

        let start_plane = if camera.orthographic() {
            ClipPlane::Left
        } else {
            ClipPlane::Near
        };

        for (i, tri) in triangles.iter().enumerate() {
            if !self.render_face[i] {
                continue;
            }
            let v0 = self.vertices_copy[tri.v0];
            let v1 = self.vertices_copy[tri.v1];
            let v2 = self.vertices_copy[tri.v2];
            self.do_triangle(v0, v1, v2, start_plane, texture, camera);
        }
    }

    fn clip_edge(v0: Vertex, v1: Vertex, plane: ClipPlane, camera: &Camera) -> EdgeClip {
        let sort_clip = |mut a: f64, mut b: f64, c: f64, flipped: bool, mut v0: Vertex, mut v1: Vertex| {
            if b < a {
                std::mem::swap(&mut a, &mut b);
                std::mem::swap(&mut v0, &mut v1);
            }
            if flipped {
                if b < c {
                    return EdgeClip { result: EdgeResult::Kept, v: Vertex::default() };
                }
                if a > c {
                    return EdgeClip { result: EdgeResult::Removed, v: Vertex::default() };
                }
            } else {
                if a > c {
                    return EdgeClip { result: EdgeResult::Kept, v: Vertex::default() };
                }
                if b < c {
                    return EdgeClip { result: EdgeResult::Removed, v: Vertex::default() };
                }
            }
            let t = get_t(a, b, c);
            let lin = LinearInterpolate::new(v0, v1, t, 0.0);
            EdgeClip { result: EdgeResult::Clipped, v: lin.value }
        };

        match plane {
            ClipPlane::Near => sort_clip(v0.xyz.z, v1.xyz.z, -camera.near_clip(), true, v0, v1),
            ClipPlane::Left => sort_clip(v0.xyz.x, v1.xyz.x, -1.0, false, v0, v1),
            ClipPlane::Right => sort_clip(v0.xyz.x, v1.xyz.x, 1.0, true, v0, v1),
            ClipPlane::Bottom => sort_clip(v0.xyz.y, v1.xyz.y, -1.0, false, v0, v1),
            ClipPlane::Top => sort_clip(v0.xyz.y, v1.xyz.y, 1.0, true, v0, v1),
            ClipPlane::None => EdgeClip { result: EdgeResult::Kept, v: Vertex::default() },
        }
    }

    fn clip_triangle(
        mut v0: Vertex,
        mut v1: Vertex,
        mut v2: Vertex,
        plane: ClipPlane,
        camera: &Camera,
    ) -> TriangleClip {
        let mut v0v1 = Self::clip_edge(v0, v1, plane, camera);
        let mut v1v2 = Self::clip_edge(v1, v2, plane, camera);
        let mut v2v0 = Self::clip_edge(v2, v0, plane, camera);

        if v0v1.result == EdgeResult::Removed
            && v1v2.result == EdgeResult::Removed
            && v2v0.result == EdgeResult::Removed
        {
            return TriangleClip {
                result: TriResult::Removed,
                t0: [Vertex::default(); 3],
                t1: [Vertex::default(); 3],
            };
        }

        if v0v1.result == EdgeResult::Kept && v1v2.result == EdgeResult::Kept && v2v0.result == EdgeResult::Kept
        {
            return TriangleClip {
                result: TriResult::Kept,
                t0: [v0, v1, v2],
                t1: [Vertex::default(); 3],
            };
        }

        if v0v1.result == EdgeResult::Clipped {
            std::mem::swap(&mut v0v1, &mut v1v2);
            std::mem::swap(&mut v0, &mut v2);
        }
        if v0v1.result == EdgeResult::Clipped {
            std::mem::swap(&mut v0v1, &mut v2v0);
            std::mem::swap(&mut v1, &mut v2);
        }

        if v0v1.result == EdgeResult::Removed {
            TriangleClip {
                result: TriResult::ClippedOne,
                t0: [v1v2.v, v2v0.v, v2],
                t1: [Vertex::default(); 3],
            }
        } else {
            TriangleClip {
                result: TriResult::ClippedTwo,
                t0: [v1v2.v, v2v0.v, v0],
                t1: [v1v2.v, v0, v1],
            }
        }
    }

    fn do_triangle(
        &mut self,
        v0: Vertex,
        v1: Vertex,
        v2: Vertex,
        plane: ClipPlane,
        texture: &Raster,
        camera: &Camera,
    ) {
        // Explicit work stack in place of recursion, bounded small: five
        // clip planes can split a triangle into at most a handful of
        // sub-triangles.
        let mut stack = vec![(v0, v1, v2, plane)];
        while let Some((v0, v1, v2, plane)) = stack.pop() {
            if plane == ClipPlane::None {
                self.rasterize_triangle(v0, v1, v2, texture, camera);
                continue;
            }

            let next = plane.next();
            let (v0, v1, v2) = if plane == ClipPlane::Left {
                (
                    Self::apply_perspective(v0, texture, camera),
                    Self::apply_perspective(v1, texture, camera),
                    Self::apply_perspective(v2, texture, camera),
                )
            } else {
                (v0, v1, v2)
            };

            let clip = Self::clip_triangle(v0, v1, v2, plane, camera);
            match clip.result {
                TriResult::ClippedOne => {
                    stack.push((clip.t0[0], clip.t0[1], clip.t0[2], next));
                }
                TriResult::ClippedTwo => {
                    stack.push((clip.t0[0], clip.t0[1], clip.t0[2], next));
                    stack.push((clip.t1[0], clip.t1[1], clip.t1[2], next));
                }
                TriResult::Kept => {
                    stack.push((v0, v1, v2, next));
                }
                TriResult::Removed => {}
            }
        }
    }

    fn apply_perspective(mut v: Vertex, texture: &Raster, camera: &Camera) -> Vertex {
        let tex_size = Vec2::new(texture.width() as f64, texture.height() as f64);
        if camera.orthographic() {
            let one_over_fov = 1.0 / camera.fov();
            v.xyz.x *= one_over_fov;
            v.xyz.y *= camera.aspect() * one_over_fov;
            v.xyz.z = -v.xyz.z;
            v.uv.y = 1.0 - v.uv.y;
            v.uv.mul(tex_size);
        } else {
            let one_over_z = 1.0 / (camera.perspective() * -v.xyz.z);
            v.xyz.x *= one_over_z;
            v.xyz.y *= one_over_z * camera.aspect();
            v.xyz.z = one_over_z;
            v.rgb.scl(one_over_z);
            v.uv.y = 1.0 - v.uv.y;
            v.uv.mul(tex_size);
            v.uv.scl(one_over_z);
        }
        v
    }

    fn rasterize_triangle(&mut self, mut v0: Vertex, mut v1: Vertex, mut v2: Vertex, texture: &Raster, camera: &Camera) {
        let width = self.image.width();
        let height = self.image.height();
        let to_screen = |v: &mut Vertex| {
            v.xyz.x = width as f64 * 0.5 * (1.0 + v.xyz.x);
            v.xyz.y = height as f64 * 0.5 * (1.0 - v.xyz.y);
        };
        to_screen(&mut v0);
        to_screen(&mut v1);
        to_screen(&mut v2);

        if v1.xyz.y < v0.xyz.y {
            std::mem::swap(&mut v0, &mut v1);
        }
        if v2.xyz.y < v1.xyz.y {
            std::mem::swap(&mut v1, &mut v2);
        }
        if v1.xyz.y < v0.xyz.y {
            std::mem::swap(&mut v0, &mut v1);
        }

        let t = get_t(v0.xyz.y, v2.xyz.y, v1.xyz.y);
        let lin = LinearInterpolate::new(v0, v2, t, 0.0);
        let mut v1l = lin.value;
        let mut v1r = v1;
        if v1r.xyz.x < v1l.xyz.x {
            std::mem::swap(&mut v1l, &mut v1r);
        }

        let ortho = camera.orthographic();

        // Top half: flat-bottom triangle (v0 at apex).
        let y_pixel_start = (v0.xyz.y + 0.5).floor() as i32;
        let y_pixel_end = (v1.xyz.y - 0.5).floor() as i32;
        let y_difference = v1.xyz.y - v0.xyz.y;
        let y_t_inc = 1.0 / y_difference;
        let y_start_t = (y_pixel_start as f64 + 0.5 - v0.xyz.y) * y_t_inc;
        let mut left_edge = LinearInterpolate::new(v0, v1l, y_start_t, y_t_inc);
        let mut right_edge = LinearInterpolate::new(v0, v1r, y_start_t, y_t_inc);
        for y in y_pixel_start..=y_pixel_end {
            self.scanline(&mut left_edge, &mut right_edge, y, texture, ortho);
        }

        // Bottom half: flat-top triangle (v2 at apex), scanned descending.
        let y_pixel_start = (v2.xyz.y - 0.5).floor() as i32;
        let y_pixel_end = (v1.xyz.y + 0.5).floor() as i32;
        let y_difference = v2.xyz.y - v1.xyz.y;
        let y_t_inc = 1.0 / y_difference;
        let y_start_t = (v2.xyz.y - (y_pixel_start as f64 + 0.5)) * y_t_inc;
        let mut left_edge = LinearInterpolate::new(v2, v1l, y_start_t, y_t_inc);
        let mut right_edge = LinearInterpolate::new(v2, v1r, y_start_t, y_t_inc);
        let mut y = y_pixel_start;
        while y >= y_pixel_end {
            self.scanline(&mut left_edge, &mut right_edge, y, texture, ortho);
            y -= 1;
        }
    }

    fn scanline(
        &mut self,
        left_edge: &mut LinearInterpolate,
        right_edge: &mut LinearInterpolate,
        y: i32,
        texture: &Raster,
        ortho: bool,
    ) {
        let lv = left_edge.value;
        let rv = right_edge.value;
        let x_pixel_start = (lv.xyz.x + 0.499).floor() as i32;
        let x_pixel_end = (rv.xyz.x - 0.499).floor() as i32;
        let x_difference = rv.xyz.x - lv.xyz.x;
        let x_t_inc = 1.0 / x_difference;
        let x_start_t = (x_pixel_start as f64 + 0.5 - lv.xyz.x) * x_t_inc;
        let mut scan = LinearInterpolate::new(lv, rv, x_start_t, x_t_inc);

        let mut pixel_index = self.image.get_index(x_pixel_start, y);
        let mut depth_index = pixel_index >> 2;
        for _x in x_pixel_start..=x_pixel_end {
            let v = scan.value;
            let (z, rgb, uv) = if ortho {
                (v.xyz.z, v.rgb, v.uv)
            } else {
                let z = 1.0 / v.xyz.z;
                let mut rgb = v.rgb;
                rgb.scl(z);
                let mut uv = v.uv;
                uv.scl(z);
                (z, rgb, uv)
            };

            let mut pixel = texture.get_pixel(uv.x as i32, uv.y as i32);
            pixel.r = (pixel.r as f64 * rgb.x) as i32;
            pixel.g = (pixel.g as f64 * rgb.y) as i32;
            pixel.b = (pixel.b as f64 * rgb.z) as i32;
            pixel.limit();

            if pixel.a > 0 && self.test_depth(depth_index, z) {
                self.image.set_pixel_at(pixel_index, pixel);
            }

            scan.step();
            pixel_index += 4;
            depth_index += 1;
        }
        left_edge.step();
        right_edge.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::radians;
    use crate::mesh::{Shading, Triangle};
    use crate::transform::Transform;

    fn white_texture(size: i32) -> Raster {
        Raster::filled(size, size, Color::WHITE)
    }

    fn facing_camera_triangle(z: f64) -> Mesh {
        let verts = vec![
            Vertex::new(Vec3::new(-1.0, -1.0, z), Vec3::ONE, Vec2::new(0.0, 0.0), Vec3::ZERO),
            Vertex::new(Vec3::new(1.0, -1.0, z), Vec3::ONE, Vec2::new(1.0, 0.0), Vec3::ZERO),
            Vertex::new(Vec3::new(0.0, 1.0, z), Vec3::ONE, Vec2::new(0.5, 1.0), Vec3::ZERO),
        ];
        Mesh::new(verts, vec![Triangle::new(0, 1, 2)], Shading::KeepNormals)
    }

    #[test]
    fn triangle_straight_ahead_paints_center_pixel_white() {
        let mut raster = Raster::new(8, 8);
        let mut renderer = Renderer::new(&mut raster);
        let camera = Camera::new(false, radians(90.0), 1.0, 0.1, Vec3::ZERO, 0.0, 0.0, 0.0);
        let mesh = facing_camera_triangle(-2.0);
        let texture = white_texture(1);
        renderer.clear_color_depth(Color::BLACK);
        renderer.render_mesh(
            &mesh,
            &texture,
            &Transform::translate(Vec3::ZERO),
            &camera,
            &[],
            Lighting::None,
        );
        assert_eq!(raster.get_pixel(4, 4), Color::WHITE);
        assert_eq!(raster.get_pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn closer_triangle_wins_the_depth_test() {
        let mut raster = Raster::new(8, 8);
        let mut renderer = Renderer::new(&mut raster);
        let camera = Camera::new(false, radians(90.0), 1.0, 0.1, Vec3::ZERO, 0.0, 0.0, 0.0);
        let texture = white_texture(1);
        renderer.clear_color_depth(Color::BLACK);

        let far = facing_camera_triangle(-3.0);
        let mut far_verts = far.vertices().to_vec();
        for v in &mut far_verts {
            v.rgb = Vec3::new(1.0, 0.0, 0.0);
        }
        let far = Mesh::new(far_verts, vec![Triangle::new(0, 1, 2)], Shading::KeepNormals);

        let near = facing_camera_triangle(-2.0);
        let mut near_verts = near.vertices().to_vec();
        for v in &mut near_verts {
            v.rgb = Vec3::new(0.0, 0.0, 1.0);
        }
        let near = Mesh::new(near_verts, vec![Triangle::new(0, 1, 2)], Shading::KeepNormals);

        renderer.render_mesh(&near, &texture, &Transform::translate(Vec3::ZERO), &camera, &[], Lighting::None);
        renderer.render_mesh(&far, &texture, &Transform::translate(Vec3::ZERO), &camera, &[], Lighting::None);

        // The far (more-negative-z => larger projected z') triangle must
        // not overwrite the near one.
        assert_eq!(raster.get_pixel(4, 4), Color::new(0, 0, 255, 255));
    }

    #[test]
    fn backface_is_culled() {
        let mut raster = Raster::new(8, 8);
        let mut renderer = Renderer::new(&mut raster);
        let camera = Camera::new(false, radians(90.0), 1.0, 0.1, Vec3::ZERO, 0.0, 0.0, 0.0);
        let texture = white_texture(1);
        renderer.clear_color_depth(Color::BLACK);

        // Reverse the winding of the front-facing triangle.
        let verts = vec![
            Vertex::new(Vec3::new(0.0, 1.0, -2.0), Vec3::ONE, Vec2::new(0.5, 1.0), Vec3::ZERO),
            Vertex::new(Vec3::new(1.0, -1.0, -2.0), Vec3::ONE, Vec2::new(1.0, 0.0), Vec3::ZERO),
            Vertex::new(Vec3::new(-1.0, -1.0, -2.0), Vec3::ONE, Vec2::new(0.0, 0.0), Vec3::ZERO),
        ];
        let mesh = Mesh::new(verts, vec![Triangle::new(0, 1, 2)], Shading::KeepNormals);
        renderer.render_mesh(&mesh, &texture, &Transform::translate(Vec3::ZERO), &camera, &[], Lighting::None);
        assert_eq!(raster.get_pixel(4, 4), Color::BLACK);
    }

    #[test]
    fn triangle_entirely_behind_near_plane_renders_nothing() {
        let mut raster = Raster::new(8, 8);
        let mut renderer = Renderer::new(&mut raster);
        let camera = Camera::new(false, radians(90.0), 1.0, 0.1, Vec3::ZERO, 0.0, 0.0, 0.0);
        let texture = white_texture(1);
        renderer.clear_color_depth(Color::BLACK);
        let mesh = facing_camera_triangle(-0.01);
        renderer.render_mesh(&mesh, &texture, &Transform::translate(Vec3::ZERO), &camera, &[], Lighting::None);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(raster.get_pixel(x, y), Color::BLACK);
            }
        }
    }

    #[test]
    fn ambient_and_directional_lighting_modulates_vertex_color() {
        let mut raster = Raster::new(4, 4);
        let mut renderer = Renderer::new(&mut raster);
        let camera = Camera::new(false, radians(90.0), 1.0, 0.1, Vec3::ZERO, 0.0, 0.0, 0.0);
        let texture = white_texture(1);
        renderer.clear_color_depth(Color::BLACK);

        let verts = vec![
            Vertex::new(Vec3::new(-1.0, -1.0, -2.0), Vec3::ONE, Vec2::new(0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(1.0, -1.0, -2.0), Vec3::ONE, Vec2::new(1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
            Vertex::new(Vec3::new(0.0, 1.0, -2.0), Vec3::ONE, Vec2::new(0.5, 1.0), Vec3::new(0.0, 0.0, 1.0)),
        ];
        let mesh = Mesh::new(verts, vec![Triangle::new(0, 1, 2)], Shading::KeepNormals);

        let lights = vec![
            LightSource::Ambient { color: Vec3::new(0.2, 0.2, 0.2) },
            LightSource::Directional { color: Vec3::ONE, direction: Vec3::new(0.0, 0.0, -1.0) },
        ];
        renderer.render_mesh(&mesh, &texture, &Transform::translate(Vec3::ZERO), &camera, &lights, Lighting::Diffuse);
        assert_eq!(raster.get_pixel(2, 2), Color::WHITE);
    }
}
