//! Lighting types for the renderer.

use crate::math::Vec3;

/// A light contributing to per-vertex diffuse shading.
#[derive(Clone, Copy, Debug)]
pub enum LightSource {
    Point {
        color: Vec3,
        attenuation: f64,
        position: Vec3,
    },
    Directional {
        color: Vec3,
        direction: Vec3,
    },
    Ambient {
        color: Vec3,
    },
}

impl LightSource {
    /// The color this light contributes at `vertex_pos` with surface
    /// `normal`, before modulation into the vertex's own color.
    pub fn contribution(&self, vertex_pos: Vec3, normal: Vec3) -> Vec3 {
        match *self {
            LightSource::Point {
                color,
                attenuation,
                position,
            } => {
                let mut to_light = position;
                to_light.sub(vertex_pos);
                let len = to_light.len();
                let brightness = (to_light.dot(normal) / len).max(0.0);
                let dim = (1.0 - len / attenuation).max(0.0);
                let mut c = color;
                c.scl(brightness * dim);
                c
            }
            LightSource::Directional { color, direction } => {
                let mut dir = direction;
                dir.scl(-1.0);
                let brightness = (dir.dot(normal) / dir.len()).max(0.0);
                let mut c = color;
                c.scl(brightness);
                c
            }
            LightSource::Ambient { color } => color,
        }
    }
}
