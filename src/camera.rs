//! Camera position, orientation, and projection parameters.

use crate::math::{radians, Vec3};
use crate::transform::{Axis, Transform};

const PITCH_LIMIT: f64 = 89.9;

/// A perspective or orthographic viewpoint. Setters keep the derived
/// world-to-view [`Transform`] chain in sync with the scalar fields that
/// drove it, rebuilding the `Translate`/`Rotate` sub-transforms whenever
/// position/yaw/pitch/roll change.
#[derive(Clone, Debug)]
pub struct Camera {
    orthographic: bool,
    fov: f64,
    perspective: f64,
    aspect: f64,
    near_clip: f64,
    position: Vec3,
    yaw: f64,
    pitch: f64,
    roll: f64,
    transform: Transform,
}

impl Camera {
    pub fn new(
        orthographic: bool,
        fov: f64,
        aspect: f64,
        near_clip: f64,
        position: Vec3,
        yaw: f64,
        pitch: f64,
        roll: f64,
    ) -> Self {
        let mut camera = Self {
            orthographic,
            fov,
            perspective: (fov / 2.0).tan(),
            aspect,
            near_clip,
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            transform: Transform::combined(vec![]),
        };
        camera.set_position(position);
        camera.set_yaw(yaw);
        camera.set_pitch(pitch);
        camera.set_roll(roll);
        camera.rebuild_transform();
        camera
    }

    fn rebuild_transform(&mut self) {
        let mut negated_position = self.position;
        negated_position.scl(-1.0);
        self.transform = Transform::combined(vec![
            Transform::translate(negated_position),
            Transform::rotate(Axis::Y, -self.yaw),
            Transform::rotate(Axis::X, -self.pitch),
            Transform::rotate(Axis::Z, -self.roll),
        ]);
    }

    fn limit_pitch(&mut self) {
        let limit = radians(PITCH_LIMIT);
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    pub fn set_orthographic(&mut self, orthographic: bool) {
        self.orthographic = orthographic;
    }

    pub fn set_fov(&mut self, fov: f64) {
        self.fov = fov;
        self.perspective = (fov / 2.0).tan();
    }

    pub fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect;
    }

    pub fn set_near_clip(&mut self, near_clip: f64) {
        self.near_clip = near_clip;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.rebuild_transform();
    }

    pub fn set_yaw(&mut self, yaw: f64) {
        self.yaw = yaw;
        self.rebuild_transform();
    }

    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch;
        self.limit_pitch();
        self.rebuild_transform();
    }

    pub fn set_roll(&mut self, roll: f64) {
        self.roll = roll;
        self.rebuild_transform();
    }

    pub fn translate(&mut self, translation: Vec3) {
        self.position.add(translation);
        self.rebuild_transform();
    }

    pub fn rotate_yaw(&mut self, yaw: f64) {
        self.yaw += yaw;
        self.rebuild_transform();
    }

    pub fn rotate_pitch(&mut self, pitch: f64) {
        self.pitch += pitch;
        self.limit_pitch();
        self.rebuild_transform();
    }

    pub fn rotate_roll(&mut self, roll: f64) {
        self.roll += roll;
        self.rebuild_transform();
    }

    pub fn orthographic(&self) -> bool {
        self.orthographic
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn perspective(&self) -> f64 {
        self.perspective
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn near_clip(&self) -> f64 {
        self.near_clip
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// World-space direction the camera is looking, unaffected by position.
    pub fn forward(&self) -> Vec3 {
        let t = Transform::combined(vec![
            Transform::rotate(Axis::Z, self.roll),
            Transform::rotate(Axis::X, self.pitch),
            Transform::rotate(Axis::Y, self.yaw),
        ]);
        t.apply(Vec3::FORWARD)
    }

    pub fn right(&self) -> Vec3 {
        let mut v = self.forward().cross(Vec3::UP);
        v.norm();
        v
    }

    pub fn up(&self) -> Vec3 {
        let mut v = self.right().cross(self.forward());
        v.norm();
        v
    }

    /// Forward direction projected onto the ground plane, for WASD-style
    /// ground-plane movement that ignores pitch.
    pub fn front(&self) -> Vec3 {
        let mut v = self.forward();
        v.y = 0.0;
        v.norm();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_camera() -> Camera {
        Camera::new(false, radians(90.0), 1.0, 0.1, Vec3::ZERO, 0.0, 0.0, 0.0)
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let c = default_camera();
        let f = c.forward();
        assert_relative_eq!(f.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(f.z, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn yaw_rotates_horizontally() {
        let mut c = default_camera();
        c.rotate_yaw(radians(90.0));
        let f = c.forward();
        assert_relative_eq!(f.z, 0.0, epsilon = 1e-9);
        assert!(f.x.abs() > 0.9);
    }

    #[test]
    fn pitch_is_clamped_at_89_9_degrees() {
        let mut c = default_camera();
        c.rotate_pitch(std::f64::consts::PI);
        assert_relative_eq!(c.pitch(), radians(PITCH_LIMIT), epsilon = 1e-9);
        c.rotate_pitch(-2.0 * std::f64::consts::PI);
        assert_relative_eq!(c.pitch(), -radians(PITCH_LIMIT), epsilon = 1e-9);
    }

    #[test]
    fn set_position_negates_into_the_view_transform() {
        let mut c = default_camera();
        c.set_position(Vec3::new(0.0, 0.0, 5.0));
        // A point at the camera's own position should land at the origin
        // in view space.
        let p = c.transform().apply(Vec3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn front_ignores_pitch() {
        let mut c = default_camera();
        c.rotate_pitch(radians(45.0));
        let front = c.front();
        assert_relative_eq!(front.y, 0.0, epsilon = 1e-9);
    }
}
