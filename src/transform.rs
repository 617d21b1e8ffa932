use crate::math::Vec3;

/// Which axis a [`Transform::Rotate`] turns around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A spatial transform, expressed as a tagged enum matched in
/// `apply`/`apply_normal`.
///
/// `Combined` owns its chain (`Vec<Transform>`) rather than borrowing
/// non-owning pointers into sibling transforms; see the crate's design
/// notes for why.
#[derive(Clone, Debug)]
pub enum Transform {
    Translate(Vec3),
    Scale(Vec3),
    Rotate { axis: Axis, sin: f64, cos: f64 },
    Combined(Vec<Transform>),
}

impl Transform {
    pub fn translate(t: Vec3) -> Self {
        Transform::Translate(t)
    }

    pub fn scale(s: Vec3) -> Self {
        Transform::Scale(s)
    }

    pub fn rotate(axis: Axis, angle: f64) -> Self {
        Transform::Rotate {
            axis,
            sin: angle.sin(),
            cos: angle.cos(),
        }
    }

    pub fn combined(chain: Vec<Transform>) -> Self {
        Transform::Combined(chain)
    }

    pub fn apply(&self, v: Vec3) -> Vec3 {
        match self {
            Transform::Translate(t) => {
                let mut v = v;
                v.add(*t);
                v
            }
            Transform::Scale(s) => {
                let mut v = v;
                v.mul(*s);
                v
            }
            Transform::Rotate { axis, sin, cos } => rotate(v, *axis, *sin, *cos),
            Transform::Combined(chain) => {
                let mut v = v;
                for t in chain {
                    v = t.apply(v);
                }
                v
            }
        }
    }

    pub fn apply_normal(&self, n: Vec3) -> Vec3 {
        match self {
            Transform::Translate(_) => n,
            Transform::Scale(s) => {
                let mut n = n;
                n.mul(Vec3::new(s.y * s.z, s.x * s.z, s.x * s.y));
                n
            }
            Transform::Rotate { axis, sin, cos } => rotate(n, *axis, *sin, *cos),
            Transform::Combined(chain) => {
                let mut n = n;
                for t in chain {
                    n = t.apply_normal(n);
                }
                n
            }
        }
    }
}

fn rotate(v: Vec3, axis: Axis, s: f64, c: f64) -> Vec3 {
    match axis {
        Axis::X => Vec3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c),
        Axis::Y => Vec3::new(v.z * s + v.x * c, v.y, v.z * c - v.x * s),
        Axis::Z => Vec3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::radians;
    use approx::assert_relative_eq;

    #[test]
    fn translate_moves_a_point() {
        let t = Transform::translate(Vec3::new(1.0, 2.0, 3.0));
        let p = t.apply(Vec3::ZERO);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.z, 3.0);
    }

    #[test]
    fn translate_leaves_normals_unchanged() {
        let t = Transform::translate(Vec3::new(1.0, 2.0, 3.0));
        let n = t.apply_normal(Vec3::UP);
        assert_eq!(n, Vec3::UP);
    }

    #[test]
    fn rotate_y_by_90_degrees_maps_forward_to_right() {
        let t = Transform::rotate(Axis::Y, radians(90.0));
        let p = t.apply(Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn non_uniform_scale_preserves_normal_direction_under_inverse_transpose_rule() {
        let t = Transform::scale(Vec3::new(2.0, 1.0, 1.0));
        let n = t.apply_normal(Vec3::new(1.0, 0.0, 0.0));
        // scalars.y*scalars.z on x: 1*1 = 1, unchanged.
        assert_relative_eq!(n.x, 1.0);
    }

    #[test]
    fn combined_chain_applies_links_in_order() {
        let t = Transform::combined(vec![
            Transform::translate(Vec3::new(1.0, 0.0, 0.0)),
            Transform::scale(Vec3::new(2.0, 2.0, 2.0)),
        ]);
        // (0,0,0) + (1,0,0) = (1,0,0), then * 2 = (2,0,0)
        let p = t.apply(Vec3::ZERO);
        assert_relative_eq!(p.x, 2.0);
    }
}
