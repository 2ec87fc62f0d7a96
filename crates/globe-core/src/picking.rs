use crate::camera::Ray;
use crate::marker::MarkerGroup;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    /// Distance along the world ray.
    pub t: f32,
}

pub type Hits = SmallVec<[Hit; 4]>;

/// Slab test against the cube `[-0.5, 0.5]^3`. Returns the entry distance,
/// or the exit distance when the origin is inside.
#[inline]
pub fn ray_unit_box(origin: Vec3, dir: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-12 {
            if !(-0.5..=0.5).contains(&o) {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-0.5 - o) * inv;
        let mut t1 = (0.5 - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Ray against a box given by its unit-cube model matrix. The returned
/// distance is measured along the world ray.
#[inline]
pub fn ray_box(ray: &Ray, model: &Mat4) -> Option<f32> {
    let inv = model.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.direction);
    ray_unit_box(o, d)
}

/// Intersect every marker in `group`, sorted front to back.
/// `group_transform` places the marker group in the world and `model_of`
/// yields each marker's local box matrix.
pub fn intersect_markers(
    ray: &Ray,
    group: &MarkerGroup,
    group_transform: Mat4,
    model_of: impl Fn(usize) -> Mat4,
) -> Hits {
    let mut hits: Hits = group
        .markers()
        .iter()
        .enumerate()
        .filter_map(|(index, _)| {
            let world = group_transform * model_of(index);
            ray_box(ray, &world).map(|t| Hit { index, t })
        })
        .collect();
    hits.sort_by(|a, b| a.t.total_cmp(&b.t));
    hits
}
