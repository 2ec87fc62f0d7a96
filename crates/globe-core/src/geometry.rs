use bytemuck::{Pod, Zeroable};
use std::f32::consts::PI;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// UV sphere, rows from the north pole down: seam at -X, `u` running
/// eastward, `v = 0` at the north pole (top row of an equirectangular image).
/// Triangles wind counter-clockwise seen from outside.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * 2.0 * PI;
            let n = [-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin()];
            vertices.push(MeshVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
                uv: [u, v],
            });
        }
    }

    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    Mesh { vertices, indices }
}

/// Axis-aligned cube spanning `[-0.5, 0.5]^3`, four vertices per face so
/// each face keeps a flat normal.
pub fn unit_box() -> Mesh {
    // (normal, tangent u, tangent v) per face; u x v == normal keeps CCW winding.
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, t, b) in FACES {
        let base = vertices.len() as u32;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let p = [
                n[0] * 0.5 + t[0] * su + b[0] * sv,
                n[1] * 0.5 + t[1] * su + b[1] * sv,
                n[2] * 0.5 + t[2] * su + b[2] * sv,
            ];
            vertices.push(MeshVertex {
                position: p,
                normal: n,
                uv: [su + 0.5, 0.5 - sv],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn outward(mesh: &Mesh, center_offset: Vec3) -> bool {
        mesh.indices.chunks(3).all(|t| {
            let p = |i: u32| Vec3::from(mesh.vertices[i as usize].position);
            let (a, b, c) = (p(t[0]), p(t[1]), p(t[2]));
            let n = (b - a).cross(c - a);
            n.length() < 1e-9 || n.dot((a + b + c) / 3.0 - center_offset) > 0.0
        })
    }

    #[test]
    fn box_faces_wind_outward() {
        let m = unit_box();
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.indices.len(), 36);
        assert!(outward(&m, Vec3::ZERO));
    }

    #[test]
    fn sphere_triangles_wind_outward() {
        let m = uv_sphere(5.0, 16, 12);
        assert!(outward(&m, Vec3::ZERO));
    }
}
