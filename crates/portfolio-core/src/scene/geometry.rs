//! CPU-side mesh construction for the scene's primitives.

use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Indexed triangle mesh in model space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    /// Bumped whenever positions change after construction.
    pub revision: u32,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ]
        })
    }

    /// Radius of the origin-centred sphere enclosing every vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.length_squared())
            .fold(0.0_f32, f32::max)
            .sqrt()
    }

    /// Smooth normals by accumulating area-weighted face normals.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for t in self.indices.chunks_exact(3) {
            let (a, b, c) = (t[0] as usize, t[1] as usize, t[2] as usize);
            let n = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            normals[a] += n;
            normals[b] += n;
            normals[c] += n;
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }
}

/// Build a flat-shaded mesh from a convex polyhedron, orienting every face
/// outward from the origin and projecting vertices onto `radius`.
fn convex_flat_mesh(vertices: &[[f32; 3]], faces: &[[u32; 3]], radius: f32) -> Mesh {
    let verts: Vec<Vec3> = vertices
        .iter()
        .map(|v| Vec3::from(*v).normalize() * radius)
        .collect();
    let mut mesh = Mesh::default();
    for f in faces {
        let mut tri = [verts[f[0] as usize], verts[f[1] as usize], verts[f[2] as usize]];
        let mut n = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize_or_zero();
        let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
        if n.dot(centroid) < 0.0 {
            tri.swap(1, 2);
            n = -n;
        }
        let base = mesh.positions.len() as u32;
        mesh.positions.extend_from_slice(&tri);
        mesh.normals.extend_from_slice(&[n, n, n]);
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    mesh
}

const PHI: f32 = 1.618_034;

pub fn icosahedron(radius: f32) -> Mesh {
    let t = PHI;
    let vertices = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    convex_flat_mesh(&vertices, &faces, radius)
}

pub fn dodecahedron(radius: f32) -> Mesh {
    let t = PHI;
    let r = 1.0 / t;
    let vertices = [
        // (±1, ±1, ±1)
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        // (0, ±1/φ, ±φ)
        [0.0, -r, -t],
        [0.0, -r, t],
        [0.0, r, -t],
        [0.0, r, t],
        // (±1/φ, ±φ, 0)
        [-r, -t, 0.0],
        [-r, t, 0.0],
        [r, -t, 0.0],
        [r, t, 0.0],
        // (±φ, 0, ±1/φ)
        [-t, 0.0, -r],
        [t, 0.0, -r],
        [-t, 0.0, r],
        [t, 0.0, r],
    ];
    // Twelve pentagons, three triangles each.
    let faces = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    convex_flat_mesh(&vertices, &faces, radius)
}

/// (p, q) torus knot swept with a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Mesh {
    let knot_point = |u: f32| -> Vec3 {
        let cu = u.cos();
        let su = u.sin();
        let qu_over_p = q as f32 / p as f32 * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * cu,
            radius * (2.0 + cs) * su * 0.5,
            radius * qu_over_p.sin() * 0.5,
        )
    };

    let mut mesh = Mesh::default();
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_point(u);
        let p2 = knot_point(u + 0.01);
        let tangent = p2 - p1;
        let mut n = p2 + p1;
        let b = tangent.cross(n).normalize_or_zero();
        n = b.cross(tangent).normalize_or_zero();
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.positions.push(pos);
            mesh.normals.push((pos - p1).normalize_or_zero());
        }
    }
    let stride = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Vertical capsule centred on the origin: a cylinder of `length` capped
/// by two hemispheres of `radius`.
pub fn capsule(radius: f32, length: f32, cap_segments: u32, radial_segments: u32) -> Mesh {
    let half = length * 0.5;
    // Profile from the bottom pole to the top pole as (distance from axis, y, normal).
    let mut profile: Vec<(Vec2, Vec2)> = Vec::new();
    for k in 0..=cap_segments {
        let a = -FRAC_PI_2 + FRAC_PI_2 * k as f32 / cap_segments as f32;
        let n = Vec2::new(a.cos(), a.sin());
        profile.push((Vec2::new(radius * n.x, -half + radius * n.y), n));
    }
    for k in 0..=cap_segments {
        let a = FRAC_PI_2 * k as f32 / cap_segments as f32;
        let n = Vec2::new(a.cos(), a.sin());
        profile.push((Vec2::new(radius * n.x, half + radius * n.y), n));
    }

    let mut mesh = Mesh::default();
    for &(p, n) in &profile {
        for s in 0..=radial_segments {
            let theta = s as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.positions.push(Vec3::new(p.x * sin, p.y, p.x * cos));
            mesh.normals
                .push(Vec3::new(n.x * sin, n.y, n.x * cos).normalize_or_zero());
        }
    }
    let stride = radial_segments + 1;
    for ring in 0..(profile.len() as u32 - 1) {
        for s in 0..radial_segments {
            let a = ring * stride + s;
            let b = a + stride;
            mesh.indices
                .extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
        }
    }
    mesh
}

/// One mountain ridge strip: a front edge at z = 0 and a back edge at
/// z = -depth, `segments` quads wide.
pub fn mountain_range(range_index: u32, width: f32, depth: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let frequency = 0.1_f32;
    let amplitude = 10.0 + range_index as f32 * 5.0;
    let phase = range_index as f32 * 10.0;
    for x in 0..=segments {
        let x_pos = x as f32 / segments as f32 * width - width / 2.0;
        let mut ridge = 0.0;
        for octave in 0..3 {
            let f = frequency * 2f32.powi(octave);
            let a = amplitude * 0.5f32.powi(octave);
            ridge += (x_pos * f + phase).sin() * a;
        }
        // Front edge sits on the ground.
        let front = (ridge - 5.0).max(0.0);
        mesh.positions.push(Vec3::new(x_pos, front, 0.0));
        mesh.positions.push(Vec3::new(x_pos, ridge, -depth));
    }
    for x in 0..segments {
        let a = x * 2;
        let b = a + 1;
        let c = a + 2;
        let d = a + 3;
        mesh.indices.extend_from_slice(&[a, c, b, c, d, b]);
    }
    mesh.compute_vertex_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(mesh: &Mesh) {
        for (tri, chunk) in mesh.triangles().zip(mesh.indices.chunks_exact(3)) {
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            let n = mesh.normals[chunk[0] as usize];
            assert!(n.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn polyhedra_have_expected_faces_and_radius() {
        let ico = icosahedron(1.0);
        assert_eq!(ico.triangle_count(), 20);
        assert!((ico.bounding_radius() - 1.0).abs() < 1e-5);
        assert_outward(&ico);

        let dodeca = dodecahedron(1.0);
        assert_eq!(dodeca.triangle_count(), 36);
        assert!((dodeca.bounding_radius() - 1.0).abs() < 1e-5);
        assert_outward(&dodeca);
    }

    #[test]
    fn torus_knot_counts() {
        let knot = torus_knot(0.7, 0.3, 100, 16, 2, 3);
        assert_eq!(knot.positions.len(), 101 * 17);
        assert_eq!(knot.triangle_count(), 100 * 16 * 2);
        assert!(knot.bounding_radius() < 0.7 * 1.5 + 0.3 + 1e-3);
    }

    #[test]
    fn capsule_spans_its_full_height() {
        let cap = capsule(0.5, 1.0, 4, 8);
        let (min_y, max_y) = cap
            .positions
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        assert!((min_y + 1.0).abs() < 1e-5);
        assert!((max_y - 1.0).abs() < 1e-5);
        assert!(cap.indices.iter().all(|&i| (i as usize) < cap.positions.len()));
    }

    #[test]
    fn mountain_front_edge_never_dips_below_ground() {
        for i in 0..3 {
            let m = mountain_range(i, 200.0, 20.0, 100);
            assert_eq!(m.positions.len(), 202);
            assert!(m.positions.iter().step_by(2).all(|p| p.y >= 0.0));
            assert!(m.normals.iter().all(|n| n.y >= 0.0));
        }
    }
}
