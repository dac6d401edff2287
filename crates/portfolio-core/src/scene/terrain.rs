//! Desert floor: a displaced grid and its slow ripple.

use super::geometry::Mesh;
use super::{NodeId, SceneNode};
use crate::constants::{
    DUNE_AMPLITUDE, DUNE_FREQUENCY, DUNE_RIPPLE_AMPLITUDE, DUNE_RIPPLE_FREQUENCY,
    DUNE_RIPPLE_SPEED, DUNE_RIPPLE_STRIDE,
};
use glam::Vec3;

/// Rolling dune height at world (x, z), before the floor offset.
#[inline]
pub fn dune_height(x: f32, z: f32) -> f32 {
    DUNE_AMPLITUDE * (x * DUNE_FREQUENCY).sin() * (z * DUNE_FREQUENCY).cos()
}

/// Square grid of `size` × `size` with `segments` quads per side, centred on
/// the origin and facing +Y.
pub fn dune_floor(size: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let step = size / segments as f32;
    let half = size / 2.0;
    for iz in 0..=segments {
        for ix in 0..=segments {
            let x = -half + ix as f32 * step;
            let z = -half + iz as f32 * step;
            mesh.positions.push(Vec3::new(x, dune_height(x, z), z));
        }
    }
    let stride = segments + 1;
    for iz in 0..segments {
        for ix in 0..segments {
            let a = iz * stride + ix;
            let b = a + stride;
            let c = b + 1;
            let d = a + 1;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh.compute_vertex_normals();
    mesh
}

/// Ripple state for the dune node: rest heights of the vertices that move.
#[derive(Clone, Debug)]
pub struct DuneRipple {
    pub(crate) node: NodeId,
    rest: Vec<(u32, f32)>,
}

impl DuneRipple {
    pub fn new(node: NodeId, mesh: &Mesh) -> Self {
        let rest = mesh
            .positions
            .iter()
            .enumerate()
            .step_by(DUNE_RIPPLE_STRIDE)
            .map(|(i, p)| (i as u32, p.y))
            .collect();
        Self { node, rest }
    }

    pub fn moving_vertices(&self) -> usize {
        self.rest.len()
    }

    /// Displace the moving vertices from rest as a pure function of
    /// `elapsed`, so the ripple never drifts.
    pub fn apply(&self, node: &mut SceneNode, elapsed: f32) {
        let super::Geometry::Mesh(mesh) = &mut node.geometry else {
            return;
        };
        let t = elapsed * DUNE_RIPPLE_SPEED;
        for &(i, rest_y) in &self.rest {
            let p = &mut mesh.positions[i as usize];
            p.y = rest_y + DUNE_RIPPLE_AMPLITUDE * (t + p.x * DUNE_RIPPLE_FREQUENCY).sin();
        }
        mesh.revision = mesh.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_grid_dimensions() {
        let m = dune_floor(10.0, 4);
        assert_eq!(m.positions.len(), 25);
        assert_eq!(m.triangle_count(), 32);
        assert!(m.normals.iter().all(|n| n.y > 0.0));
    }

    #[test]
    fn dune_height_is_bounded_by_amplitude() {
        for i in -50..50 {
            let x = i as f32 * 3.7;
            let z = i as f32 * -2.3;
            assert!(dune_height(x, z).abs() <= DUNE_AMPLITUDE + 1e-6);
        }
    }
}
