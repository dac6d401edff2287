//! Ray picking against the scene graph.
//!
//! Every pickable mesh node is tested: a bounding-sphere reject first, then
//! its triangles in model space. Hits are ordered by distance from the ray
//! origin; equal distances keep traversal order.

use crate::scene::{NodeId, Scene};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // Origin inside the sphere: report the exit point.
    let t = -b + sq;
    (t >= 0.0).then_some(t)
}

/// Two-sided Möller–Trumbore test. Returns the distance along `ray_dir`.
#[inline]
pub fn ray_triangle(ray_origin: Vec3, ray_dir: Vec3, tri: [Vec3; 3]) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let p = ray_dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv = 1.0 / det;
    let s = ray_origin - tri[0];
    let u = s.dot(p) * inv;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray_dir.dot(q) * inv;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv;
    (t > EPS).then_some(t)
}

/// All hits along `ray`, nearest first.
pub fn intersect_all(scene: &Scene, ray: &Ray) -> SmallVec<[Hit; 8]> {
    let mut hits: SmallVec<[Hit; 8]> = SmallVec::new();
    for (id, node) in scene.iter() {
        if !node.pickable {
            continue;
        }
        let Some(mesh) = node.mesh() else {
            continue;
        };
        let to_local = node.transform.matrix().inverse();
        let local_origin = to_local.transform_point3(ray.origin);
        let local_dir = to_local.transform_vector3(ray.dir);
        if ray_sphere(local_origin, local_dir, Vec3::ZERO, mesh.bounding_radius()).is_none() {
            continue;
        }
        // Rigid transforms keep `local_dir` unit length, so `t` is a world distance.
        let nearest = mesh
            .triangles()
            .filter_map(|tri| ray_triangle(local_origin, local_dir, tri))
            .fold(None, |best: Option<f32>, t| match best {
                Some(b) if b <= t => Some(b),
                _ => Some(t),
            });
        if let Some(t) = nearest {
            hits.push(Hit {
                node: id,
                distance: t,
                point: ray.at(t),
            });
        }
    }
    // Stable sort keeps traversal order among equal distances.
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest pickable node hit by `ray`, interactive or not.
pub fn pick(scene: &Scene, ray: &Ray) -> Option<Hit> {
    intersect_all(scene, ray).into_iter().next()
}

/// Re-derive hover from the nearest hit. Returns the hovered interactive
/// node, if any.
pub fn update_hover(scene: &mut Scene, ray: Option<&Ray>) -> Option<NodeId> {
    let nearest = ray.and_then(|r| pick(scene, r)).map(|h| h.node);
    scene.set_hover(nearest);
    scene.hovered()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_sphere_hits_front_surface() {
        let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
        assert_eq!(t, Some(3.0));
    }

    #[test]
    fn ray_sphere_from_inside_reports_exit() {
        let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0);
        assert_eq!(t, Some(3.0));
    }

    #[test]
    fn ray_sphere_miss() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    }

    #[test]
    fn ray_triangle_is_two_sided() {
        let tri = [
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
        ];
        let front = ray_triangle(Vec3::ZERO, Vec3::Z, tri);
        let back = ray_triangle(Vec3::new(0.0, 0.0, 4.0), -Vec3::Z, tri);
        assert!((front.unwrap() - 2.0).abs() < 1e-6);
        assert!((back.unwrap() - 2.0).abs() < 1e-6);
        assert!(ray_triangle(Vec3::ZERO, -Vec3::Z, tri).is_none());
    }
}
