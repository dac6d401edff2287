use super::{NodeRole, Scene};
use crate::constants::{HOVER_BOB_AMPLITUDE, HOVER_BOB_FREQUENCY, MARKER_SPIN_RATE};

/// Advance the purely decorative animations: marker spin, hover bob and the
/// dune ripple. Spin is frame-rate independent (`rate × dt`); bob and ripple
/// are functions of `elapsed`.
pub fn tick_decorations(scene: &mut Scene, dt: f32, elapsed: f32) {
    for i in 0..scene.interactive().len() {
        let id = scene.interactive()[i];
        let node = scene.node_mut(id);
        if let NodeRole::Interactive { rotate: true, .. } = node.role {
            node.transform.yaw += dt * MARKER_SPIN_RATE;
        }
        node.transform.translation.y = if node.hovered {
            node.rest_y + (elapsed * HOVER_BOB_FREQUENCY).sin() * HOVER_BOB_AMPLITUDE
        } else {
            node.rest_y
        };
    }

    if let Some((ripple, node)) = scene.dunes_mut() {
        ripple.apply(node, elapsed);
    }
}
