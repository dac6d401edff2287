// Host-side tests for canvas size tracking in the frame loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod viewport {
    include!("../src/viewport.rs");
}

use portfolio_core::{build_scene, AppState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use viewport::ViewportTracker;

#[test]
fn unchanged_size_reports_nothing() {
    let mut vp = ViewportTracker::new(800, 600);
    assert_eq!(vp.update(800, 600), None);
}

#[test]
fn new_size_is_reported_once() {
    let mut vp = ViewportTracker::new(800, 600);
    assert_eq!(vp.update(1280, 640), Some((1280, 640)));
    assert_eq!(vp.update(1280, 640), None);
}

#[test]
fn collapsed_canvas_is_ignored() {
    let mut vp = ViewportTracker::new(800, 600);
    assert_eq!(vp.update(0, 600), None);
    assert_eq!(vp.update(800, 0), None);
    assert_eq!(vp.update(800, 600), None);
}

#[test]
fn camera_aspect_follows_canvas_without_a_gpu() {
    // Mirrors the frame loop when no surface could be created.
    let scene = build_scene(&mut StdRng::seed_from_u64(7));
    let mut app = AppState::new(scene, 800.0 / 600.0);
    let mut vp = ViewportTracker::new(800, 600);
    if let Some((w, h)) = vp.update(1200, 400) {
        app.resize(w, h);
    }
    assert_eq!(app.camera.aspect, 3.0);
}
