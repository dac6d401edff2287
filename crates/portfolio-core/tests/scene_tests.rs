// Scene construction and decorative animation.

mod common;

use common::{app, ndc_of_kind, DT};
use portfolio_core::constants::{HOVER_BOB_AMPLITUDE, MARKER_POSITIONS, STAR_COUNT};
use portfolio_core::scene::{tick_decorations, Geometry};
use portfolio_core::{build_scene, ContentKind, NodeRole};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn registry_holds_the_three_markers_in_order() {
    let app = app();
    let kinds: Vec<_> = app
        .scene
        .interactive()
        .iter()
        .map(|&id| app.scene.node(id).kind().unwrap())
        .collect();
    assert_eq!(kinds, ContentKind::ALL.to_vec());
    for (i, &id) in app.scene.interactive().iter().enumerate() {
        let t = app.scene.node(id).transform.translation;
        assert_eq!(t.to_array(), MARKER_POSITIONS[i]);
    }
}

#[test]
fn stars_are_points_and_not_pickable() {
    let app = app();
    let stars = app
        .scene
        .nodes()
        .iter()
        .find(|n| n.name == "stars")
        .unwrap();
    assert!(!stars.pickable);
    match &stars.geometry {
        Geometry::Points(p) => {
            assert_eq!(p.len(), STAR_COUNT);
            assert!(p.iter().all(|s| s.y >= 0.0));
        }
        Geometry::Mesh(_) => panic!("stars should be points"),
    }
}

#[test]
fn seeded_builds_are_reproducible() {
    let a = build_scene(&mut StdRng::seed_from_u64(3));
    let b = build_scene(&mut StdRng::seed_from_u64(3));
    assert_eq!(a.lights, b.lights);
}

#[test]
fn character_role_is_unique() {
    let app = app();
    let count = app
        .scene
        .nodes()
        .iter()
        .filter(|n| n.role == NodeRole::Character)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn markers_spin_with_dt() {
    let mut app = app();
    let id = app.scene.interactive()[0];
    let before = app.scene.node(id).transform.yaw;
    app.tick(0.5);
    let after = app.scene.node(id).transform.yaw;
    assert!((after - before - 0.25).abs() < 1e-6);
}

#[test]
fn hovered_marker_bobs_and_returns_to_rest() {
    let mut app = app();
    let id = app.scene.find_kind(ContentKind::Skills).unwrap();
    let rest = app.scene.node(id).rest_y;
    app.pointer_move(ndc_of_kind(&app, ContentKind::Skills));

    let mut max_offset: f32 = 0.0;
    for _ in 0..60 {
        app.tick(DT);
        let y = app.scene.node(id).transform.translation.y;
        max_offset = max_offset.max((y - rest).abs());
    }
    assert!(max_offset > 0.0 && max_offset <= HOVER_BOB_AMPLITUDE + 1e-6);
    assert!(app.scene.node(id).emissive_radiance()[0] > 0.0);

    app.pointer_leave();
    app.tick(DT);
    assert_eq!(app.scene.node(id).transform.translation.y, rest);
}

#[test]
fn dunes_ripple_bumps_mesh_revision() {
    let mut scene = build_scene(&mut StdRng::seed_from_u64(1));
    let floor = scene
        .iter()
        .find(|(_, n)| n.role == NodeRole::Dunes)
        .map(|(id, _)| id)
        .unwrap();
    let rev = scene.node(floor).mesh().unwrap().revision;
    tick_decorations(&mut scene, DT, 1.0);
    assert!(scene.node(floor).mesh().unwrap().revision > rev);
}
