// Hover and nearest-hit picking against the built scene.

mod common;

use common::{app, ndc_of, ndc_of_kind};
use glam::Vec2;
use portfolio_core::picking::{intersect_all, pick};
use portfolio_core::ContentKind;

fn hovered_count(app: &portfolio_core::AppState) -> usize {
    app.scene.nodes().iter().filter(|n| n.hovered).count()
}

#[test]
fn hover_follows_the_pointer() {
    let mut app = app();
    let exp = app.scene.find_kind(ContentKind::Experience);
    let skills = app.scene.find_kind(ContentKind::Skills);

    assert_eq!(app.pointer_move(ndc_of_kind(&app, ContentKind::Experience)), exp);
    assert_eq!(app.hovered(), exp);
    assert_eq!(hovered_count(&app), 1);

    assert_eq!(app.pointer_move(ndc_of_kind(&app, ContentKind::Skills)), skills);
    assert_eq!(hovered_count(&app), 1);
    assert!(!app.scene.node(exp.unwrap()).hovered);
}

#[test]
fn pointing_at_the_floor_clears_hover() {
    let mut app = app();
    app.pointer_move(ndc_of_kind(&app, ContentKind::Experience));
    assert!(app.hovered().is_some());

    let floor_hit = app.pointer_move(Vec2::new(0.8, -0.9));
    assert_eq!(floor_hit, None);
    assert_eq!(hovered_count(&app), 0);
    // Something (the floor) was still hit.
    assert!(app.hit_under_pointer().is_some());
}

#[test]
fn pointer_leaving_clears_hover() {
    let mut app = app();
    app.pointer_move(ndc_of_kind(&app, ContentKind::Skills));
    app.pointer_leave();
    assert_eq!(app.hovered(), None);
}

#[test]
fn nearer_scenery_occludes_markers() {
    let mut app = app();
    // Character sits between the camera and nothing interactive; it is
    // still the nearest hit and blocks hover.
    let ndc = ndc_of(&app.camera, app.character.position);
    assert_eq!(app.pointer_move(ndc), None);
    let hit = app.hit_under_pointer().unwrap();
    assert_eq!(hit.node, app.scene.character_node());
}

#[test]
fn hits_are_sorted_nearest_first() {
    let app = app();
    let ray = app.camera.ray_from_ndc(Vec2::new(0.0, -0.2));
    let hits = intersect_all(&app.scene, &ray);
    assert!(!hits.is_empty());
    assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    assert_eq!(pick(&app.scene, &ray).map(|h| h.node), Some(hits[0].node));
}

#[test]
fn hover_is_re_derived_every_tick() {
    let mut app = app();
    app.pointer_move(ndc_of_kind(&app, ContentKind::Experience));
    assert!(app.hovered().is_some());
    // Walk away; the stale pointer position no longer covers the marker.
    app.key_down(portfolio_core::Direction::Right);
    for _ in 0..120 {
        app.tick(common::DT);
    }
    assert_eq!(app.hovered(), None);
}
