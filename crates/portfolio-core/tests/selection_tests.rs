// Click to focus, the focus transition and closing the panel.

mod common;

use common::{app, ndc_of, ndc_of_kind, PanelCall, RecordingPresenter, DT};
use portfolio_core::selection::Selection;
use portfolio_core::{ContentKind, Direction};

#[test]
fn clicking_experience_shows_its_record_once() {
    let mut app = app();
    let mut panel = RecordingPresenter::default();
    let ndc = ndc_of_kind(&app, ContentKind::Experience);

    let picked = app.click_at(ndc, &mut panel);
    assert_eq!(picked, app.scene.find_kind(ContentKind::Experience));
    assert_eq!(
        panel.calls,
        vec![PanelCall::Show {
            kind: ContentKind::Experience,
            title: "Professional Experience",
            items: 2,
        }]
    );
    assert!(app.selection.is_active());
}

#[test]
fn clicking_scenery_is_a_no_op() {
    let mut app = app();
    let mut panel = RecordingPresenter::default();
    // The character stands at the centre of the view.
    let ndc = ndc_of(&app.camera, app.character.position);

    assert_eq!(app.click_at(ndc, &mut panel), None);
    assert!(panel.calls.is_empty());
    assert!(!app.selection.is_active());
}

#[test]
fn locomotion_is_frozen_while_focused() {
    let mut app = app();
    let mut panel = RecordingPresenter::default();
    let ndc = ndc_of_kind(&app, ContentKind::Skills);
    app.click_at(ndc, &mut panel);

    // Let the transition settle.
    for _ in 0..90 {
        app.tick(DT);
    }
    assert!(!app.selection.in_transition());
    let settled = app.character.position;

    app.key_down(Direction::Forward);
    for _ in 0..30 {
        app.tick(DT);
    }
    assert_eq!(app.character.position, settled);
}

#[test]
fn transition_brings_character_to_stand_off_point() {
    let mut app = app();
    let mut panel = RecordingPresenter::default();
    let id = app.scene.find_kind(ContentKind::Experience).unwrap();
    let object = app.scene.node(id).transform.translation;
    app.click_at(ndc_of_kind(&app, ContentKind::Experience), &mut panel);

    for _ in 0..90 {
        app.tick(DT);
    }
    let flat = glam::Vec2::new(
        app.character.position.x - object.x,
        app.character.position.z - object.z,
    );
    assert!((flat.length() - app.config.focus.distance).abs() < 0.3);
    assert_eq!(app.character.position.y, app.config.focus.ground_y);
    assert_eq!(app.camera.target, glam::Vec3::new(object.x, app.scene.node(id).rest_y, object.z));
}

#[test]
fn close_then_forward_moves_again() {
    let mut app = app();
    let mut panel = RecordingPresenter::default();
    app.click_at(ndc_of_kind(&app, ContentKind::Experience), &mut panel);
    for _ in 0..20 {
        app.tick(DT);
    }

    assert!(app.close_panel(&mut panel));
    assert_eq!(panel.calls.last(), Some(&PanelCall::Hide));
    assert_eq!(*app.selection.state(), Selection::Free);
    assert_eq!(app.character.velocity, glam::Vec2::ZERO);

    let z = app.character.position.z;
    app.key_down(Direction::Forward);
    app.tick(DT);
    assert!(app.character.position.z != z);
}

#[test]
fn closing_when_free_does_nothing() {
    let mut app = app();
    let mut panel = RecordingPresenter::default();
    assert!(!app.close_panel(&mut panel));
    assert!(panel.calls.is_empty());
}

#[test]
fn new_selection_overrides_a_running_transition() {
    let mut app = app();
    let mut panel = RecordingPresenter::default();
    app.click_at(ndc_of_kind(&app, ContentKind::Experience), &mut panel);
    for _ in 0..5 {
        app.tick(DT);
    }
    assert!(app.selection.in_transition());

    let skills = app.scene.find_kind(ContentKind::Skills);
    let ndc = ndc_of_kind(&app, ContentKind::Skills);
    assert_eq!(app.click_at(ndc, &mut panel), skills);
    assert_eq!(panel.shows(), 2);
    assert_eq!(app.selection.active(), skills);
    match app.selection.state() {
        Selection::Focused {
            kind,
            transition: Some(tr),
            ..
        } => {
            assert_eq!(*kind, ContentKind::Skills);
            assert_eq!(tr.tween.elapsed, 0.0);
        }
        other => panic!("unexpected state {other:?}"),
    }
}
