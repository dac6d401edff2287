// Damped-velocity movement and camera follow, driven through AppState.

mod common;

use common::{app, DT};
use glam::Vec2;
use portfolio_core::constants::CAMERA_FOLLOW_OFFSET;
use portfolio_core::locomotion::{self, Character, LocomotionParams};
use portfolio_core::{Camera, Direction, InputState};

#[test]
fn releasing_all_keys_decays_velocity_to_zero() {
    let mut app = app();
    app.key_down(Direction::Forward);
    app.key_down(Direction::Left);
    for _ in 0..30 {
        app.tick(DT);
    }
    assert!(app.character.velocity.length() > 0.0);

    app.input.release_all();
    for _ in 0..300 {
        app.tick(DT);
    }
    assert!(app.character.velocity.length() < 1e-6);
}

#[test]
fn opposing_keys_give_no_net_input_and_decay() {
    let mut character = Character {
        velocity: Vec2::new(0.0, -0.2),
        ..Character::default()
    };
    let mut camera = Camera::default();
    let mut input = InputState::default();
    input.key_down(Direction::Forward);
    input.key_down(Direction::Backward);
    let params = LocomotionParams::default();

    locomotion::step(&mut character, &mut camera, &input, &params, DT, false);
    assert!((character.velocity.y - (-0.2 * params.decay_per_frame)).abs() < 1e-6);
    assert_eq!(character.velocity.x, 0.0);
}

#[test]
fn suspended_step_changes_nothing() {
    let mut character = Character {
        velocity: Vec2::new(0.1, 0.1),
        ..Character::default()
    };
    let before = character;
    let mut camera = Camera::default();
    let camera_before = camera.clone();
    let mut input = InputState::default();
    input.key_down(Direction::Right);

    let moved = locomotion::step(
        &mut character,
        &mut camera,
        &input,
        &LocomotionParams::default(),
        DT,
        true,
    );
    assert!(!moved);
    assert_eq!(character, before);
    assert_eq!(camera, camera_before);
}

#[test]
fn camera_keeps_fixed_offset_while_walking() {
    let mut app = app();
    app.key_down(Direction::Right);
    for _ in 0..45 {
        app.tick(DT);
        assert_eq!(app.camera.eye, app.character.position + CAMERA_FOLLOW_OFFSET);
        assert_eq!(app.camera.target, app.character.position);
    }
    assert!(app.character.position.x > 0.0);
    // Facing +X.
    assert!((app.character.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn character_node_follows_character() {
    let mut app = app();
    app.key_down(Direction::Backward);
    for _ in 0..10 {
        app.tick(DT);
    }
    let node = app.scene.node(app.scene.character_node());
    assert_eq!(node.transform.translation, app.character.position);
    assert_eq!(node.transform.yaw, app.character.yaw);
    assert!(app.character.position.z > 0.0);
}

#[test]
fn resize_only_changes_aspect() {
    let mut app = app();
    app.key_down(Direction::Forward);
    for _ in 0..5 {
        app.tick(DT);
    }
    let position = app.character.position;
    let eye = app.camera.eye;

    app.resize(1280, 640);
    assert_eq!(app.camera.aspect, 2.0);
    assert_eq!(app.character.position, position);
    assert_eq!(app.camera.eye, eye);
}
