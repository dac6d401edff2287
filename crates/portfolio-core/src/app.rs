//! Per-session interaction state and the frame tick.
//!
//! Front-ends own one `AppState`, feed it input events and call
//! [`AppState::tick`] once per display refresh before rendering.

use crate::camera::Camera;
use crate::input::{Direction, InputState};
use crate::locomotion::{self, Character, LocomotionParams};
use crate::panel::PanelPresenter;
use crate::picking::{self, Hit};
use crate::scene::{tick_decorations, NodeId, Scene, Transform};
use crate::selection::{FocusParams, SelectionController};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub locomotion: LocomotionParams,
    pub focus: FocusParams,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub scene: Scene,
    pub camera: Camera,
    pub input: InputState,
    pub character: Character,
    pub selection: SelectionController,
    pub config: AppConfig,
    /// Seconds since start, accumulated from tick deltas.
    pub elapsed: f32,
}

impl AppState {
    pub fn new(scene: Scene, aspect: f32) -> Self {
        Self::with_config(scene, aspect, AppConfig::default())
    }

    pub fn with_config(scene: Scene, aspect: f32, config: AppConfig) -> Self {
        let start = scene.node(scene.character_node()).transform;
        let character = Character {
            position: start.translation,
            yaw: start.yaw,
            ..Character::default()
        };
        let mut state = Self {
            scene,
            camera: Camera::new(aspect),
            input: InputState::default(),
            character,
            selection: SelectionController::new(config.focus),
            config,
            elapsed: 0.0,
        };
        state.camera.follow(state.character.position);
        state
    }

    /// One frame: hover re-pick, then either the focus transition or
    /// locomotion, then decorative animation.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        self.refresh_hover();

        let moved = locomotion::step(
            &mut self.character,
            &mut self.camera,
            &self.input,
            &self.config.locomotion,
            dt,
            self.selection.is_active(),
        );
        if !moved {
            self.selection
                .advance(dt, &mut self.character, &mut self.camera);
        }
        self.sync_character_node();

        tick_decorations(&mut self.scene, dt, self.elapsed);
    }

    pub fn key_down(&mut self, dir: Direction) {
        self.input.key_down(dir);
    }

    pub fn key_up(&mut self, dir: Direction) {
        self.input.key_up(dir);
    }

    /// Pointer moved to `ndc`; hover is re-derived immediately.
    pub fn pointer_move(&mut self, ndc: Vec2) -> Option<NodeId> {
        self.input.pointer_moved(ndc);
        self.refresh_hover()
    }

    pub fn pointer_leave(&mut self) {
        self.input.pointer_left();
        self.refresh_hover();
    }

    /// Nearest pickable hit under the pointer.
    pub fn hit_under_pointer(&self) -> Option<Hit> {
        let ndc = self.input.pointer_ndc?;
        picking::pick(&self.scene, &self.camera.ray_from_ndc(ndc))
    }

    /// Click at the current pointer position. Returns the object that was
    /// focused, if the nearest hit was interactive.
    pub fn click(&mut self, presenter: &mut dyn PanelPresenter) -> Option<NodeId> {
        let hit = self.hit_under_pointer()?;
        self.selection
            .select(
                &self.scene,
                hit.node,
                &self.character,
                &self.camera,
                presenter,
            )
            .then_some(hit.node)
    }

    /// Click at `ndc` (records the pointer position first).
    pub fn click_at(&mut self, ndc: Vec2, presenter: &mut dyn PanelPresenter) -> Option<NodeId> {
        self.input.pointer_moved(ndc);
        self.click(presenter)
    }

    pub fn close_panel(&mut self, presenter: &mut dyn PanelPresenter) -> bool {
        self.selection.close(&mut self.character, presenter)
    }

    /// Viewport resized: camera aspect only.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.scene.hovered()
    }

    fn refresh_hover(&mut self) -> Option<NodeId> {
        let ray = self.input.pointer_ndc.map(|ndc| self.camera.ray_from_ndc(ndc));
        picking::update_hover(&mut self.scene, ray.as_ref())
    }

    fn sync_character_node(&mut self) {
        let id = self.scene.character_node();
        self.scene.node_mut(id).transform = Transform {
            translation: self.character.position,
            yaw: self.character.yaw,
        };
    }
}
