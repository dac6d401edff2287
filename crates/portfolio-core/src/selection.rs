//! Free / Focused selection state and the focus transition.
//!
//! Selecting an interactive object freezes locomotion and eases the
//! character to a stand-off point in front of it while the camera slides
//! along behind. Both keep facing the object on every step. Closing drops
//! straight back to free movement from wherever the character stands.

use crate::camera::Camera;
use crate::constants::{CAMERA_FOLLOW_OFFSET, CHARACTER_GROUND_Y, FOCUS_DISTANCE, FOCUS_DURATION_SEC};
use crate::content::ContentKind;
use crate::locomotion::Character;
use crate::panel::PanelPresenter;
use crate::scene::{NodeId, Scene};
use crate::tween::{Easing, Tween, TweenStatus};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusParams {
    /// Stand-off distance from the object on the x/z plane.
    pub distance: f32,
    pub duration: f32,
    pub easing: Easing,
    /// Height the character is held at while focused.
    pub ground_y: f32,
    /// Camera z offset behind the stand-off point.
    pub camera_back: f32,
}

impl Default for FocusParams {
    fn default() -> Self {
        Self {
            distance: FOCUS_DISTANCE,
            duration: FOCUS_DURATION_SEC,
            easing: Easing::Power2InOut,
            ground_y: CHARACTER_GROUND_Y,
            camera_back: CAMERA_FOLLOW_OFFSET.z,
        }
    }
}

/// In-flight interpolation of character and camera towards a focused object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTransition {
    pub tween: Tween,
    pub look_at: Vec3,
    character_from: Vec2,
    character_to: Vec2,
    camera_from: Vec2,
    camera_to: Vec2,
}

impl FocusTransition {
    /// Plan a transition from the current poses. `object` is the focused
    /// object's world position.
    pub fn plan(object: Vec3, character: &Character, camera: &Camera, params: &FocusParams) -> Self {
        let stand = stand_off_point(object, character.position, params);
        Self {
            tween: Tween::new(params.duration, params.easing),
            look_at: object,
            character_from: xz(character.position),
            character_to: xz(stand),
            camera_from: xz(camera.eye),
            camera_to: Vec2::new(stand.x, stand.z + params.camera_back),
        }
    }

    /// Where the character ends up.
    pub fn character_target(&self) -> Vec2 {
        self.character_to
    }

    /// Where the camera ends up (x/z; height is left alone).
    pub fn camera_target(&self) -> Vec2 {
        self.camera_to
    }

    pub fn step(&mut self, dt: f32, character: &mut Character, camera: &mut Camera) -> TweenStatus {
        let status = self.tween.advance(dt);
        let k = self.tween.progress();

        let c = self.character_from.lerp(self.character_to, k);
        character.position.x = c.x;
        character.position.z = c.y;
        character.face_towards(self.look_at);

        let e = self.camera_from.lerp(self.camera_to, k);
        camera.eye.x = e.x;
        camera.eye.z = e.y;
        camera.target = self.look_at;
        status
    }
}

/// `object + normalize(character - object) * distance`, at ground height.
/// A character standing exactly on the object is sent to the +Z side.
pub fn stand_off_point(object: Vec3, character: Vec3, params: &FocusParams) -> Vec3 {
    let away = (character - object).normalize_or_zero();
    let away = if away == Vec3::ZERO { Vec3::Z } else { away };
    let mut p = object + away * params.distance;
    p.y = params.ground_y;
    p
}

#[inline]
fn xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    Free,
    Focused {
        object: NodeId,
        kind: ContentKind,
        /// `None` once the transition has settled.
        transition: Option<FocusTransition>,
    },
}

#[derive(Clone, Debug)]
pub struct SelectionController {
    state: Selection,
    pub params: FocusParams,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(FocusParams::default())
    }
}

impl SelectionController {
    pub fn new(params: FocusParams) -> Self {
        Self {
            state: Selection::Free,
            params,
        }
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, Selection::Focused { .. })
    }

    pub fn active(&self) -> Option<NodeId> {
        match self.state {
            Selection::Focused { object, .. } => Some(object),
            Selection::Free => None,
        }
    }

    pub fn in_transition(&self) -> bool {
        matches!(
            self.state,
            Selection::Focused {
                transition: Some(_),
                ..
            }
        )
    }

    /// Focus `object`. Non-interactive nodes are ignored (returns `false`).
    /// An in-flight transition is replaced by one starting from the
    /// current poses.
    pub fn select(
        &mut self,
        scene: &Scene,
        object: NodeId,
        character: &Character,
        camera: &Camera,
        presenter: &mut dyn PanelPresenter,
    ) -> bool {
        let node = scene.node(object);
        let Some(kind) = node.kind() else {
            return false;
        };
        let position = Vec3::new(
            node.transform.translation.x,
            node.rest_y,
            node.transform.translation.z,
        );
        let transition = FocusTransition::plan(position, character, camera, &self.params);
        if self.in_transition() {
            log::debug!("[selection] transition overridden by {}", kind);
        }
        self.state = Selection::Focused {
            object,
            kind,
            transition: Some(transition),
        };
        log::info!("[selection] focus {} ({})", kind, node.name);
        presenter.show(kind, kind.record());
        true
    }

    /// Advance the focus transition, if one is running.
    pub fn advance(&mut self, dt: f32, character: &mut Character, camera: &mut Camera) -> Option<TweenStatus> {
        let Selection::Focused { transition, .. } = &mut self.state else {
            return None;
        };
        let tr = transition.as_mut()?;
        let status = tr.step(dt, character, camera);
        if status == TweenStatus::Finished {
            *transition = None;
        }
        Some(status)
    }

    /// Leave focus: hide the panel and stop the character dead. Returns
    /// `false` if nothing was focused.
    pub fn close(&mut self, character: &mut Character, presenter: &mut dyn PanelPresenter) -> bool {
        let Selection::Focused { kind, .. } = self.state else {
            return false;
        };
        self.state = Selection::Free;
        character.velocity = Vec2::ZERO;
        presenter.hide();
        log::info!("[selection] closed {}", kind);
        true
    }
}
