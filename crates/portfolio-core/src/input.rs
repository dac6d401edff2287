//! Raw keyboard and pointer state.
//!
//! Platform code updates this on events; the frame tick reads it. Nothing
//! here interprets the state beyond recording it.

use glam::Vec2;

/// Movement direction a key is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.code` style key code (layout independent).
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Direction::Forward),
            "KeyS" => Some(Direction::Backward),
            "KeyA" => Some(Direction::Left),
            "KeyD" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Last pointer position in normalized device coordinates, if the
    /// pointer has entered the viewport.
    pub pointer_ndc: Option<Vec2>,
}

impl InputState {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Forward => self.forward = held,
            Direction::Backward => self.backward = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn key_down(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    pub fn key_up(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    /// Release all directional keys (e.g. on window blur).
    pub fn release_all(&mut self) {
        self.forward = false;
        self.backward = false;
        self.left = false;
        self.right = false;
    }

    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.pointer_ndc = Some(ndc);
    }

    pub fn pointer_left(&mut self) {
        self.pointer_ndc = None;
    }

    /// Net input per axis as (right - left, forward - backward).
    pub fn axes(&self) -> (f32, f32) {
        let x = self.right as i8 - self.left as i8;
        let z = self.forward as i8 - self.backward as i8;
        (x as f32, z as f32)
    }
}

/// Convert a position in viewport pixels into normalized device coordinates
/// (x right, y up, both in [-1, 1]).
#[inline]
pub fn pointer_ndc(x_px: f32, y_px: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((x_px / w) * 2.0 - 1.0, -(y_px / h) * 2.0 + 1.0)
}
