// Shared fixtures for the interaction tests.

#![allow(dead_code)]

use glam::{Vec2, Vec3};
use portfolio_core::{build_scene, AppState, Camera, ContentKind, ContentRecord, PanelPresenter};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DT: f32 = 1.0 / 60.0;

pub fn app() -> AppState {
    let mut rng = StdRng::seed_from_u64(7);
    AppState::new(build_scene(&mut rng), 16.0 / 9.0)
}

/// Project a world point into normalized device coordinates.
pub fn ndc_of(camera: &Camera, p: Vec3) -> Vec2 {
    let clip = camera.view_proj() * p.extend(1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

pub fn ndc_of_kind(app: &AppState, kind: ContentKind) -> Vec2 {
    let id = app.scene.find_kind(kind).expect("marker exists");
    ndc_of(&app.camera, app.scene.node(id).transform.translation)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelCall {
    Show {
        kind: ContentKind,
        title: &'static str,
        items: usize,
    },
    Hide,
}

/// Presenter that records every call for later inspection.
#[derive(Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PanelCall>,
}

impl RecordingPresenter {
    pub fn shows(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PanelCall::Show { .. }))
            .count()
    }
}

impl PanelPresenter for RecordingPresenter {
    fn show(&mut self, kind: ContentKind, record: &ContentRecord) {
        self.calls.push(PanelCall::Show {
            kind,
            title: record.title,
            items: record.items.len(),
        });
    }

    fn hide(&mut self) {
        self.calls.push(PanelCall::Hide);
    }
}
