use crate::constants::{LOADING_SCREEN_SELECTOR, PROGRESS_BAR_SELECTOR};
use crate::dom;
use crate::panel::layout::progress_width;
use portfolio_core::{LoadingPhase, LoadingSequence};
use rand::Rng;
use web_sys as web;

/// Drives the `.loading-screen` overlay from frame ticks.
pub struct LoadingOverlay {
    screen: web::HtmlElement,
    bar: web::HtmlElement,
    seq: LoadingSequence,
}

impl LoadingOverlay {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            screen: dom::query_html(document, LOADING_SCREEN_SELECTOR)?,
            bar: dom::query_html(document, PROGRESS_BAR_SELECTOR)?,
            seq: LoadingSequence::default(),
        })
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        if self.seq.is_hidden() {
            return;
        }
        let phase = self.seq.advance(dt, rng);
        let style = self.bar.style();
        _ = style.set_property("width", &progress_width(self.seq.progress()));
        let screen = self.screen.style();
        match phase {
            LoadingPhase::Loading | LoadingPhase::Settling => {}
            LoadingPhase::Fading => {
                _ = screen.set_property("opacity", &format!("{:.3}", self.seq.opacity()));
            }
            LoadingPhase::Hidden => {
                _ = screen.set_property("opacity", "0");
                _ = screen.set_property("display", "none");
                log::info!("[loading] hidden");
            }
        }
    }
}
