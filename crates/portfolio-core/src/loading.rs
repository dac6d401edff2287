//! Loading screen progress, driven by frame ticks.

use crate::constants::{
    LOADING_FADE_SEC, LOADING_MAX_STEP_PERCENT, LOADING_SETTLE_SEC, LOADING_STEP_SEC,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Bar is filling.
    Loading,
    /// Bar is full; short pause before fading.
    Settling,
    Fading,
    Hidden,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadingSequence {
    phase: LoadingPhase,
    progress: f32,
    /// Time spent in the current step or phase.
    clock: f32,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        Self {
            phase: LoadingPhase::Loading,
            progress: 0.0,
            clock: 0.0,
        }
    }
}

impl LoadingSequence {
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// Percent in [0, 100].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == LoadingPhase::Hidden
    }

    /// Overlay opacity: opaque until the fade, then linear to zero.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            LoadingPhase::Loading | LoadingPhase::Settling => 1.0,
            LoadingPhase::Fading => (1.0 - self.clock / LOADING_FADE_SEC).clamp(0.0, 1.0),
            LoadingPhase::Hidden => 0.0,
        }
    }

    /// Advance by `dt` seconds. Large steps carry over into later phases.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> LoadingPhase {
        self.clock += dt.max(0.0);
        loop {
            match self.phase {
                LoadingPhase::Loading => {
                    if self.clock < LOADING_STEP_SEC {
                        break;
                    }
                    self.clock -= LOADING_STEP_SEC;
                    self.progress =
                        (self.progress + rng.gen::<f32>() * LOADING_MAX_STEP_PERCENT).min(100.0);
                    if self.progress >= 100.0 {
                        self.phase = LoadingPhase::Settling;
                        log::debug!("[loading] complete");
                    }
                }
                LoadingPhase::Settling => {
                    if self.clock < LOADING_SETTLE_SEC {
                        break;
                    }
                    self.clock -= LOADING_SETTLE_SEC;
                    self.phase = LoadingPhase::Fading;
                }
                LoadingPhase::Fading => {
                    if self.clock < LOADING_FADE_SEC {
                        break;
                    }
                    self.clock = 0.0;
                    self.phase = LoadingPhase::Hidden;
                }
                LoadingPhase::Hidden => break,
            }
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn no_progress_before_first_step() {
        let mut seq = LoadingSequence::default();
        let mut rng = StepRng::new(u64::MAX, 0);
        seq.advance(0.1, &mut rng);
        assert_eq!(seq.progress(), 0.0);
        assert_eq!(seq.phase(), LoadingPhase::Loading);
    }

    #[test]
    fn progress_is_capped_at_one_hundred() {
        let mut seq = LoadingSequence::default();
        // Constant near-1.0 samples: just under 10% per step.
        let mut rng = StepRng::new(u64::MAX, 0);
        for _ in 0..11 {
            seq.advance(LOADING_STEP_SEC, &mut rng);
        }
        assert_eq!(seq.progress(), 100.0);
        assert_eq!(seq.phase(), LoadingPhase::Settling);
    }
}
