// Loading overlay state machine.

use portfolio_core::constants::{LOADING_FADE_SEC, LOADING_SETTLE_SEC};
use portfolio_core::{LoadingPhase, LoadingSequence};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn runs_through_every_phase_to_hidden() {
    let mut seq = LoadingSequence::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut last = 0.0;
    let mut frames = 0;
    while seq.phase() == LoadingPhase::Loading {
        seq.advance(1.0 / 60.0, &mut rng);
        assert!(seq.progress() >= last);
        last = seq.progress();
        frames += 1;
        assert!(frames < 100_000, "loading never completed");
    }
    assert_eq!(seq.progress(), 100.0);
    assert_eq!(seq.phase(), LoadingPhase::Settling);
    assert_eq!(seq.opacity(), 1.0);

    seq.advance(LOADING_SETTLE_SEC, &mut rng);
    assert_eq!(seq.phase(), LoadingPhase::Fading);

    seq.advance(LOADING_FADE_SEC / 2.0, &mut rng);
    // Frame remainders carry over, so the fade is a little further along.
    assert!(seq.opacity() <= 0.5 && seq.opacity() > 0.45);

    seq.advance(LOADING_FADE_SEC, &mut rng);
    assert!(seq.is_hidden());
    assert_eq!(seq.opacity(), 0.0);
}

#[test]
fn one_long_frame_can_finish_everything() {
    let mut seq = LoadingSequence::default();
    let mut rng = StdRng::seed_from_u64(5);
    seq.advance(10_000.0, &mut rng);
    assert!(seq.is_hidden());
}
