// Host-side tests for pure gesture math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod gesture {
    include!("../src/gesture.rs");
}

use gesture::*;

#[test]
fn pointer_track_reports_deltas_between_positions() {
    let mut track = PointerTrack::default();
    track.begin(100.0, 50.0);
    assert!(track.down);

    let (dx, dy) = track.delta_to(110.0, 45.0);
    assert_eq!((dx, dy), (10.0, -5.0));

    // deltas chain from the last reported position
    let (dx, dy) = track.delta_to(110.0, 45.0);
    assert_eq!((dx, dy), (0.0, 0.0));

    track.finish();
    assert!(!track.down);
}

#[test]
fn pointer_track_restart_does_not_leak_old_position() {
    let mut track = PointerTrack::default();
    track.begin(0.0, 0.0);
    let _ = track.delta_to(500.0, 500.0);
    track.finish();

    // a new drag must not see a jump from the previous one
    track.begin(10.0, 10.0);
    let (dx, dy) = track.delta_to(12.0, 10.0);
    assert_eq!((dx, dy), (2.0, 0.0));
}

#[test]
fn pinch_distance_basics() {
    assert_eq!(pinch_distance(0.0, 0.0, 3.0, 4.0), 5.0);
    assert_eq!(pinch_distance(1.0, 1.0, 1.0, 1.0), 0.0);
    // symmetric in its endpoints
    assert_eq!(
        pinch_distance(2.0, 7.0, -3.0, 1.0),
        pinch_distance(-3.0, 1.0, 2.0, 7.0)
    );
}

#[test]
fn normalize_wheel_handles_all_delta_modes() {
    // pixel mode passes through
    assert_eq!(normalize_wheel(120.0, 0), 120.0);
    // line mode scales to pixels
    assert_eq!(normalize_wheel(3.0, 1), 120.0);
    // page mode scales harder
    assert_eq!(normalize_wheel(1.0, 2), 800.0);
    // sign is preserved
    assert!(normalize_wheel(-2.0, 1) < 0.0);
}
