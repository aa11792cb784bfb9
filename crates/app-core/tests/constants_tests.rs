// Tests for the scene tuning table and its internal relationships.

use app_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MOBILE_MAX_WIDTH > 0.0);
    assert!(DESKTOP_PARTICLE_COUNT > 0);
    assert!(MOBILE_PARTICLE_COUNT > 0);
    assert!(DESKTOP_DRIFT_STEP > 0.0);
    assert!(MOBILE_DRIFT_STEP > 0.0);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(AUTO_ROTATE_SPEED > 0.0);
    assert!(GLOBE_RADIUS > 0.0 && CUBE_SIZE > 0.0 && RING_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wrap_limits_sit_inside_the_field() {
    // the wrap band must not exceed the seeded cube, or fresh particles
    // would start outside their own bounds
    assert!(DESKTOP_WRAP_LIMIT <= DESKTOP_PARTICLE_RANGE * 0.5);
    assert!(MOBILE_WRAP_LIMIT <= MOBILE_PARTICLE_RANGE * 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_column_is_a_strict_reduction() {
    assert!(MOBILE_PARTICLE_COUNT < DESKTOP_PARTICLE_COUNT);
    assert!(MOBILE_PARTICLE_RANGE < DESKTOP_PARTICLE_RANGE);
    assert!(MOBILE_DRIFT_STEP < DESKTOP_DRIFT_STEP);
    assert!(MOBILE_WRAP_LIMIT < DESKTOP_WRAP_LIMIT);
    assert!(MOBILE_MESH_SCALE < DESKTOP_MESH_SCALE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_camera_sits_further_back_with_a_wider_fov() {
    assert!(MOBILE_CAMERA_POS[2] > DESKTOP_CAMERA_POS[2]);
    assert!(MOBILE_CAMERA_FOV_DEG > DESKTOP_CAMERA_FOV_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_bounds_are_consistent() {
    assert!(ORBIT_MIN_RADIUS < ORBIT_MAX_RADIUS);
    assert!(ORBIT_MIN_POLAR < ORBIT_MAX_POLAR);
    assert!(ORBIT_MAX_POLAR < std::f32::consts::PI);
    // both presets start inside the dolly clamp
    let desktop_r = glam::Vec3::from(DESKTOP_CAMERA_POS).length();
    let mobile_r = glam::Vec3::from(MOBILE_CAMERA_POS).length();
    assert!(desktop_r >= ORBIT_MIN_RADIUS && desktop_r <= ORBIT_MAX_RADIUS);
    assert!(mobile_r >= ORBIT_MIN_RADIUS && mobile_r <= ORBIT_MAX_RADIUS);
}

#[test]
fn palette_matches_the_account_colors() {
    assert_eq!(PROFIT_COLOR, [0.06, 0.73, 0.51]);
    assert_eq!(LOSS_COLOR, [0.94, 0.27, 0.27]);
    for c in PROFIT_COLOR.iter().chain(LOSS_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_dash_count_is_even() {
    // alternate segments are skipped, so an odd count would leave a seam
    assert_eq!(RING_SEGMENTS % 2, 0);
}
