use crate::constants::*;

/// Rotation angles for the three scene meshes at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshRotations {
    pub globe_yaw: f32,
    pub cube_yaw: f32,
    pub cube_pitch: f32,
    pub ring_spin: f32,
}

/// Angles as a pure function of elapsed scene time.
///
/// Every mesh (and the particle drift) shares the same monotonic clock, so
/// motion stays synchronized regardless of frame rate. The cube carries a
/// slow sinusoidal pitch wobble on top of its yaw spin.
#[inline]
pub fn rotations_at(elapsed_sec: f32) -> MeshRotations {
    MeshRotations {
        globe_yaw: elapsed_sec * GLOBE_SPIN_SPEED,
        cube_yaw: elapsed_sec * CUBE_SPIN_SPEED,
        cube_pitch: (elapsed_sec * CUBE_WOBBLE_SPEED).sin() * CUBE_WOBBLE_AMPLITUDE,
        ring_spin: elapsed_sec * RING_SPIN_SPEED,
    }
}
