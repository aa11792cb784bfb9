use crate::camera::CameraRig;
use crate::constants::AUTO_ROTATE_SPEED;
use crate::layout::SceneLayout;

/// What the camera is doing between gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrbitPhase {
    /// Idle: the azimuth advances on its own at a fixed rate.
    #[default]
    AutoRotating,
    /// A drag is in flight; only gesture deltas move the camera.
    Dragging,
}

/// Host gestures, already reduced to pixel deltas by the frontend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Start,
    Move { dx: f32, dy: f32 },
    Dolly { delta: f32 },
    End,
}

/// Two-state orbit controller arbitrating user drags against auto-rotation.
///
/// Deltas accumulate between ticks and are drained by `advance`, so a burst
/// of pointer events inside one frame collapses into a single camera update.
/// Dolly input works in either phase (wheel zoom does not require a drag).
/// Pan is not supported.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrbitController {
    phase: OrbitPhase,
    pending_dx: f32,
    pending_dy: f32,
    pending_dolly: f32,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> OrbitPhase {
        self.phase
    }

    pub fn handle(&mut self, ev: GestureEvent) {
        match ev {
            GestureEvent::Start => {
                self.phase = OrbitPhase::Dragging;
                self.pending_dx = 0.0;
                self.pending_dy = 0.0;
            }
            GestureEvent::Move { dx, dy } => {
                if self.phase == OrbitPhase::Dragging {
                    self.pending_dx += dx;
                    self.pending_dy += dy;
                }
            }
            GestureEvent::Dolly { delta } => {
                self.pending_dolly += delta;
            }
            GestureEvent::End => {
                // Auto-rotation resumes from wherever the drag left the
                // azimuth; there is no snap-back.
                self.phase = OrbitPhase::AutoRotating;
            }
        }
    }

    /// Apply one tick's worth of camera motion.
    pub fn advance(&mut self, dt_sec: f32, layout: &SceneLayout, rig: &mut CameraRig) {
        if self.pending_dolly != 0.0 {
            rig.dolly(self.pending_dolly * layout.dolly_speed);
            self.pending_dolly = 0.0;
        }
        match self.phase {
            OrbitPhase::Dragging => {
                if self.pending_dx != 0.0 || self.pending_dy != 0.0 {
                    rig.orbit(
                        -self.pending_dx * layout.rotate_speed,
                        -self.pending_dy * layout.rotate_speed,
                    );
                    self.pending_dx = 0.0;
                    self.pending_dy = 0.0;
                }
            }
            OrbitPhase::AutoRotating => {
                rig.azimuth += AUTO_ROTATE_SPEED * dt_sec;
            }
        }
    }
}
