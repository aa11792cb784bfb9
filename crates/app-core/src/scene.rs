use std::time::Duration;

use crate::camera::{Camera, CameraRig};
use crate::device::{classify, DeviceClass};
use crate::interaction::{GestureEvent, OrbitController, OrbitPhase};
use crate::kinematics::{rotations_at, MeshRotations};
use crate::layout::{compose, DriftDirection, SceneLayout};
use crate::particles::ParticleField;
use crate::snapshot::{FinancialSnapshot, SnapshotError};

/// The per-frame animation driver.
///
/// One `Scene` owns the layout, the particle buffer, the camera rig, and the
/// orbit controller; the host owns the clock and feeds `tick` with elapsed
/// time. Viewport and snapshot updates land in pending slots and are applied
/// at the top of the next tick, so a tick never observes half-applied inputs.
pub struct Scene {
    device: DeviceClass,
    snapshot: FinancialSnapshot,
    layout: SceneLayout,
    particles: ParticleField,
    rig: CameraRig,
    orbit: OrbitController,
    rotations: MeshRotations,
    elapsed: f64,
    pending_width: Option<f32>,
    pending_snapshot: Option<FinancialSnapshot>,
    torn_down: bool,
}

impl Scene {
    /// Build a scene with the Desktop default (no viewport measured yet) and
    /// a flat placeholder account.
    pub fn new(seed: u64) -> Self {
        let device = DeviceClass::default();
        let snapshot = FinancialSnapshot::flat(0.0);
        let layout = compose(device, &snapshot);
        let mut particles = ParticleField::new(seed);
        particles.ensure_seeded(&layout);
        Self {
            device,
            snapshot,
            layout,
            particles,
            rig: CameraRig::from_preset(layout.camera),
            orbit: OrbitController::new(),
            rotations: MeshRotations::default(),
            elapsed: 0.0,
            pending_width: None,
            pending_snapshot: None,
            torn_down: false,
        }
    }

    /// Queue a host-reported viewport width; last write before a tick wins.
    pub fn submit_viewport_width(&mut self, width: f32) {
        self.pending_width = Some(width);
    }

    /// Queue a snapshot update after validating it.
    ///
    /// A rejected snapshot leaves the previous one in effect for every
    /// subsequent tick.
    pub fn submit_snapshot(&mut self, snapshot: FinancialSnapshot) -> Result<(), SnapshotError> {
        if let Err(e) = snapshot.validate() {
            log::warn!("rejected snapshot: {e}");
            return Err(e);
        }
        self.pending_snapshot = Some(snapshot);
        Ok(())
    }

    /// Forward a pointer/touch gesture to the orbit controller.
    pub fn gesture(&mut self, ev: GestureEvent) {
        if self.torn_down {
            return;
        }
        self.orbit.handle(ev);
    }

    /// Advance the scene by one display refresh.
    pub fn tick(&mut self, dt: Duration) {
        if self.torn_down {
            return;
        }

        // Host inputs land here, atomically for this tick.
        if let Some(w) = self.pending_width.take() {
            self.device = classify(w);
        }
        if let Some(s) = self.pending_snapshot.take() {
            self.snapshot = s;
        }

        // Recompose only when a layout-relevant input changed; a balance move
        // alone is not one. Re-seeding fully replaces the buffer before any
        // integration below touches it.
        let drift = DriftDirection::from_pnl(self.snapshot.pnl);
        if self.device != self.layout.device || drift != self.layout.drift {
            let device_changed = self.device != self.layout.device;
            self.layout = compose(self.device, &self.snapshot);
            self.particles.ensure_seeded(&self.layout);
            if device_changed {
                self.rig.apply_preset(self.layout.camera);
            }
        }

        self.elapsed += dt.as_secs_f64();
        self.rotations = rotations_at(self.elapsed as f32);
        self.particles.step(&self.layout);
        self.orbit.advance(dt.as_secs_f32(), &self.layout, &mut self.rig);
    }

    /// Stop the scene for good: subsequent ticks and gestures are inert and
    /// no buffer mutation occurs.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[inline]
    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    #[inline]
    pub fn snapshot(&self) -> &FinancialSnapshot {
        &self.snapshot
    }

    #[inline]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    #[inline]
    pub fn rotations(&self) -> &MeshRotations {
        &self.rotations
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    pub fn orbit_phase(&self) -> OrbitPhase {
        self.orbit.phase()
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed
    }

    /// Renderer-facing camera for the current frame.
    pub fn camera(&self, aspect: f32) -> Camera {
        self.rig.camera(aspect)
    }
}
