use glam::Vec3;
use rand::prelude::*;

use crate::layout::{LayoutKey, SceneLayout};

/// The drifting particle field: N positions sharing one color.
///
/// The field owns its buffer exclusively. Positions are reallocated only on a
/// re-seed (count, device class, or drift sign changed); the per-tick update
/// mutates y in place and never allocates.
pub struct ParticleField {
    positions: Vec<Vec3>,
    color: [f32; 3],
    seed_key: Option<LayoutKey>,
    seed_epoch: u64,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            positions: Vec::new(),
            color: [0.0; 3],
            seed_key: None,
            seed_epoch: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Re-seed if the layout key differs from the last seed; returns whether a
    /// re-seed happened. A balance-only snapshot change keeps the key stable
    /// and leaves the buffer untouched.
    pub fn ensure_seeded(&mut self, layout: &SceneLayout) -> bool {
        let key = layout.key();
        if self.seed_key == Some(key) {
            return false;
        }
        self.reseed(layout, key);
        true
    }

    fn reseed(&mut self, layout: &SceneLayout, key: LayoutKey) {
        let half = layout.particle_range * 0.5;
        self.positions.clear();
        self.positions.reserve(layout.particle_count);
        for _ in 0..layout.particle_count {
            let offset = Vec3::new(
                (self.rng.gen::<f32>() - 0.5) * 2.0 * half,
                (self.rng.gen::<f32>() - 0.5) * 2.0 * half,
                (self.rng.gen::<f32>() - 0.5) * 2.0 * half,
            );
            self.positions.push(layout.field_center + offset);
        }
        self.color = layout.drift.color();
        self.seed_key = Some(key);
        self.seed_epoch += 1;
    }

    /// Advance every particle one tick: y drifts with the pnl sign and wraps
    /// across the field bounds, producing continuous flow. x and z never move
    /// after seeding.
    pub fn step(&mut self, layout: &SceneLayout) {
        let dy = layout.drift_step * layout.drift.signum();
        let top = layout.field_center.y + layout.wrap_limit;
        let bottom = layout.field_center.y - layout.wrap_limit;
        for p in &mut self.positions {
            p.y += dy;
            if p.y > top {
                p.y = bottom;
            } else if p.y < bottom {
                p.y = top;
            }
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// Increments on every re-seed; a stable epoch witnesses buffer identity.
    #[inline]
    pub fn seed_epoch(&self) -> u64 {
        self.seed_epoch
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
