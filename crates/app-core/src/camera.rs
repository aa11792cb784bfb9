//! Camera types shared with both frontends.
//!
//! `Camera` is the renderer-facing description; `CameraRig` holds the orbit
//! state the interaction layer mutates. The rig's baseline (position and fov)
//! comes from the device preset and switches instantaneously; the orbit
//! angles belong to the gesture handling and survive ordinary ticks.

use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_MAX_POLAR, ORBIT_MAX_RADIUS, ORBIT_MIN_POLAR,
    ORBIT_MIN_RADIUS,
};
use crate::layout::CameraPreset;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Orbit rig around the scene origin in spherical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub fov_deg: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub radius: f32,
}

impl CameraRig {
    pub fn from_preset(preset: CameraPreset) -> Self {
        let mut rig = Self {
            fov_deg: 0.0,
            azimuth: 0.0,
            polar: 0.0,
            radius: 1.0,
        };
        rig.apply_preset(preset);
        rig
    }

    /// Snap the rig to a device preset.
    ///
    /// The switch is exact and instantaneous: the next rendered frame sees the
    /// preset position and fov with no interpolated in-between state.
    pub fn apply_preset(&mut self, preset: CameraPreset) {
        let p = preset.position;
        let radius = p.length().max(f32::EPSILON);
        self.fov_deg = preset.fov_deg;
        self.radius = radius;
        self.polar = (p.y / radius).clamp(-1.0, 1.0).acos();
        self.azimuth = p.x.atan2(p.z);
    }

    /// Orbit by gesture deltas already scaled to radians.
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar = (self.polar + d_polar).clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
    }

    /// Move the eye along the view ray; the orbit radius stays clamped.
    pub fn dolly(&mut self, delta: f32) {
        self.radius = (self.radius + delta).clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
    }

    /// Current eye position in world space.
    pub fn eye(&self) -> Vec3 {
        let sp = self.polar.sin();
        Vec3::new(
            self.radius * sp * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sp * self.azimuth.cos(),
        )
    }

    /// Build the renderer-facing camera for the given aspect ratio.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fov_deg.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
