use glam::Vec3;

use crate::constants::*;
use crate::device::DeviceClass;
use crate::snapshot::FinancialSnapshot;

/// Vertical drift direction of the particle field, from the sign of pnl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriftDirection {
    Up,
    Down,
}

impl DriftDirection {
    /// Break-even maps to the profit branch.
    #[inline]
    pub fn from_pnl(pnl: f64) -> Self {
        if pnl < 0.0 {
            DriftDirection::Down
        } else {
            DriftDirection::Up
        }
    }

    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            DriftDirection::Up => 1.0,
            DriftDirection::Down => -1.0,
        }
    }

    /// The single color shared by every particle drifting this way.
    #[inline]
    pub fn color(self) -> [f32; 3] {
        match self {
            DriftDirection::Up => PROFIT_COLOR,
            DriftDirection::Down => LOSS_COLOR,
        }
    }
}

/// World-space placement of one mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshPlacement {
    pub position: Vec3,
    pub scale: f32,
}

/// Camera baseline for one device class; applied verbatim, never interpolated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPreset {
    pub position: Vec3,
    pub fov_deg: f32,
}

/// The inputs that actually shape a layout. Two snapshots with the same key
/// produce identical layouts, so dependents can skip re-seeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    pub device: DeviceClass,
    pub drift: DriftDirection,
    pub particle_count: usize,
}

/// The composed scene configuration: every device conditional in the system
/// lives behind `compose`, so all meshes read one consistent table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub device: DeviceClass,
    pub globe: MeshPlacement,
    pub cube: MeshPlacement,
    pub ring: MeshPlacement,
    pub particle_count: usize,
    pub particle_range: f32,
    pub field_center: Vec3,
    pub drift_step: f32,
    pub wrap_limit: f32,
    pub drift: DriftDirection,
    pub camera: CameraPreset,
    pub rotate_speed: f32,
    pub dolly_speed: f32,
}

impl SceneLayout {
    #[inline]
    pub fn key(&self) -> LayoutKey {
        LayoutKey {
            device: self.device,
            drift: self.drift,
            particle_count: self.particle_count,
        }
    }
}

/// Derive the full layout for a device class and account snapshot.
///
/// Pure and side-effect free; `SceneLayout` is `Copy`, so recomposition never
/// allocates. Only the device class and the sign of pnl matter; a balance
/// change alone yields a bit-identical layout.
pub fn compose(device: DeviceClass, snapshot: &FinancialSnapshot) -> SceneLayout {
    let drift = DriftDirection::from_pnl(snapshot.pnl);
    match device {
        DeviceClass::Desktop => SceneLayout {
            device,
            globe: MeshPlacement {
                position: Vec3::from(DESKTOP_GLOBE_POS),
                scale: DESKTOP_MESH_SCALE,
            },
            cube: MeshPlacement {
                position: Vec3::from(DESKTOP_CUBE_POS),
                scale: DESKTOP_MESH_SCALE,
            },
            ring: MeshPlacement {
                position: Vec3::from(DESKTOP_RING_POS),
                scale: DESKTOP_MESH_SCALE,
            },
            particle_count: DESKTOP_PARTICLE_COUNT,
            particle_range: DESKTOP_PARTICLE_RANGE,
            field_center: Vec3::from(DESKTOP_FIELD_CENTER),
            drift_step: DESKTOP_DRIFT_STEP,
            wrap_limit: DESKTOP_WRAP_LIMIT,
            drift,
            camera: CameraPreset {
                position: Vec3::from(DESKTOP_CAMERA_POS),
                fov_deg: DESKTOP_CAMERA_FOV_DEG,
            },
            rotate_speed: DESKTOP_ROTATE_SPEED,
            dolly_speed: DESKTOP_DOLLY_SPEED,
        },
        DeviceClass::Mobile => SceneLayout {
            device,
            globe: MeshPlacement {
                position: Vec3::from(MOBILE_GLOBE_POS),
                scale: MOBILE_MESH_SCALE,
            },
            cube: MeshPlacement {
                position: Vec3::from(MOBILE_CUBE_POS),
                scale: MOBILE_MESH_SCALE,
            },
            ring: MeshPlacement {
                position: Vec3::from(MOBILE_RING_POS),
                scale: MOBILE_MESH_SCALE,
            },
            particle_count: MOBILE_PARTICLE_COUNT,
            particle_range: MOBILE_PARTICLE_RANGE,
            field_center: Vec3::from(MOBILE_FIELD_CENTER),
            drift_step: MOBILE_DRIFT_STEP,
            wrap_limit: MOBILE_WRAP_LIMIT,
            drift,
            camera: CameraPreset {
                position: Vec3::from(MOBILE_CAMERA_POS),
                fov_deg: MOBILE_CAMERA_FOV_DEG,
            },
            rotate_speed: MOBILE_ROTATE_SPEED,
            dolly_speed: MOBILE_DOLLY_SPEED,
        },
    }
}
