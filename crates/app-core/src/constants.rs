/// Scene tuning constants shared by the web and native frontends.
///
/// The account scene went through several numerically divergent iterations;
/// this table is the one canonical set. Desktop numbers match the production
/// dashboard scene, the mobile column narrows the field and pulls the camera
/// back so the composition survives a phone viewport.

// Device classification
pub const MOBILE_MAX_WIDTH: f32 = 768.0; // logical px; widths below this are Mobile

// Camera presets (eye position looking at the origin)
pub const DESKTOP_CAMERA_POS: [f32; 3] = [0.0, 0.0, 8.0];
pub const DESKTOP_CAMERA_FOV_DEG: f32 = 60.0;
pub const MOBILE_CAMERA_POS: [f32; 3] = [0.0, 0.0, 10.0];
pub const MOBILE_CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Particle field
pub const DESKTOP_PARTICLE_COUNT: usize = 200;
pub const DESKTOP_PARTICLE_RANGE: f32 = 20.0; // cube edge; positions span ±range/2
pub const DESKTOP_DRIFT_STEP: f32 = 0.02; // vertical drift per tick
pub const DESKTOP_WRAP_LIMIT: f32 = 10.0;
pub const MOBILE_PARTICLE_COUNT: usize = 120;
pub const MOBILE_PARTICLE_RANGE: f32 = 14.0;
pub const MOBILE_DRIFT_STEP: f32 = 0.015;
pub const MOBILE_WRAP_LIMIT: f32 = 7.0;
pub const PARTICLE_SIZE: f32 = 0.05;

// Field center offsets per device (mobile lifts the field above the HUD)
pub const DESKTOP_FIELD_CENTER: [f32; 3] = [0.0, 0.0, 0.0];
pub const MOBILE_FIELD_CENTER: [f32; 3] = [0.0, 0.8, 0.0];

// One shared particle color per drift direction
pub const PROFIT_COLOR: [f32; 3] = [0.06, 0.73, 0.51];
pub const LOSS_COLOR: [f32; 3] = [0.94, 0.27, 0.27];

// Mesh palette
pub const GLOBE_COLOR: [f32; 3] = [0.10, 0.10, 0.18];
pub const RING_COLOR: [f32; 3] = [0.23, 0.51, 0.96];

// Mesh angular speeds (radians per second of elapsed scene time)
pub const GLOBE_SPIN_SPEED: f32 = 0.1;
pub const CUBE_SPIN_SPEED: f32 = 0.3;
pub const CUBE_WOBBLE_SPEED: f32 = 0.2;
pub const CUBE_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const RING_SPIN_SPEED: f32 = 0.2;

// Mesh placements
pub const DESKTOP_GLOBE_POS: [f32; 3] = [-3.0, 0.0, 0.0];
pub const DESKTOP_CUBE_POS: [f32; 3] = [3.0, 2.0, 0.0];
pub const DESKTOP_RING_POS: [f32; 3] = [0.0, -2.5, 0.0];
pub const MOBILE_GLOBE_POS: [f32; 3] = [-1.8, 0.6, 0.0];
pub const MOBILE_CUBE_POS: [f32; 3] = [1.8, 1.4, 0.0];
pub const MOBILE_RING_POS: [f32; 3] = [0.0, -1.8, 0.0];
pub const DESKTOP_MESH_SCALE: f32 = 1.0;
pub const MOBILE_MESH_SCALE: f32 = 0.7;

// Base mesh dimensions before per-device scaling
pub const GLOBE_RADIUS: f32 = 1.5;
pub const CUBE_SIZE: f32 = 2.0;
pub const RING_RADIUS: f32 = 2.2;

// Wireframe tessellation
pub const GLOBE_STACKS: usize = 6;
pub const GLOBE_SLICES: usize = 8;
pub const GLOBE_SEGMENTS: usize = 32;
pub const RING_SEGMENTS: usize = 64; // alternate segments are skipped for the dashed look

// Orbit interaction
pub const DESKTOP_ROTATE_SPEED: f32 = 0.005; // radians per dragged pixel
pub const DESKTOP_DOLLY_SPEED: f32 = 0.01; // world units per wheel/pinch unit
pub const MOBILE_ROTATE_SPEED: f32 = 0.008;
pub const MOBILE_DOLLY_SPEED: f32 = 0.02;
pub const AUTO_ROTATE_SPEED: f32 = 0.15; // idle azimuth advance, radians per second
pub const ORBIT_MIN_RADIUS: f32 = 3.0;
pub const ORBIT_MAX_RADIUS: f32 = 18.0;
pub const ORBIT_MIN_POLAR: f32 = 0.1; // keep the orbit away from the poles
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI - 0.1;
