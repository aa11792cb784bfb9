pub mod camera;
pub mod constants;
pub mod device;
pub mod feed;
pub mod interaction;
pub mod kinematics;
pub mod layout;
pub mod mesh;
pub mod particles;
pub mod scene;
pub mod snapshot;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use device::*;
pub use interaction::*;
pub use kinematics::*;
pub use layout::*;
pub use mesh::*;
pub use particles::*;
pub use scene::*;
pub use snapshot::*;
