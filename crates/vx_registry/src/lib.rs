use bevy::prelude::*;

pub mod class_db;
pub mod register;

pub use class_db::{ClassEntry, ClassFlags, ClassRegistry, RegistryError};
pub use register::{register_voxel_classes, unregister_voxel_classes};

/// Registry plugin holding the class database the host queries at load time.
pub struct VxRegistryPlugin;

impl Plugin for VxRegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClassRegistry>();
    }
}
