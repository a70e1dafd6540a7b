use bevy::prelude::*;

pub mod build_env;
pub mod descriptor;

pub use build_env::{BuildEnv, Platform};
pub use descriptor::{ModuleDescriptor, VoxelModule, DOC_CLASSES, DOC_PATH, ICONS_PATH};

/// Core plugin providing the module descriptor types.
pub struct VxCorePlugin;

impl Plugin for VxCorePlugin {
    fn build(&self, _app: &mut App) {
        // Descriptor types are consumed by other crates; no systems to register here.
    }
}
