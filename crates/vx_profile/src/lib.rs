use bevy::prelude::*;

pub mod profile_io;

pub use profile_io::{
    ensure_profiles_dir, list_profiles, load_profile, profile_filename, profile_path,
    save_profile, ProfileError, PROFILES_DIR,
};

/// Build-profile plugin for the voxel module.
/// Persists host build environments as RON profiles.
pub struct VxProfilePlugin;

impl Plugin for VxProfilePlugin {
    fn build(&self, _app: &mut App) {
        // Profiles are read once at startup; no systems to register.
    }
}
