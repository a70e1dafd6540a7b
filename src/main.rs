use std::path::Path;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use vx_core::{BuildEnv, ModuleDescriptor, Platform, VoxelModule, VxCorePlugin};
use vx_docs::{manifest_path, save_manifest, DocManifest, VxDocsPlugin};
use vx_profile::{load_profile, profile_path, VxProfilePlugin};
use vx_registry::{register_voxel_classes, ClassRegistry, VxRegistryPlugin};

// Host-side harness: plays the build orchestrator against the voxel
// module's descriptor, runs the load-time registration pass, and emits
// the documentation manifest.
fn main() {
    let mut app = App::new();
    app.add_plugins(LogPlugin::default()).add_plugins((
        VxCorePlugin,
        VxRegistryPlugin,
        VxDocsPlugin,
        VxProfilePlugin,
    ));

    let profile = profile_path("default");
    let mut env = if profile.exists() {
        match load_profile(&profile) {
            Ok(env) => env,
            Err(e) => {
                error!("failed to load build profile {}: {}", profile.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        info!("no build profile at {}, using defaults", profile.display());
        BuildEnv::default()
    };

    let platform = Platform::new(std::env::consts::OS);
    let module = VoxelModule;

    if !module.can_build(&env, &platform) {
        info!("voxel module excluded from this build configuration");
        return;
    }
    module.configure(&mut env);

    let registry = app.world_mut().resource_mut::<ClassRegistry>().into_inner();
    if let Err(e) = register_voxel_classes(registry, &env) {
        error!("class registration failed: {}", e);
        std::process::exit(1);
    }
    info!("registered {} engine classes", registry.len());

    let manifest = DocManifest::from_descriptor(&module);
    let xref = manifest.cross_reference(registry);
    for class in &xref.undocumented {
        warn!("registered class has no documentation page: {}", class);
    }
    for class in &xref.unregistered {
        warn!("documented class is not registered: {}", class);
    }

    let manifest_file = manifest_path(Path::new("."));
    match save_manifest(&manifest_file, &manifest) {
        Ok(()) => info!(
            "documentation manifest written to {}",
            manifest_file.display()
        ),
        Err(e) => {
            error!("failed to write documentation manifest: {}", e);
            std::process::exit(1);
        }
    }
}
