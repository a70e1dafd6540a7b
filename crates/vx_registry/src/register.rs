use vx_core::BuildEnv;

use crate::class_db::{ClassFlags, ClassRegistry, RegistryError};

/// Register every class the voxel module contributes to the host.
///
/// Classes are registered in initialization order: the server singleton
/// first, then resources and nodes, then the helper types built on them.
/// Editor-only classes are skipped outside editor builds.
pub fn register_voxel_classes(
    db: &mut ClassRegistry,
    env: &BuildEnv,
) -> Result<(), RegistryError> {
    db.register_singleton("VoxelServer")?;

    // Misc
    db.register_class("Voxel")?;
    db.register_class("VoxelLibrary")?;
    db.register_class("VoxelColorPalette")?;
    db.register_class("VoxelInstanceLibrary")?;
    db.register_class("VoxelInstanceLibraryItem")?;
    db.register_class("VoxelInstanceGenerator")?;

    // Storage
    db.register_class("VoxelBuffer")?;

    // Nodes
    db.register_abstract("VoxelNode")?;
    db.register_class("VoxelTerrain")?;
    db.register_class("VoxelLodTerrain")?;
    db.register_class("VoxelViewer")?;
    db.register_class("VoxelInstancer")?;

    // Streams
    db.register_abstract("VoxelStream")?;
    db.register_abstract("VoxelStreamFile")?;
    db.register_class("VoxelStreamBlockFiles")?;
    db.register_class("VoxelStreamRegionFiles")?;
    db.register_class("VoxelStreamSQLite")?;
    db.register_class("VoxelStreamScript")?;

    // Generators
    db.register_abstract("VoxelGenerator")?;
    db.register_class("VoxelGeneratorFlat")?;
    db.register_class("VoxelGeneratorWaves")?;
    db.register_class("VoxelGeneratorHeightmap")?;
    db.register_class("VoxelGeneratorImage")?;
    db.register_class("VoxelGeneratorNoise2D")?;
    db.register_class("VoxelGeneratorNoise")?;
    db.register_class("VoxelGeneratorGraph")?;
    db.register_class("VoxelGeneratorScript")?;

    // Utilities
    db.register_class("VoxelBoxMover")?;
    db.register_class("VoxelRaycastResult")?;
    db.register_class("VoxelTool")?;
    db.register_class("VoxelToolBuffer")?;
    db.register_class("VoxelBlockSerializer")?;
    db.register_class("VoxelVoxLoader")?;
    // Noise helpers are engine-visible but keep their own documentation.
    db.register_class("FastNoiseLite")?;
    db.register_class("FastNoiseLiteGradient")?;

    // Meshers
    db.register_abstract("VoxelMesher")?;
    db.register_class("VoxelMesherBlocky")?;
    db.register_class("VoxelMesherDMC")?;
    db.register_class("VoxelMesherCubes")?;

    if env.editor_build {
        db.register("VoxelVoxImporter", ClassFlags::EDITOR_ONLY)?;
    }

    Ok(())
}

/// Tear down everything `register_voxel_classes` added.
///
/// Returns the number of classes removed.
pub fn unregister_voxel_classes(db: &mut ClassRegistry) -> usize {
    db.unregister_all()
}
