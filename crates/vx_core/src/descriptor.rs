use crate::build_env::{BuildEnv, Platform};

/// Relative path to the module's editor icon assets.
pub const ICONS_PATH: &str = "editor/icons";

/// Relative path to the module's documentation sources.
pub const DOC_PATH: &str = "doc/classes";

/// Engine classes this module contributes to generated documentation,
/// in the order the documentation generator renders them.
pub const DOC_CLASSES: &[&str] = &[
    "VoxelServer",
    "Voxel",
    "VoxelLibrary",
    "VoxelColorPalette",
    "VoxelInstanceLibrary",
    "VoxelInstanceLibraryItem",
    "VoxelInstanceGenerator",
    "VoxelBuffer",
    "VoxelNode",
    "VoxelTerrain",
    "VoxelLodTerrain",
    "VoxelViewer",
    "VoxelInstancer",
    "VoxelStream",
    "VoxelStreamFile",
    "VoxelStreamBlockFiles",
    "VoxelStreamRegionFiles",
    "VoxelStreamSQLite",
    "VoxelStreamScript",
    "VoxelGenerator",
    "VoxelGeneratorFlat",
    "VoxelGeneratorWaves",
    "VoxelGeneratorHeightmap",
    "VoxelGeneratorImage",
    "VoxelGeneratorNoise2D",
    "VoxelGeneratorNoise",
    "VoxelGeneratorGraph",
    "VoxelGeneratorScript",
    "VoxelBoxMover",
    "VoxelRaycastResult",
    "VoxelTool",
    "VoxelToolBuffer",
    "VoxelBlockSerializer",
    "VoxelVoxLoader",
    "VoxelMesher",
    "VoxelMesherBlocky",
    "VoxelMesherDMC",
    "VoxelMesherCubes",
    "VoxelVoxImporter",
];

/// Contract a host build orchestrator queries to decide whether and how
/// to include a module in a build.
///
/// Every operation is a pure query: no state, no side effects, no failure
/// modes. Safe to call from any number of threads.
pub trait ModuleDescriptor {
    /// Whether the module should be part of the given build configuration.
    fn can_build(&self, env: &BuildEnv, platform: &Platform) -> bool;

    /// Hook for adjusting the host environment before compilation.
    fn configure(&self, env: &mut BuildEnv);

    /// Where the host finds editor icon assets, relative to the module root.
    fn icons_path(&self) -> &'static str;

    /// Class names contributed to generated documentation, in render order.
    fn doc_classes(&self) -> &'static [&'static str];

    /// Where the host finds documentation sources, relative to the module root.
    fn doc_path(&self) -> &'static str;
}

/// Descriptor for the voxel module.
///
/// The module ships editor tooling, so it only builds in editor
/// configurations. It builds on every platform the host supports.
pub struct VoxelModule;

impl ModuleDescriptor for VoxelModule {
    fn can_build(&self, env: &BuildEnv, _platform: &Platform) -> bool {
        env.editor_build
    }

    fn configure(&self, _env: &mut BuildEnv) {
        // The module compiles with the host's stock settings.
    }

    fn icons_path(&self) -> &'static str {
        ICONS_PATH
    }

    fn doc_classes(&self) -> &'static [&'static str] {
        DOC_CLASSES
    }

    fn doc_path(&self) -> &'static str {
        DOC_PATH
    }
}
