use bevy::prelude::*;

pub mod manifest;
pub mod manifest_io;

pub use manifest::{CrossReference, DocManifest};
pub use manifest_io::{
    load_manifest, manifest_path, missing_pages, save_manifest, scan_doc_dir, DocIoError,
};

/// Documentation plugin for the voxel module.
/// Maps the descriptor's class list onto per-class pages and icons.
pub struct VxDocsPlugin;

impl Plugin for VxDocsPlugin {
    fn build(&self, _app: &mut App) {
        // Pure library surface; the doc generator drives it directly.
    }
}
