use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::DocManifest;

/// Error type for manifest I/O operations.
#[derive(Debug)]
pub enum DocIoError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for DocIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for DocIoError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for DocIoError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for DocIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
        }
    }
}

impl std::error::Error for DocIoError {}

/// Save a documentation manifest to a RON file.
pub fn save_manifest(path: &Path, manifest: &DocManifest) -> Result<(), DocIoError> {
    let pretty_config = ron::ser::PrettyConfig::new().depth_limit(3);

    let ron_string = ron::ser::to_string_pretty(manifest, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load a documentation manifest from a RON file.
pub fn load_manifest(path: &Path) -> Result<DocManifest, DocIoError> {
    let contents = fs::read_to_string(path)?;
    let manifest: DocManifest = ron::from_str(&contents)?;
    Ok(manifest)
}

/// List the class names with a documentation page under `doc_dir`.
///
/// Page files are `<Class>.xml`; anything else is ignored. Names are
/// returned sorted, independent of directory iteration order.
pub fn scan_doc_dir(doc_dir: &Path) -> Result<Vec<String>, std::io::Error> {
    if !doc_dir.exists() {
        return Ok(Vec::new());
    }

    let mut classes = Vec::new();
    for entry in fs::read_dir(doc_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("xml") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            classes.push(stem.to_string());
        }
    }

    classes.sort();
    Ok(classes)
}

/// Documented classes whose page file is missing under `module_root`.
///
/// Returned in render order so the generator can report them in the same
/// order it walks the manifest.
pub fn missing_pages(
    manifest: &DocManifest,
    module_root: &Path,
) -> Result<Vec<String>, std::io::Error> {
    let present = scan_doc_dir(&module_root.join(&manifest.doc_root))?;

    Ok(manifest
        .classes
        .iter()
        .filter(|class| !present.iter().any(|page| &page == class))
        .cloned()
        .collect())
}

/// Full path of the manifest file under a module root.
pub fn manifest_path(module_root: &Path) -> PathBuf {
    module_root.join("doc_manifest.ron")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vx_core::VoxelModule;

    #[test]
    fn save_and_load_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc_manifest.ron");

        let manifest = DocManifest::from_descriptor(&VoxelModule);
        save_manifest(&path, &manifest).unwrap();

        let loaded = load_manifest(&path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn scan_ignores_non_page_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VoxelServer.xml"), "<class/>").unwrap();
        fs::write(dir.path().join("VoxelBuffer.xml"), "<class/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "scratch").unwrap();

        let classes = scan_doc_dir(dir.path()).unwrap();
        assert_eq!(classes, vec!["VoxelBuffer", "VoxelServer"]);
    }

    #[test]
    fn scan_of_absent_dir_is_empty() {
        let dir = tempdir().unwrap();
        let classes = scan_doc_dir(&dir.path().join("doc/classes")).unwrap();
        assert!(classes.is_empty());
    }

    #[test]
    fn missing_pages_keep_render_order() {
        let dir = tempdir().unwrap();
        let manifest = DocManifest::from_descriptor(&VoxelModule);

        let doc_dir = dir.path().join(&manifest.doc_root);
        fs::create_dir_all(&doc_dir).unwrap();
        for class in &manifest.classes {
            fs::write(doc_dir.join(format!("{}.xml", class)), "<class/>").unwrap();
        }
        fs::remove_file(doc_dir.join("VoxelTerrain.xml")).unwrap();
        fs::remove_file(doc_dir.join("VoxelVoxImporter.xml")).unwrap();

        let missing = missing_pages(&manifest, dir.path()).unwrap();
        assert_eq!(
            missing,
            vec!["VoxelTerrain".to_string(), "VoxelVoxImporter".to_string()]
        );
    }

    #[test]
    fn fully_documented_module_has_no_missing_pages() {
        let dir = tempdir().unwrap();
        let manifest = DocManifest::from_descriptor(&VoxelModule);

        let doc_dir = dir.path().join(&manifest.doc_root);
        fs::create_dir_all(&doc_dir).unwrap();
        for class in &manifest.classes {
            fs::write(doc_dir.join(format!("{}.xml", class)), "<class/>").unwrap();
        }

        assert!(missing_pages(&manifest, dir.path()).unwrap().is_empty());
    }
}
