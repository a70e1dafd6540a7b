use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vx_core::ModuleDescriptor;
use vx_registry::ClassRegistry;

/// Documentation manifest for a module.
///
/// Captures where a module keeps its documentation sources and editor
/// icons, plus the ordered class list the generator renders. Built from
/// the module's descriptor so the two surfaces cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocManifest {
    /// Documentation source directory, relative to the module root.
    pub doc_root: PathBuf,
    /// Editor icon directory, relative to the module root.
    pub icons_root: PathBuf,
    /// Documented classes, in render order.
    pub classes: Vec<String>,
}

impl DocManifest {
    /// Build a manifest from a module descriptor.
    pub fn from_descriptor(descriptor: &impl ModuleDescriptor) -> Self {
        Self {
            doc_root: PathBuf::from(descriptor.doc_path()),
            icons_root: PathBuf::from(descriptor.icons_path()),
            classes: descriptor
                .doc_classes()
                .iter()
                .map(|class| class.to_string())
                .collect(),
        }
    }

    /// Path of the documentation page for a class.
    pub fn page_path(&self, class: &str) -> PathBuf {
        self.doc_root.join(format!("{}.xml", class))
    }

    /// Path of the editor icon for a class.
    pub fn icon_path(&self, class: &str) -> PathBuf {
        self.icons_root.join(format!("{}.svg", class))
    }

    /// Documentation page paths, in render order.
    pub fn pages(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.classes.iter().map(|class| self.page_path(class))
    }

    /// Compare the documented set against the class database.
    pub fn cross_reference(&self, registry: &ClassRegistry) -> CrossReference {
        let undocumented = registry
            .names()
            .filter(|name| !self.classes.iter().any(|class| class == name))
            .map(str::to_string)
            .collect();
        let unregistered = self
            .classes
            .iter()
            .filter(|class| !registry.contains(class))
            .cloned()
            .collect();

        CrossReference {
            undocumented,
            unregistered,
        }
    }
}

/// Mismatches between a class database and a documentation set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReference {
    /// Registered classes with no documentation page, in registration order.
    pub undocumented: Vec<String>,
    /// Documented classes absent from the database, in render order.
    pub unregistered: Vec<String>,
}

impl CrossReference {
    /// Whether the documented set and the database line up exactly.
    pub fn is_clean(&self) -> bool {
        self.undocumented.is_empty() && self.unregistered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use vx_core::{BuildEnv, VoxelModule};
    use vx_registry::register_voxel_classes;

    fn manifest() -> DocManifest {
        DocManifest::from_descriptor(&VoxelModule)
    }

    #[test]
    fn manifest_mirrors_the_descriptor() {
        let manifest = manifest();
        assert_eq!(manifest.doc_root, Path::new("doc/classes"));
        assert_eq!(manifest.icons_root, Path::new("editor/icons"));
        assert_eq!(manifest.classes.first().map(String::as_str), Some("VoxelServer"));
        assert_eq!(
            manifest.classes.last().map(String::as_str),
            Some("VoxelVoxImporter")
        );
    }

    #[test]
    fn page_and_icon_paths_follow_the_class_name() {
        let manifest = manifest();
        assert_eq!(
            manifest.page_path("VoxelServer"),
            Path::new("doc/classes/VoxelServer.xml")
        );
        assert_eq!(
            manifest.icon_path("VoxelTerrain"),
            Path::new("editor/icons/VoxelTerrain.svg")
        );
    }

    #[test]
    fn pages_iterate_in_render_order() {
        let manifest = manifest();
        let pages: Vec<_> = manifest.pages().collect();
        assert_eq!(pages.len(), manifest.classes.len());
        assert_eq!(pages[0], Path::new("doc/classes/VoxelServer.xml"));
    }

    #[test]
    fn editor_registration_leaves_only_noise_helpers_undocumented() {
        let mut db = ClassRegistry::default();
        let env = BuildEnv {
            editor_build: true,
            ..BuildEnv::default()
        };
        register_voxel_classes(&mut db, &env).unwrap();

        let xref = manifest().cross_reference(&db);
        assert_eq!(
            xref.undocumented,
            vec!["FastNoiseLite".to_string(), "FastNoiseLiteGradient".to_string()]
        );
        assert!(xref.unregistered.is_empty());
        assert!(!xref.is_clean());
    }

    #[test]
    fn runtime_registration_reports_the_importer_unregistered() {
        let mut db = ClassRegistry::default();
        let env = BuildEnv {
            editor_build: false,
            ..BuildEnv::default()
        };
        register_voxel_classes(&mut db, &env).unwrap();

        let xref = manifest().cross_reference(&db);
        assert_eq!(xref.unregistered, vec!["VoxelVoxImporter".to_string()]);
    }

    #[test]
    fn empty_registry_cross_references_everything_as_unregistered() {
        let db = ClassRegistry::default();
        let xref = manifest().cross_reference(&db);
        assert!(xref.undocumented.is_empty());
        assert_eq!(xref.unregistered.len(), manifest().classes.len());
    }
}
