use bevy::prelude::*;
use bitflags::bitflags;

bitflags! {
    /// Registration flags for engine classes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClassFlags: u8 {
        /// Registered for scripting but not instantiable.
        const ABSTRACT = 0b0000_0001;
        /// Only present in editor builds.
        const EDITOR_ONLY = 0b0000_0010;
        /// Also exposed as a named engine singleton.
        const SINGLETON = 0b0000_0100;
    }
}

/// A single class registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassEntry {
    pub name: String,
    pub flags: ClassFlags,
}

/// Error type for class database operations.
#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateClass(String),
    EmptyClassName,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateClass(name) => write!(f, "class already registered: {}", name),
            Self::EmptyClassName => write!(f, "class name must not be empty"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered database of classes a module has registered with the host.
///
/// Registration order is preserved; the host initializes classes in the
/// order the module registered them.
#[derive(Resource, Default, Debug, Clone)]
pub struct ClassRegistry {
    entries: Vec<ClassEntry>,
}

impl ClassRegistry {
    /// Register a class under the given flags.
    ///
    /// Registering the same name twice is an error: the host would
    /// otherwise initialize the class twice.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        flags: ClassFlags,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyClassName);
        }
        if self.contains(&name) {
            return Err(RegistryError::DuplicateClass(name));
        }
        self.entries.push(ClassEntry { name, flags });
        Ok(())
    }

    /// Register a plain instantiable class.
    pub fn register_class(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        self.register(name, ClassFlags::empty())
    }

    /// Register a base class that scripts can reference but not instance.
    pub fn register_abstract(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        self.register(name, ClassFlags::ABSTRACT)
    }

    /// Register a class that is also exposed as a named engine singleton.
    pub fn register_singleton(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        self.register(name, ClassFlags::SINGLETON)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ClassEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassEntry> {
        self.entries.iter()
    }

    /// Class names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every registration. Returns the number of classes removed.
    pub fn unregister_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_preserves_insertion_order() {
        let mut db = ClassRegistry::default();
        db.register_class("Alpha").unwrap();
        db.register_abstract("Beta").unwrap();
        db.register_class("Gamma").unwrap();

        let names: Vec<_> = db.names().collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut db = ClassRegistry::default();
        db.register_class("Alpha").unwrap();

        let err = db.register_class("Alpha").unwrap_err();
        assert_eq!(err, RegistryError::DuplicateClass("Alpha".to_string()));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut db = ClassRegistry::default();
        assert_eq!(
            db.register_class("").unwrap_err(),
            RegistryError::EmptyClassName
        );
        assert!(db.is_empty());
    }

    #[test]
    fn flags_are_kept_per_entry() {
        let mut db = ClassRegistry::default();
        db.register_abstract("Base").unwrap();
        db.register_singleton("Server").unwrap();
        db.register("Importer", ClassFlags::EDITOR_ONLY).unwrap();

        assert!(db.get("Base").unwrap().flags.contains(ClassFlags::ABSTRACT));
        assert!(db.get("Server").unwrap().flags.contains(ClassFlags::SINGLETON));
        assert!(db
            .get("Importer")
            .unwrap()
            .flags
            .contains(ClassFlags::EDITOR_ONLY));
        assert!(db.get("Base").unwrap().flags.intersection(ClassFlags::SINGLETON).is_empty());
    }

    #[test]
    fn unregister_all_empties_the_registry() {
        let mut db = ClassRegistry::default();
        db.register_class("Alpha").unwrap();
        db.register_class("Beta").unwrap();

        assert_eq!(db.unregister_all(), 2);
        assert!(db.is_empty());
        assert_eq!(db.unregister_all(), 0);
    }
}
