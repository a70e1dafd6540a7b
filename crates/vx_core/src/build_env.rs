use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Build environment supplied by the host build orchestrator.
///
/// The host owns and mutates this; the module only reads flags from it
/// when deciding eligibility and what to register.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnv {
    /// Whether the current build targets an editor configuration.
    pub editor_build: bool,
    /// Whether the host is producing a development build.
    pub dev_build: bool,
    /// Whether the host wants self-test hooks compiled in.
    pub with_tests: bool,
}

impl Default for BuildEnv {
    fn default() -> Self {
        Self {
            editor_build: true,
            dev_build: false,
            with_tests: false,
        }
    }
}

/// Host-defined platform identifier.
///
/// Opaque to the module: the eligibility check accepts one but never
/// inspects its contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform(pub String);

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
