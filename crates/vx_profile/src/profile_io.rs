use std::fs;
use std::path::Path;

use vx_core::BuildEnv;

/// Default directory for build profiles.
pub const PROFILES_DIR: &str = "assets/profiles";

/// Error type for profile I/O operations.
#[derive(Debug)]
pub enum ProfileError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for ProfileError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for ProfileError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Save a build environment to a RON profile.
pub fn save_profile(path: &Path, env: &BuildEnv) -> Result<(), ProfileError> {
    let pretty_config = ron::ser::PrettyConfig::new();

    let ron_string = ron::ser::to_string_pretty(env, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load a build environment from a RON profile.
pub fn load_profile(path: &Path) -> Result<BuildEnv, ProfileError> {
    let contents = fs::read_to_string(path)?;
    let env: BuildEnv = ron::from_str(&contents)?;
    Ok(env)
}

/// Ensure the profiles directory exists.
pub fn ensure_profiles_dir() -> Result<(), std::io::Error> {
    fs::create_dir_all(PROFILES_DIR)
}

/// List all profile files in the profiles directory.
pub fn list_profiles() -> Result<Vec<std::path::PathBuf>, std::io::Error> {
    let dir = Path::new(PROFILES_DIR);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            profiles.push(path);
        }
    }

    profiles.sort();
    Ok(profiles)
}

/// Generate a filename from a profile name.
pub fn profile_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.ron", sanitized.to_lowercase())
}

/// Get the full path for a profile file.
pub fn profile_path(name: &str) -> std::path::PathBuf {
    Path::new(PROFILES_DIR).join(profile_filename(name))
}
