// Profile module for optional flag defaults

use serde::Deserialize;

use crate::config;

/// Per-directory profile supplying defaults for flags the user left unset.
/// Values in the `[defaults]` table stay dynamically typed until a command
/// asks for them, so type checking happens at the consuming boundary.
#[derive(Debug, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub defaults: toml::Table,
}

impl Profile {
    /// Load the profile if one exists. A missing file is not an error; a
    /// malformed one is.
    pub fn load_optional() -> anyhow::Result<Option<Self>> {
        let path = config::profile_path();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(toml::from_str(&text)?))
    }
}
