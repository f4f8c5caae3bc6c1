// Config module for environment-driven settings

use crate::constants;

pub fn config_dir() -> String {
    std::env::var(constants::CONFIG_DIR_ENV).unwrap_or_else(|_| ".".to_string())
}

pub fn profile_path() -> String {
    let dir = config_dir();
    if dir == "." {
        constants::PROFILE_FILE.to_string()
    } else {
        format!("{}/{}", dir, constants::PROFILE_FILE)
    }
}

/// Offline token for the clusters management API, if the user is logged in.
pub fn token() -> Option<String> {
    std::env::var(constants::TOKEN_ENV)
        .ok()
        .filter(|t| !t.is_empty())
}

pub fn ocm_url() -> String {
    std::env::var(constants::URL_ENV).unwrap_or_else(|_| constants::DEFAULT_OCM_URL.to_string())
}
