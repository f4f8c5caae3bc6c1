// Version validation against the channel group and cluster topology

use std::fmt;

use clap::ValueEnum;
use semver::Version;

use super::ValidationError;
use crate::constants::{MIN_HOSTED_CP_VERSION, VERSION_ID_PREFIX};

lazy_static::lazy_static! {
    static ref MIN_HOSTED_CP: Version =
        Version::parse(MIN_HOSTED_CP_VERSION).expect("hosted control plane floor is valid semver");
}

/// Release channel group a version belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ChannelGroup {
    #[default]
    Stable,
    Fast,
    Candidate,
    Nightly,
}

impl ChannelGroup {
    /// Suffix appended to the normalized version identifier. Only candidate
    /// and nightly versions are tagged; stable and fast share untagged IDs.
    pub fn suffix(self) -> &'static str {
        match self {
            ChannelGroup::Nightly => "-nightly",
            ChannelGroup::Candidate => "-candidate",
            ChannelGroup::Stable | ChannelGroup::Fast => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelGroup::Stable => "stable",
            ChannelGroup::Fast => "fast",
            ChannelGroup::Candidate => "candidate",
            ChannelGroup::Nightly => "nightly",
        }
    }
}

impl fmt::Display for ChannelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a requested OpenShift version against the available versions for
/// a channel group and resolve it to a normalized version identifier.
///
/// Matching is exact, so nightly build suffixes like
/// `-0.nightly-2023-04-10-222146` carry through to the identifier verbatim.
/// Hosted control planes require at least 4.12; classic clusters accept any
/// available version.
pub fn validate_version(
    requested: &str,
    available: &[String],
    channel_group: ChannelGroup,
    is_classic: bool,
    is_hosted_cp: bool,
) -> Result<String, ValidationError> {
    debug_assert!(is_classic != is_hosted_cp);

    if !available.iter().any(|v| v == requested) {
        return Err(ValidationError::VersionNotFound(requested.to_string()));
    }

    // An entry that does not parse as a version can never match.
    let parsed = Version::parse(requested)
        .map_err(|_| ValidationError::VersionNotFound(requested.to_string()))?;

    if is_hosted_cp && parsed < *MIN_HOSTED_CP {
        return Err(ValidationError::UnsupportedVersion(requested.to_string()));
    }

    Ok(format!(
        "{}{}{}",
        VERSION_ID_PREFIX,
        requested,
        channel_group.suffix()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_hosted_supported_version() {
        let v = validate_version(
            "4.12.5",
            &available(&["4.12.5"]),
            ChannelGroup::Stable,
            false,
            true,
        );
        assert_eq!(v, Ok("openshift-v4.12.5".to_string()));
    }

    #[test]
    fn test_hosted_supported_nightly_preserves_build_suffix() {
        let v = validate_version(
            "4.12.0-0.nightly-2023-04-10-222146",
            &available(&["4.12.0-0.nightly-2023-04-10-222146"]),
            ChannelGroup::Nightly,
            false,
            true,
        );
        assert_eq!(
            v,
            Ok("openshift-v4.12.0-0.nightly-2023-04-10-222146-nightly".to_string())
        );
    }

    #[test]
    fn test_hosted_unsupported_nightly() {
        let v = validate_version(
            "4.11.0-0.nightly-2022-10-17-040259",
            &available(&["4.11.0-0.nightly-2022-10-17-040259"]),
            ChannelGroup::Nightly,
            false,
            true,
        );
        assert_eq!(
            v,
            Err(ValidationError::UnsupportedVersion(
                "4.11.0-0.nightly-2022-10-17-040259".to_string()
            ))
        );
    }

    #[test]
    fn test_hosted_next_major_release_candidate() {
        let v = validate_version(
            "4.13.0-rc.2",
            &available(&["4.13.0-rc.2"]),
            ChannelGroup::Candidate,
            false,
            true,
        );
        assert_eq!(v, Ok("openshift-v4.13.0-rc.2-candidate".to_string()));
    }

    #[test]
    fn test_hosted_unsupported_version() {
        let v = validate_version(
            "4.11.5",
            &available(&["4.11.5"]),
            ChannelGroup::Stable,
            false,
            true,
        );
        assert_eq!(
            v,
            Err(ValidationError::UnsupportedVersion("4.11.5".to_string()))
        );
    }

    #[test]
    fn test_hosted_boundary_version_is_supported() {
        let v = validate_version(
            "4.12.0",
            &available(&["4.12.0"]),
            ChannelGroup::Stable,
            false,
            true,
        );
        assert_eq!(v, Ok("openshift-v4.12.0".to_string()));
    }

    #[test]
    fn test_malformed_version_is_not_found_even_when_listed() {
        let v = validate_version(
            "foo.bar",
            &available(&["foo.bar"]),
            ChannelGroup::Stable,
            false,
            true,
        );
        assert_eq!(v, Err(ValidationError::VersionNotFound("foo.bar".to_string())));
    }

    #[test]
    fn test_version_absent_from_available_list() {
        let v = validate_version(
            "4.12.5",
            &available(&["4.12.4", "4.12.6"]),
            ChannelGroup::Stable,
            true,
            false,
        );
        assert_eq!(v, Err(ValidationError::VersionNotFound("4.12.5".to_string())));
    }

    #[test]
    fn test_classic_supported_version() {
        let v = validate_version(
            "4.11.0",
            &available(&["4.11.0"]),
            ChannelGroup::Stable,
            true,
            false,
        );
        assert_eq!(v, Ok("openshift-v4.11.0".to_string()));
    }

    #[test]
    fn test_fast_channel_adds_no_suffix() {
        let v = validate_version(
            "4.12.5",
            &available(&["4.12.5"]),
            ChannelGroup::Fast,
            true,
            false,
        );
        assert_eq!(v, Ok("openshift-v4.12.5".to_string()));
    }

    #[test]
    fn test_error_messages() {
        let not_found = validate_version(
            "4.99.0",
            &available(&[]),
            ChannelGroup::Stable,
            true,
            false,
        )
        .unwrap_err();
        assert_eq!(not_found.to_string(), "version '4.99.0' was not found");

        let unsupported = validate_version(
            "4.11.5",
            &available(&["4.11.5"]),
            ChannelGroup::Stable,
            false,
            true,
        )
        .unwrap_err();
        assert_eq!(
            unsupported.to_string(),
            "version '4.11.5' is not supported for hosted clusters"
        );
    }
}
