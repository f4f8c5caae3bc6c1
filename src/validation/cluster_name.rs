// Cluster name validation

use super::ValidationError;
use crate::constants::MAX_CLUSTER_NAME_LENGTH;

/// Cluster names end up as DNS labels in the cluster's domain, so the usual
/// RFC 1035 shape applies: lowercase alphanumerics and dashes, starting with
/// a letter and ending with an alphanumeric.
pub fn validate_cluster_name(name: &str) -> Result<(), ValidationError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_CLUSTER_NAME_LENGTH
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.ends_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidClusterName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["a", "my-cluster", "my-cluster1", "c0-0d"] {
            assert_eq!(validate_cluster_name(name), Ok(()), "name: {:?}", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        let too_long = "a".repeat(MAX_CLUSTER_NAME_LENGTH + 1);
        for name in ["", "My-Cluster", "1cluster", "-cluster", "a-", "a_b", too_long.as_str()] {
            assert!(validate_cluster_name(name).is_err(), "name: {:?}", name);
        }
    }

    #[test]
    fn test_max_length_name_is_accepted() {
        let name = "a".repeat(MAX_CLUSTER_NAME_LENGTH);
        assert_eq!(validate_cluster_name(&name), Ok(()));
    }
}
