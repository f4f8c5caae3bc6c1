// Validation module for pre-submission input checks
//
// Everything in here is pure: no I/O, no shared state. The create command
// runs these checks before it talks to the clusters management API so that
// input mistakes never turn into rejected requests.

pub mod cluster_name;
pub mod disk_size;
pub mod version;

use thiserror::Error;

use crate::constants::MAX_CLUSTER_NAME_LENGTH;

/// Errors produced by input validation. These are user mistakes, not
/// transient failures; callers surface the message and stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("version '{0}' was not found")]
    VersionNotFound(String),

    #[error("version '{0}' is not supported for hosted clusters")]
    UnsupportedVersion(String),

    #[error("invalid disk size '{0}': expected an integer followed by GiB, GB, TiB, or TB")]
    InvalidUnit(String),

    #[error("expected a quoted size string, got {0}")]
    InvalidType(String),

    #[error("disk size must be between {min} GiB and {max} GiB, got {got} GiB")]
    OutOfRange { got: i64, min: i64, max: i64 },

    #[error(
        "cluster name '{0}' must consist of no more than {max} lowercase alphanumeric \
         characters or '-', start with a letter, and end with an alphanumeric character",
        max = MAX_CLUSTER_NAME_LENGTH
    )]
    InvalidClusterName(String),
}
