// Constants module for shared configuration values

pub const PROFILE_FILE: &str = "occ.toml";
pub const TOKEN_ENV: &str = "OCC_TOKEN";
pub const URL_ENV: &str = "OCC_URL";
pub const CONFIG_DIR_ENV: &str = "OCC_DIR";
pub const DEFAULT_OCM_URL: &str = "https://api.openshift.com";

/// Prefix of normalized version identifiers understood by the clusters API.
pub const VERSION_ID_PREFIX: &str = "openshift-v";

/// Lowest version that can run a hosted control plane. The `-0.a` prerelease
/// floor keeps 4.12 nightlies and release candidates above the cutoff.
pub const MIN_HOSTED_CP_VERSION: &str = "4.12.0-0.a";

/// Bounds for worker node root volumes, in GiB.
pub const MIN_ROOT_DISK_SIZE_GIB: i64 = 100;
pub const MAX_ROOT_DISK_SIZE_GIB: i64 = 65536;

/// Cluster names become DNS labels, so RFC 1035 limits apply.
pub const MAX_CLUSTER_NAME_LENGTH: usize = 54;

/// Profile key consulted when --worker-disk-size is not given.
pub const WORKER_DISK_SIZE_KEY: &str = "worker-disk-size";
