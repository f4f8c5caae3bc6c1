// Wire types for the clusters management API

use serde::{Deserialize, Serialize};

/// One page of the versions listing
#[derive(Debug, Deserialize)]
pub struct VersionList {
    #[serde(default)]
    pub items: Vec<VersionItem>,
}

/// An available OpenShift version
#[derive(Debug, Clone, Deserialize)]
pub struct VersionItem {
    /// Bare version number, e.g. "4.12.5"
    pub raw_id: String,

    /// Whether this is the channel group's default install version
    #[serde(rename = "default", default)]
    pub is_default: bool,
}

/// Cluster creation request body
#[derive(Debug, Serialize)]
pub struct ClusterSpec {
    pub name: String,
    pub hypershift: Hypershift,
    pub version: VersionRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Nodes>,
}

#[derive(Debug, Serialize)]
pub struct Hypershift {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct VersionRef {
    pub id: String,
    pub channel_group: String,
}

#[derive(Debug, Serialize)]
pub struct Nodes {
    pub compute_root_volume: RootVolume,
}

#[derive(Debug, Serialize)]
pub struct RootVolume {
    pub aws: AwsVolume,
}

#[derive(Debug, Serialize)]
pub struct AwsVolume {
    /// Size in GiB
    pub size: i64,
}

impl Nodes {
    pub fn with_root_disk_gib(size: i64) -> Self {
        Self {
            compute_root_volume: RootVolume {
                aws: AwsVolume { size },
            },
        }
    }
}

/// Cluster as returned by the API after creation
#[derive(Debug, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: String,
}
