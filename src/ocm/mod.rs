// Client module for the clusters management API

pub mod client;
pub mod http;
pub mod types;

pub use client::OcmClient;
pub use types::{Cluster, ClusterSpec, VersionItem};

use anyhow::Result;

use crate::validation::version::ChannelGroup;

/// Backend performing cluster management calls. Commands depend on this
/// trait so tests can substitute a canned implementation.
#[async_trait::async_trait]
pub trait ClusterService: Send + Sync {
    /// List enabled versions for a channel group, newest first.
    async fn list_versions(
        &self,
        channel_group: ChannelGroup,
        hosted_cp: bool,
    ) -> Result<Vec<VersionItem>>;

    /// Submit a cluster creation request.
    async fn create_cluster(&self, spec: &ClusterSpec) -> Result<Cluster>;
}
