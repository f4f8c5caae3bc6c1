// OCM client implementation over the clusters_mgmt REST API

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::config;
use crate::constants;
use crate::ocm::ClusterService;
use crate::ocm::http;
use crate::ocm::types::{Cluster, ClusterSpec, VersionItem, VersionList};
use crate::validation::version::ChannelGroup;

pub struct OcmClient {
    base_url: String,
    token: String,
}

impl OcmClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Build a client from the --token flag or the environment.
    pub fn from_env(token_flag: Option<String>) -> Result<Self> {
        let token = token_flag.or_else(config::token).ok_or_else(|| {
            anyhow::anyhow!("Not logged in. Pass --token or set {}.", constants::TOKEN_ENV)
        })?;
        Ok(Self::new(config::ocm_url(), token))
    }
}

#[async_trait]
impl ClusterService for OcmClient {
    async fn list_versions(
        &self,
        channel_group: ChannelGroup,
        hosted_cp: bool,
    ) -> Result<Vec<VersionItem>> {
        let mut search = format!("enabled = 'true' AND channel_group = '{}'", channel_group);
        if hosted_cp {
            search.push_str(" AND hosted_control_plane_enabled = 'true'");
        }

        let url = format!(
            "{}/api/clusters_mgmt/v1/versions?order=raw_id%20desc&search={}",
            self.base_url,
            urlencoding::encode(&search)
        );
        debug!("Listing versions: {}", url);

        let list: VersionList = http::get_json(&url, &self.token).await?;
        Ok(list.items)
    }

    async fn create_cluster(&self, spec: &ClusterSpec) -> Result<Cluster> {
        let url = format!("{}/api/clusters_mgmt/v1/clusters", self.base_url);
        debug!("Creating cluster '{}'", spec.name);
        http::post_json(&url, &self.token, spec).await
    }
}
