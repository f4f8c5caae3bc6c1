// CLI module for handling command-line interface

use clap::{Args, Parser, Subcommand};

use crate::validation::version::ChannelGroup;

#[derive(Parser)]
#[command(name = "occ", version)]
#[command(about = "Create managed OpenShift clusters")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a resource
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },
    /// List available OpenShift versions
    Versions(VersionsArgs),
}

#[derive(Subcommand)]
pub enum CreateResource {
    /// Create a managed cluster
    Cluster(CreateClusterArgs),
}

#[derive(Args)]
pub struct CreateClusterArgs {
    /// Name of the cluster
    #[arg(long)]
    pub cluster_name: String,

    /// OpenShift version to install (defaults to the channel group default)
    #[arg(long)]
    pub version: Option<String>,

    /// Release channel group to install from
    #[arg(long, value_enum, default_value_t)]
    pub channel_group: ChannelGroup,

    /// Provision a hosted control plane cluster
    #[arg(long)]
    pub hosted_cp: bool,

    /// Worker node root disk size, e.g. "128 GiB"
    #[arg(long)]
    pub worker_disk_size: Option<String>,

    /// Offline token for the clusters management API
    #[arg(long)]
    pub token: Option<String>,

    /// Validate and print the request without submitting it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct VersionsArgs {
    /// Release channel group to list
    #[arg(long, value_enum, default_value_t)]
    pub channel_group: ChannelGroup,

    /// Only versions that can run a hosted control plane
    #[arg(long)]
    pub hosted_cp: bool,

    /// Offline token for the clusters management API
    #[arg(long)]
    pub token: Option<String>,
}
