// Create cluster command: validate inputs, then submit the creation request

use anyhow::Result;
use log::debug;

use crate::cli::CreateClusterArgs;
use crate::constants;
use crate::ocm::types::{Hypershift, Nodes, VersionRef};
use crate::ocm::{ClusterService, ClusterSpec, OcmClient};
use crate::profile::Profile;
use crate::ui;
use crate::validation::cluster_name;
use crate::validation::disk_size;
use crate::validation::version;

pub async fn create_cluster(args: CreateClusterArgs) -> Result<()> {
    // Local validation runs before the client is even built, so input
    // mistakes are reported without a token or a network round trip.
    cluster_name::validate_cluster_name(&args.cluster_name)?;
    let worker_disk_gib = resolve_worker_disk_size(args.worker_disk_size.as_deref())?;

    let client = OcmClient::from_env(args.token.clone())?;
    submit(&args, worker_disk_gib, &client).await
}

/// Worker disk size comes from the flag, falling back to the profile's
/// `worker-disk-size` default. Unset or zero means the provider default.
fn resolve_worker_disk_size(flag: Option<&str>) -> Result<Option<i64>> {
    let raw = match flag {
        Some(s) => Some(s.to_string()),
        None => match Profile::load_optional()? {
            Some(profile) => match profile.defaults.get(constants::WORKER_DISK_SIZE_KEY) {
                Some(value) => Some(disk_size::require_size_string(value)?.to_string()),
                None => None,
            },
            None => None,
        },
    };

    let Some(raw) = raw else { return Ok(None) };
    let gib = disk_size::parse_disk_size_gib(&raw)?;
    if gib == 0 {
        return Ok(None);
    }
    disk_size::root_disk_size_in_range(&raw)?;
    Ok(Some(gib))
}

async fn submit(
    args: &CreateClusterArgs,
    worker_disk_gib: Option<i64>,
    service: &dyn ClusterService,
) -> Result<()> {
    let channel_group = args.channel_group;

    let pb = ui::spinner(&format!(
        "Fetching available {} versions...",
        channel_group
    ));
    let available = match service.list_versions(channel_group, args.hosted_cp).await {
        Ok(items) => {
            ui::finish_spinner_success(&pb, &format!("{} version(s) available", items.len()));
            items
        }
        Err(e) => {
            ui::finish_spinner_error(&pb, "Failed to fetch available versions");
            return Err(e);
        }
    };

    let requested = match &args.version {
        Some(v) => v.clone(),
        None => {
            let item = available
                .iter()
                .find(|v| v.is_default)
                .or_else(|| available.first())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "No versions available in channel group '{}'",
                        channel_group
                    )
                })?;
            ui::action(&format!("Using version {}", item.raw_id));
            item.raw_id.clone()
        }
    };

    let raw_ids: Vec<String> = available.iter().map(|v| v.raw_id.clone()).collect();
    let version_id = version::validate_version(
        &requested,
        &raw_ids,
        channel_group,
        !args.hosted_cp,
        args.hosted_cp,
    )?;
    debug!("Resolved version id '{}'", version_id);

    let spec = ClusterSpec {
        name: args.cluster_name.clone(),
        hypershift: Hypershift {
            enabled: args.hosted_cp,
        },
        version: VersionRef {
            id: version_id,
            channel_group: channel_group.as_str().to_string(),
        },
        nodes: worker_disk_gib.map(Nodes::with_root_disk_gib),
    };

    if args.dry_run {
        ui::status("[DRY RUN]", &format!("Would create cluster '{}'", spec.name));
        ui::dim(&serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    let cluster = service.create_cluster(&spec).await?;
    ui::success(&format!(
        "Cluster '{}' created with ID {}",
        cluster.name, cluster.id
    ));
    if !cluster.state.is_empty() {
        ui::dim(&format!("State: {}", cluster.state));
    }
    Ok(())
}
