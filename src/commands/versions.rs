// Versions command for listing available OpenShift versions

use anyhow::Result;

use crate::cli::VersionsArgs;
use crate::ocm::{ClusterService, OcmClient};
use crate::ui;

pub async fn list_versions(args: VersionsArgs) -> Result<()> {
    let client = OcmClient::from_env(args.token.clone())?;
    run(&args, &client).await
}

async fn run(args: &VersionsArgs, service: &dyn ClusterService) -> Result<()> {
    let pb = ui::spinner(&format!(
        "Fetching available {} versions...",
        args.channel_group
    ));
    let versions = match service.list_versions(args.channel_group, args.hosted_cp).await {
        Ok(items) => {
            ui::finish_spinner_success(
                &pb,
                &format!(
                    "{} version(s) in channel group '{}'",
                    items.len(),
                    args.channel_group
                ),
            );
            items
        }
        Err(e) => {
            ui::finish_spinner_error(&pb, "Failed to fetch available versions");
            return Err(e);
        }
    };

    if versions.is_empty() {
        ui::dim("No versions available");
        return Ok(());
    }

    for version in &versions {
        if version.is_default {
            ui::line(&format!("{} (default)", version.raw_id));
        } else {
            ui::line(&version.raw_id);
        }
    }
    Ok(())
}
