//! Packaging entry points for the plugin UI.
//!
//! The UI owns dialogs and the output-path policy; these take final paths and
//! stream `PackEvent`s back over an unbounded channel.

use crate::services::archive::{self, BuildResult, PackEvent};
use crate::services::config::ConfigService;
use crate::services::core::operation_lock::OperationLock;
use crate::services::exclusions::{ExcludeItem, ExclusionStore};
use crate::services::project;
use crate::types::errors::{PackError, PackResult};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedSender;

/// Every resource the project references, with its saved exclusion flag.
pub fn list_resources_cmd(
    config: &ConfigService,
    descriptor_path: &Path,
) -> PackResult<Vec<ExcludeItem>> {
    let saved = ExclusionStore::new(config.exclusion_file()).load()?;
    project::list_resources(descriptor_path, &saved)
}

/// Persist the list as edited in the review window.
pub fn save_exclusions_cmd(config: &ConfigService, items: &[ExcludeItem]) -> PackResult<()> {
    ExclusionStore::new(config.exclusion_file()).save_reviewed(items)
}

/// Build `output_path` off the calling task, applying the saved exclusions.
pub async fn build_package_cmd(
    config: &ConfigService,
    lock: &OperationLock,
    descriptor_path: PathBuf,
    output_path: PathBuf,
    on_progress: UnboundedSender<PackEvent>,
) -> PackResult<BuildResult> {
    let _guard = lock.acquire().await?;

    let settings = config.get_settings();
    let exclusions = ExclusionStore::new(config.exclusion_file()).load()?;

    tokio::task::spawn_blocking(move || {
        archive::build_package(
            &descriptor_path,
            &output_path,
            &settings,
            &exclusions,
            |event| {
                let _ = on_progress.send(event);
            },
        )
    })
    .await
    .map_err(|e| PackError::Io(format!("Packaging task failed: {e}")))?
}
