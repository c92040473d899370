//! Unpacking entry point for the CLI.

use crate::services::archive::{self, ExtractionResult, PackEvent};
use crate::services::config::ConfigService;
use crate::services::core::operation_lock::OperationLock;
use crate::types::errors::{PackError, PackResult};
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedSender;

/// Unpack into the configured extraction root and return the launchable project path.
pub async fn extract_package_cmd(
    config: &ConfigService,
    lock: &OperationLock,
    package_path: PathBuf,
    on_progress: UnboundedSender<PackEvent>,
) -> PackResult<ExtractionResult> {
    let _guard = lock.acquire().await?;

    let settings = config.get_settings();
    let destination_root = config.extraction_root();

    tokio::task::spawn_blocking(move || {
        archive::extract_package(&package_path, &destination_root, &settings, |event| {
            let _ = on_progress.send(event);
        })
    })
    .await
    .map_err(|e| PackError::Io(format!("Unpacking task failed: {e}")))?
}
