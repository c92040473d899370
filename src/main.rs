//! ymmpx-unpack - unpack a .ymmpx package and open it in YukkuriMovieMaker
//!
//! Usage:
//!   ymmpx-unpack [package]      - Unpack (prompts for a path when omitted)
//!   ymmpx-unpack --associate    - Register .ymmpx with the Windows shell

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use ymm_resource_packager_lib::commands::unpack_cmds;
use ymm_resource_packager_lib::services::core::operation_lock::OperationLock;
use ymm_resource_packager_lib::services::host::{
    ensure_host_available, launch_host, register_association,
};
use ymm_resource_packager_lib::{ConfigService, PackEvent};

/// Overrides the plugin directory normally derived from the executable location.
const PLUGIN_DIR_ENV: &str = "YMM_PLUGIN_DIR";

#[derive(Parser)]
#[command(name = "ymmpx-unpack")]
#[command(version)]
#[command(about = "Unpack a .ymmpx package and open it in YukkuriMovieMaker", long_about = None)]
struct Cli {
    /// Path to the .ymmpx package (prompts when omitted)
    package: Option<PathBuf>,

    /// Register the package extension with the OS shell instead of unpacking
    #[arg(long)]
    associate: bool,
}

/// The unpacker ships in `<plugin_dir>/YMMResourcePackager/`.
fn resolve_plugin_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(PLUGIN_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe().context("Failed to locate the unpacker executable")?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .context("Unpacker is not inside a plugin directory")
}

fn prompt_for_package() -> Result<Option<PathBuf>> {
    println!("Enter the path of a .ymmpx package:");
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    // Paths dragged into a console arrive quoted.
    let trimmed = input.trim().trim_matches('"');
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(trimmed)))
}

fn report(event: &PackEvent) {
    match event {
        PackEvent::Started { total } => println!("Extracting {total} entries..."),
        PackEvent::Progress {
            current,
            total,
            name,
        } => log::debug!("[{current}/{total}] {name}"),
        PackEvent::Finished { path } => println!("Project: {path}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ConfigService::new(resolve_plugin_dir()?);

    if cli.associate {
        let exe = std::env::current_exe().context("Failed to locate the unpacker executable")?;
        let extension = config.get_settings().package_extension;
        register_association(&exe, &extension)?;
        println!(".{extension} association registered.");
        return Ok(());
    }

    println!("=== YMM Resource Unpacker ===");

    let package = match cli.package.filter(|p| p.is_file()) {
        Some(path) => path,
        None => match prompt_for_package()? {
            Some(path) if path.is_file() => path,
            _ => bail!("Package file does not exist."),
        },
    };

    // Fail before touching the disk if there is nothing to open the result with.
    let host_exe = config.host_executable();
    ensure_host_available(&host_exe)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            report(&event);
        }
    });

    let lock = OperationLock::new();
    let result = unpack_cmds::extract_package_cmd(&config, &lock, package, tx).await;
    let _ = printer.await;
    let result = result.context("Unpacking failed")?;

    log::info!(
        "{} files extracted to {}, {} links rewritten",
        result.files_extracted,
        result.dest_path,
        result.links_rewritten
    );

    launch_host(&host_exe, Path::new(&result.project_path))?;
    Ok(())
}
