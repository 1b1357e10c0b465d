//! Build-image command: conditional native-image build trigger
//!
//! A platform binary package carries its compiler binary once built. The
//! build only runs when the binary is missing and the host is the OS the
//! package targets; the build command inherits this process's stdio so
//! its progress is visible in the CI log.

use anyhow::{bail, Context, Result};
use brokkr_core::platform::HostOs;
use tokio::process::Command;
use tracing::debug;

use crate::cli::BuildImageArgs;
use crate::output;

pub async fn run(args: BuildImageArgs) -> Result<()> {
    let package = args
        .package_dir
        .file_name()
        .unwrap_or(args.package_dir.as_str());

    let binary_path = args.package_dir.join(&args.binary);
    if binary_path.exists() {
        output::dim(&format!("{package} binary already exists"));
        return Ok(());
    }

    let host_label = HostOs::host().map(|os| os.label());
    if host_label != Some(args.target_os.as_str()) {
        output::dim(&format!("{package} build wrong platform"));
        return Ok(());
    }

    output::dim(&format!("{package} building image"));
    debug!(
        "Running: {} {}",
        args.build_cmd,
        args.build_args.join(" ")
    );

    // status() inherits stdin/stdout/stderr from the parent.
    let status = Command::new(&args.build_cmd)
        .args(&args.build_args)
        .current_dir(&args.package_dir)
        .status()
        .await
        .with_context(|| format!("failed to run build command: {}", args.build_cmd))?;

    if !status.success() {
        bail!("build command {} exited with {}", args.build_cmd, status);
    }

    Ok(())
}
