//! Git command execution
//!
//! All git operations run through `run_git`, which executes `git -C <repo>`
//! asynchronously and maps a non-zero exit status to a `GitOperation` error
//! carrying the command's stderr.

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

/// Run a git command in `repo` and return its stdout.
///
/// # Errors
/// Returns `GitNotFound` if the git binary is not on PATH, `GitOperation`
/// if the command exits with a non-zero status.
pub async fn run_git(repo: &Utf8Path, args: &[&str]) -> Result<String> {
    debug!("Running: git -C {} {}", repo, args.join(" "));

    let output = Command::new("git")
        .arg("-C")
        .arg(repo.as_str())
        .args(args)
        .output()
        .await
        .map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::GitNotFound
            } else {
                Error::Io(err)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "git {}: {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
