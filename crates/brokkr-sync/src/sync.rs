//! Pending commit/tag synchronization flows
//!
//! Two flows share one primitive: on pull request triggers the pending
//! changes are only verified (read-only, failure is fatal), on push
//! triggers the branch is rebased on the remote and pushed with a bounded
//! fixed-delay retry. Commits and tags are two configurations of the same
//! flow; each kind retries itself.

use std::sync::atomic::{AtomicU32, Ordering};

use brokkr_core::retry::{RetryError, RetryExecutorBuilder, TracingObserver};
use brokkr_core::types::RetryPolicy;
use camino::Utf8Path;
use tracing::{debug, error, info};

use crate::ci::{CiContext, TriggerEvent};
use crate::cmd;
use crate::error::{Error, Result};

/// What is being synchronized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    /// Pending commits on the current branch
    Commits,

    /// Pending tags
    Tags,
}

impl SyncKind {
    /// Human-readable noun for log lines
    pub fn noun(&self) -> &'static str {
        match self {
            SyncKind::Commits => "commit(s)",
            SyncKind::Tags => "tag(s)",
        }
    }

    /// Arguments of the push step for this kind
    fn push_args<'a>(&self, remote: &'a str) -> Vec<&'a str> {
        match self {
            SyncKind::Commits => vec!["push", remote],
            SyncKind::Tags => vec!["push", remote, "--tags"],
        }
    }
}

/// Options for a sync invocation
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Remote to rebase on and push to
    pub remote: String,

    /// Retry policy for the rebase-and-push action
    pub policy: RetryPolicy,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            policy: RetryPolicy::default(),
        }
    }
}

/// Result of a sync invocation
///
/// `Exhausted` is an outcome, not an error: the caller decides how to
/// surface it, and sibling work in the same process keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Pull request trigger: pending changes verified, nothing pushed
    Verified,

    /// Push trigger: rebase-and-push succeeded on attempt `attempts`
    Pushed {
        /// Attempts it took, including the successful one
        attempts: u32,
    },

    /// Push trigger: every attempt failed and the budget is used up
    Exhausted,

    /// No recognized CI trigger, nothing to do
    Skipped,
}

impl SyncOutcome {
    /// Whether this outcome should fail the process exit status
    pub fn is_failure(&self) -> bool {
        matches!(self, SyncOutcome::Exhausted)
    }
}

/// Verify or synchronize pending commits/tags depending on the CI trigger.
///
/// - Pull request: run the read-only verification command; failure aborts
///   immediately with an error, nothing is retried.
/// - Push: rebase on `opts.remote` and push, retrying per `opts.policy`.
///   Using up the budget yields `Ok(SyncOutcome::Exhausted)`.
/// - Anything else: `Ok(SyncOutcome::Skipped)`.
pub async fn sync_pending(
    repo: &Utf8Path,
    kind: SyncKind,
    ctx: &CiContext,
    opts: &SyncOptions,
) -> Result<SyncOutcome> {
    match &ctx.event {
        Some(TriggerEvent::PullRequest) => verify_pending(repo, kind, ctx).await,
        Some(TriggerEvent::Push) => push_pending(repo, kind, opts).await,
        other => {
            debug!(event = ?other, "no sync trigger, skipping {}", kind.noun());
            Ok(SyncOutcome::Skipped)
        }
    }
}

/// Read-only verification pass for pull request builds.
async fn verify_pending(repo: &Utf8Path, kind: SyncKind, ctx: &CiContext) -> Result<SyncOutcome> {
    info!("Verifying pending {}...", kind.noun());

    match kind {
        SyncKind::Commits => {
            let base = ctx
                .base_commit
                .as_deref()
                .ok_or(Error::MissingBaseCommit)?;
            let range = format!("{base}..HEAD");
            let diff = cmd::run_git(repo, &["diff", "--stat", &range]).await?;
            if !diff.trim().is_empty() {
                info!("{}", diff.trim_end());
            }
        }
        SyncKind::Tags => {
            let tags = cmd::run_git(repo, &["tag", "--list"]).await?;
            if !tags.trim().is_empty() {
                info!("{}", tags.trim_end());
            }
        }
    }

    Ok(SyncOutcome::Verified)
}

/// Rebase on the remote and push, retrying per the policy.
async fn push_pending(repo: &Utf8Path, kind: SyncKind, opts: &SyncOptions) -> Result<SyncOutcome> {
    info!("Syncing to {} and pushing {}...", opts.remote, kind.noun());

    let remote = opts.remote.as_str();
    let attempts = AtomicU32::new(0);

    let executor = RetryExecutorBuilder::new()
        .with_policy(opts.policy.clone())
        .with_observer(TracingObserver::new("Push"))
        .build();

    let result = executor
        .execute(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                cmd::run_git(repo, &["pull", remote, "--rebase"]).await?;
                cmd::run_git(repo, &kind.push_args(remote)).await?;
                Ok::<(), Error>(())
            }
        })
        .await;

    match result {
        Ok(()) => {
            let attempts = attempts.load(Ordering::SeqCst);
            info!("Pushed {} to {}", kind.noun(), opts.remote);
            Ok(SyncOutcome::Pushed { attempts })
        }
        Err(RetryError::Exhausted { .. }) => {
            error!("Could not push {} to {}.", kind.noun(), opts.remote);
            Ok(SyncOutcome::Exhausted)
        }
        Err(RetryError::NonRetryable(err)) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brokkr_core::types::RetryStrategy;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(dir.path()).unwrap()
    }

    /// A policy that fails fast in tests.
    fn quick_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            strategy: RetryStrategy::None,
            delay_ms: 0,
        }
    }

    async fn commit(repo: &Utf8Path, message: &str) {
        cmd::run_git(
            repo,
            &[
                "-c",
                "user.name=CI",
                "-c",
                "user.email=ci@example.com",
                "commit",
                "--allow-empty",
                "-m",
                message,
            ],
        )
        .await
        .unwrap();
    }

    /// Create a work repo with one commit, pushed to a local bare remote.
    async fn repo_with_remote(temp_dir: &TempDir) -> (camino::Utf8PathBuf, camino::Utf8PathBuf) {
        let root = utf8(temp_dir);
        let work = root.join("work");
        let bare = root.join("remote.git");

        std::fs::create_dir(&work).unwrap();
        cmd::run_git(root, &["init", "--bare", "remote.git"])
            .await
            .unwrap();
        cmd::run_git(&work, &["init", "--initial-branch=main"])
            .await
            .unwrap();
        commit(&work, "initial").await;
        cmd::run_git(&work, &["remote", "add", "origin", bare.as_str()])
            .await
            .unwrap();
        cmd::run_git(&work, &["push", "-u", "origin", "main"])
            .await
            .unwrap();

        (work, bare)
    }

    fn push_ctx() -> CiContext {
        CiContext::new(Some(TriggerEvent::Push), None)
    }

    #[tokio::test]
    async fn test_push_trigger_pushes_pending_commits() {
        let temp_dir = TempDir::new().unwrap();
        let (work, bare) = repo_with_remote(&temp_dir).await;
        commit(&work, "pending change").await;

        let opts = SyncOptions {
            remote: "origin".to_string(),
            policy: quick_policy(3),
        };
        let outcome = sync_pending(&work, SyncKind::Commits, &push_ctx(), &opts)
            .await
            .unwrap();

        assert_eq!(outcome, SyncOutcome::Pushed { attempts: 1 });

        let count = cmd::run_git(&bare, &["rev-list", "--count", "main"])
            .await
            .unwrap();
        assert_eq!(count.trim(), "2");
    }

    #[tokio::test]
    async fn test_push_trigger_pushes_pending_tags() {
        let temp_dir = TempDir::new().unwrap();
        let (work, bare) = repo_with_remote(&temp_dir).await;
        cmd::run_git(&work, &["tag", "v1.0.0"]).await.unwrap();

        let opts = SyncOptions {
            remote: "origin".to_string(),
            policy: quick_policy(3),
        };
        let outcome = sync_pending(&work, SyncKind::Tags, &push_ctx(), &opts)
            .await
            .unwrap();

        assert!(matches!(outcome, SyncOutcome::Pushed { .. }));

        let tags = cmd::run_git(&bare, &["tag", "--list"]).await.unwrap();
        assert!(tags.contains("v1.0.0"));
    }

    #[tokio::test]
    async fn test_unreachable_remote_exhausts_budget_without_error() {
        let temp_dir = TempDir::new().unwrap();
        let (work, _bare) = repo_with_remote(&temp_dir).await;
        let missing = utf8(&temp_dir).join("missing.git");
        cmd::run_git(&work, &["remote", "set-url", "origin", missing.as_str()])
            .await
            .unwrap();

        let opts = SyncOptions {
            remote: "origin".to_string(),
            policy: quick_policy(2),
        };
        let outcome = sync_pending(&work, SyncKind::Commits, &push_ctx(), &opts)
            .await
            .unwrap();

        // Exhaustion is a recorded outcome, not a hard error.
        assert_eq!(outcome, SyncOutcome::Exhausted);
        assert!(outcome.is_failure());
    }

    #[tokio::test]
    async fn test_pull_request_trigger_verifies_commits_without_pushing() {
        let temp_dir = TempDir::new().unwrap();
        let (work, bare) = repo_with_remote(&temp_dir).await;
        let base = cmd::run_git(&work, &["rev-parse", "HEAD"]).await.unwrap();
        commit(&work, "pr change").await;

        let ctx = CiContext::new(
            Some(TriggerEvent::PullRequest),
            Some(base.trim().to_string()),
        );
        let outcome = sync_pending(&work, SyncKind::Commits, &ctx, &SyncOptions::default())
            .await
            .unwrap();

        assert_eq!(outcome, SyncOutcome::Verified);

        // The sync action never ran: the remote still has a single commit.
        let count = cmd::run_git(&bare, &["rev-list", "--count", "main"])
            .await
            .unwrap();
        assert_eq!(count.trim(), "1");
    }

    #[tokio::test]
    async fn test_pull_request_trigger_verifies_tags() {
        let temp_dir = TempDir::new().unwrap();
        let (work, _bare) = repo_with_remote(&temp_dir).await;
        cmd::run_git(&work, &["tag", "v0.1.0"]).await.unwrap();

        let ctx = CiContext::new(Some(TriggerEvent::PullRequest), None);
        let outcome = sync_pending(&work, SyncKind::Tags, &ctx, &SyncOptions::default())
            .await
            .unwrap();

        assert_eq!(outcome, SyncOutcome::Verified);
    }

    #[tokio::test]
    async fn test_pull_request_verification_without_base_commit_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let (work, _bare) = repo_with_remote(&temp_dir).await;

        let ctx = CiContext::new(Some(TriggerEvent::PullRequest), None);
        let err = sync_pending(&work, SyncKind::Commits, &ctx, &SyncOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingBaseCommit));
    }

    #[tokio::test]
    async fn test_pull_request_verification_failure_is_fatal_not_retried() {
        let temp_dir = TempDir::new().unwrap();
        let (work, _bare) = repo_with_remote(&temp_dir).await;

        let ctx = CiContext::new(
            Some(TriggerEvent::PullRequest),
            Some("deadbeefdeadbeefdeadbeefdeadbeefdeadbeef".to_string()),
        );
        let err = sync_pending(&work, SyncKind::Commits, &ctx, &SyncOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::GitOperation { .. }));
    }

    #[tokio::test]
    async fn test_unknown_trigger_skips_without_touching_the_repo() {
        // The path is not even a repository: if any git command ran, the
        // flow would error rather than skip.
        let temp_dir = TempDir::new().unwrap();
        let not_a_repo = utf8(&temp_dir);

        for ctx in [
            CiContext::new(None, None),
            CiContext::new(
                Some(TriggerEvent::Other("workflow_dispatch".to_string())),
                None,
            ),
        ] {
            let outcome = sync_pending(not_a_repo, SyncKind::Commits, &ctx, &SyncOptions::default())
                .await
                .unwrap();
            assert_eq!(outcome, SyncOutcome::Skipped);
            assert!(!outcome.is_failure());
        }
    }
}
