//! Push commands: pending commit/tag synchronization

use anyhow::Result;
use brokkr_core::types::RetryPolicy;
use brokkr_sync::{sync_pending, CiContext, SyncKind, SyncOptions, SyncOutcome, TriggerEvent};

use crate::cli::PushArgs;
use crate::output;

/// Run the sync flow for one kind.
///
/// Returns the outcome; translating a failing outcome into the process
/// exit status is the caller's job.
pub async fn run(args: PushArgs, kind: SyncKind) -> Result<SyncOutcome> {
    let ctx = CiContext::new(
        args.event.as_deref().map(TriggerEvent::parse),
        args.base_commit.clone(),
    );
    let opts = SyncOptions {
        remote: args.remote.clone(),
        policy: RetryPolicy::fixed(args.attempts, args.delay),
    };

    let syncing = matches!(ctx.event, Some(TriggerEvent::Push));
    let pb = syncing.then(|| {
        output::spinner(&format!(
            "Syncing {} to {}",
            kind.noun(),
            opts.remote
        ))
    });

    let result = sync_pending(&args.repo, kind, &ctx, &opts).await;

    // Clear the spinner before any output, including the error path.
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let outcome = result?;
    report(kind, &outcome);
    Ok(outcome)
}

/// Run the commits sync, then the tags sync, regardless of the first
/// outcome. Fatal errors (verification failures) still abort immediately.
pub async fn run_all(args: PushArgs) -> Result<SyncOutcome> {
    let commits = run(args.clone(), SyncKind::Commits).await?;
    let tags = run(args, SyncKind::Tags).await?;

    // Worst result wins.
    if commits.is_failure() {
        Ok(commits)
    } else {
        Ok(tags)
    }
}

fn report(kind: SyncKind, outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::Verified => {
            output::success(&format!("Verified pending {}", kind.noun()));
        }
        SyncOutcome::Pushed { attempts } => {
            output::success(&format!(
                "Pushed pending {} ({} attempt(s))",
                kind.noun(),
                attempts
            ));
        }
        SyncOutcome::Skipped => {
            output::info(&format!(
                "No CI sync trigger for {}; nothing to do",
                kind.noun()
            ));
        }
        // The exhaustion line is logged by the sync flow itself.
        SyncOutcome::Exhausted => {}
    }
}
