//! CI trigger context
//!
//! Sync behavior depends on what triggered the pipeline: pull requests get
//! a read-only verification pass, push triggers get a real sync-and-push.
//! The trigger and base commit come from the standard CI environment
//! variables `GITHUB_EVENT_NAME` and `GITHUB_SHA`.

/// What triggered the CI pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Pull request build: verify only, never push
    PullRequest,

    /// Push build: rebase on the remote and push
    Push,

    /// Any other trigger: nothing to do
    Other(String),
}

impl TriggerEvent {
    /// Parse an event name as reported by the CI environment
    pub fn parse(value: &str) -> Self {
        match value {
            "pull_request" => TriggerEvent::PullRequest,
            "push" => TriggerEvent::Push,
            other => TriggerEvent::Other(other.to_string()),
        }
    }
}

/// Read-only CI pipeline context for a sync invocation
#[derive(Debug, Clone, Default)]
pub struct CiContext {
    /// The trigger event, if the pipeline reported one
    pub event: Option<TriggerEvent>,

    /// Base commit for pull request verification
    pub base_commit: Option<String>,
}

impl CiContext {
    /// Create a context from already-resolved values
    pub fn new(event: Option<TriggerEvent>, base_commit: Option<String>) -> Self {
        Self { event, base_commit }
    }

    /// Build the context from `GITHUB_EVENT_NAME` and `GITHUB_SHA`
    pub fn from_env() -> Self {
        Self {
            event: std::env::var("GITHUB_EVENT_NAME")
                .ok()
                .map(|value| TriggerEvent::parse(&value)),
            base_commit: std::env::var("GITHUB_SHA").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_known_events() {
        assert_eq!(TriggerEvent::parse("pull_request"), TriggerEvent::PullRequest);
        assert_eq!(TriggerEvent::parse("push"), TriggerEvent::Push);
    }

    #[test]
    fn test_parse_unknown_event_preserved() {
        assert_eq!(
            TriggerEvent::parse("workflow_dispatch"),
            TriggerEvent::Other("workflow_dispatch".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_from_env_reads_trigger_and_base() {
        std::env::set_var("GITHUB_EVENT_NAME", "pull_request");
        std::env::set_var("GITHUB_SHA", "abc123");

        let ctx = CiContext::from_env();
        assert_eq!(ctx.event, Some(TriggerEvent::PullRequest));
        assert_eq!(ctx.base_commit.as_deref(), Some("abc123"));

        std::env::remove_var("GITHUB_EVENT_NAME");
        std::env::remove_var("GITHUB_SHA");
    }

    #[test]
    #[serial]
    fn test_from_env_without_ci_variables() {
        std::env::remove_var("GITHUB_EVENT_NAME");
        std::env::remove_var("GITHUB_SHA");

        let ctx = CiContext::from_env();
        assert_eq!(ctx.event, None);
        assert_eq!(ctx.base_commit, None);
    }
}
