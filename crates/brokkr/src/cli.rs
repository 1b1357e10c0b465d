//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Brokkr - CI release helper for platform compiler binary packages
#[derive(Parser, Debug)]
#[command(name = "brokkr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify (pull request) or sync-and-push (push) pending commits
    PushCommits(PushArgs),

    /// Verify (pull request) or sync-and-push (push) pending tags
    PushTags(PushArgs),

    /// Run the commits sync and the tags sync in sequence
    ///
    /// A failed commits sync does not abort the tags sync; the worst
    /// result decides the exit status.
    PushAll(PushArgs),

    /// Build the native compiler image for a platform package if needed
    BuildImage(BuildImageArgs),

    /// Show version information
    Version(VersionArgs),
}

// Push commands
#[derive(Args, Debug, Clone)]
pub struct PushArgs {
    /// Repository to operate on
    #[arg(short, long, default_value = ".")]
    pub repo: Utf8PathBuf,

    /// Remote to rebase on and push to
    #[arg(long, default_value = "origin")]
    pub remote: String,

    /// CI trigger event name
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event: Option<String>,

    /// Base commit for pull request verification
    #[arg(long, env = "GITHUB_SHA")]
    pub base_commit: Option<String>,

    /// Maximum push attempts
    #[arg(long, env = "BROKKR_PUSH_ATTEMPTS", default_value_t = 3)]
    pub attempts: u32,

    /// Delay between attempts in seconds
    #[arg(long, env = "BROKKR_PUSH_DELAY", default_value_t = 10)]
    pub delay: u64,
}

// Build-image command
#[derive(Args, Debug)]
pub struct BuildImageArgs {
    /// Platform package directory
    #[arg(long)]
    pub package_dir: Utf8PathBuf,

    /// OS label the package targets (linux, osx, windows)
    #[arg(long)]
    pub target_os: String,

    /// Name of the compiler binary within the package
    #[arg(long, default_value = "compiler")]
    pub binary: String,

    /// Build command to run when an image build is needed
    #[arg(long)]
    pub build_cmd: String,

    /// Arguments passed through to the build command
    #[arg(last = true)]
    pub build_args: Vec<String>,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_defaults() {
        let cli = Cli::try_parse_from(["brokkr", "push-commits"]).unwrap();
        match cli.command {
            Commands::PushCommits(args) => {
                assert_eq!(args.remote, "origin");
                assert_eq!(args.attempts, 3);
                assert_eq!(args.delay, 10);
                assert_eq!(args.repo, Utf8PathBuf::from("."));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_push_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "brokkr",
            "push-tags",
            "--remote",
            "upstream",
            "--attempts",
            "5",
            "--delay",
            "1",
            "--event",
            "push",
        ])
        .unwrap();
        match cli.command {
            Commands::PushTags(args) => {
                assert_eq!(args.remote, "upstream");
                assert_eq!(args.attempts, 5);
                assert_eq!(args.delay, 1);
                assert_eq!(args.event.as_deref(), Some("push"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_build_image_trailing_args() {
        let cli = Cli::try_parse_from([
            "brokkr",
            "build-image",
            "--package-dir",
            "packages/compiler-osx",
            "--target-os",
            "osx",
            "--build-cmd",
            "./build-native-compiler.sh",
            "--",
            "--release",
        ])
        .unwrap();
        match cli.command {
            Commands::BuildImage(args) => {
                assert_eq!(args.binary, "compiler");
                assert_eq!(args.target_os, "osx");
                assert_eq!(args.build_args, vec!["--release"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
