//! Command implementations for gitctx-cli

pub mod info;
pub mod query;
pub mod remote;

pub use info::run_info;
pub use query::{
    run_branch, run_commit_time, run_is_git, run_latest_tag, run_remote_url, run_sha, run_status,
    run_tags, run_top_level,
};
pub use remote::{run_checkout, run_clone, run_pull};
