//! Repository status classification
//!
//! A status is decided by running a short sequence of probes and stopping at
//! the first one whose outcome settles the answer. [`classify`] holds that
//! decision logic and is independent of how probes are executed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::text::split_lines;

/// Point-in-time classification of a working tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Unknown,
    /// Nothing to commit and HEAD is published
    Clean,
    /// Untracked, modified or staged changes exist
    Uncommitted,
    /// HEAD does not point at a branch
    Detached,
    /// The upstream branch is behind HEAD
    Unpushed,
    /// No remote branch tracks or contains HEAD
    NoUpstream,
    /// HEAD is published, but not on the mainline branch
    NotMaster,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Clean => "clean",
            Self::Uncommitted => "uncommitted",
            Self::Detached => "detached",
            Self::Unpushed => "unpushed",
            Self::NoUpstream => "no-upstream",
            Self::NotMaster => "not-master",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How "published" is decided once the working tree is clean.
///
/// The two policies are alternatives; neither consults the other's probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// HEAD must be contained in some remote branch, and in the mainline one.
    ///
    /// Yields `Uncommitted`, `NoUpstream`, `NotMaster` or `Clean`.
    #[default]
    RemoteContainment,
    /// HEAD must be a branch with an upstream that has every local commit.
    ///
    /// Yields `Uncommitted`, `NoUpstream`, `Detached`, `Unpushed` or `Clean`.
    UpstreamTracking,
}

/// A single question asked of the repository during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    /// Porcelain working tree status
    WorkingTree,
    /// Whether HEAD resolves to a commit
    HeadCommit,
    /// Remote branches containing HEAD
    RemoteContains,
    /// Whether HEAD is a symbolic ref to a branch
    SymbolicHead,
    /// Name of the upstream tracking ref
    Upstream,
    /// Commits in HEAD missing from the upstream
    Unpushed,
}

impl Probe {
    /// Whether the probe's command references the upstream marker and so
    /// depends on the process-wide escape mode.
    pub fn needs_escape(self) -> bool {
        matches!(self, Self::Upstream | Self::Unpushed)
    }
}

/// Classify a repository by running probes in order until one decides.
///
/// `probe` returns the probe's stdout, or an error when it failed. Failures
/// of `HeadCommit`, `SymbolicHead` and `Upstream` are answers; failures of the
/// other probes are returned as the error, meaning the status is
/// [`Status::Unknown`].
pub fn classify<F>(policy: StatusPolicy, mainline: &str, mut probe: F) -> Result<Status>
where
    F: FnMut(Probe) -> Result<String>,
{
    let tree = probe(Probe::WorkingTree)?;
    if !tree.trim().is_empty() {
        return Ok(Status::Uncommitted);
    }

    // An unborn branch has nothing that could be upstream
    if probe(Probe::HeadCommit).is_err() {
        return Ok(Status::NoUpstream);
    }

    match policy {
        StatusPolicy::RemoteContainment => {
            let listing = probe(Probe::RemoteContains)?;
            let branches = remote_branches(&listing);
            if branches.is_empty() {
                Ok(Status::NoUpstream)
            } else if !branches.contains(&mainline) {
                Ok(Status::NotMaster)
            } else {
                Ok(Status::Clean)
            }
        }
        StatusPolicy::UpstreamTracking => {
            if probe(Probe::SymbolicHead).is_err() {
                return Ok(Status::Detached);
            }
            if probe(Probe::Upstream).is_err() {
                return Ok(Status::NoUpstream);
            }
            let unpushed = probe(Probe::Unpushed)?;
            if split_lines(&unpushed).is_empty() {
                Ok(Status::Clean)
            } else {
                Ok(Status::Unpushed)
            }
        }
    }
}

/// Branch names from `git branch --remote` output.
///
/// Alias lines (`origin/HEAD -> origin/master`) contribute both names.
fn remote_branches(listing: &str) -> Vec<&str> {
    listing
        .lines()
        .flat_map(|line| line.trim().trim_start_matches("* ").split(" -> "))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::HashMap;

    fn failed() -> Error {
        Error::Exec(gitctx_exec::Error::Failed {
            command: "git".into(),
            dir: "/repo".into(),
            code: 1,
            stdout: String::new(),
            stderr: "fatal".into(),
        })
    }

    /// Runs `classify` with canned outcomes; unlisted probes fail the test.
    fn run(
        policy: StatusPolicy,
        outcomes: &[(Probe, Option<&str>)],
    ) -> (Result<Status>, Vec<Probe>) {
        let canned: HashMap<Probe, Option<&str>> = outcomes.iter().copied().collect();
        let mut asked = Vec::new();
        let result = classify(policy, "origin/master", |probe| {
            asked.push(probe);
            match canned.get(&probe) {
                Some(Some(out)) => Ok(out.to_string()),
                Some(None) => Err(failed()),
                None => panic!("unexpected probe {probe:?}"),
            }
        });
        (result, asked)
    }

    #[test]
    fn test_dirty_tree_short_circuits() {
        for policy in [StatusPolicy::RemoteContainment, StatusPolicy::UpstreamTracking] {
            let (status, asked) = run(policy, &[(Probe::WorkingTree, Some("?? new\n"))]);
            assert_eq!(status.unwrap(), Status::Uncommitted);
            assert_eq!(asked, vec![Probe::WorkingTree]);
        }
    }

    #[test]
    fn test_working_tree_failure_is_error() {
        let (status, _) = run(StatusPolicy::RemoteContainment, &[(Probe::WorkingTree, None)]);
        assert!(status.is_err());
    }

    #[test]
    fn test_unborn_head_is_no_upstream() {
        for policy in [StatusPolicy::RemoteContainment, StatusPolicy::UpstreamTracking] {
            let (status, asked) = run(
                policy,
                &[(Probe::WorkingTree, Some("")), (Probe::HeadCommit, None)],
            );
            assert_eq!(status.unwrap(), Status::NoUpstream);
            assert_eq!(asked, vec![Probe::WorkingTree, Probe::HeadCommit]);
        }
    }

    #[test]
    fn test_containment_clean_when_mainline_contains_head() {
        let (status, _) = run(
            StatusPolicy::RemoteContainment,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::RemoteContains, Some("  origin/feature\n  origin/master\n")),
            ],
        );
        assert_eq!(status.unwrap(), Status::Clean);
    }

    #[test]
    fn test_containment_alias_line_counts() {
        let (status, _) = run(
            StatusPolicy::RemoteContainment,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::RemoteContains, Some("  origin/HEAD -> origin/master\n")),
            ],
        );
        assert_eq!(status.unwrap(), Status::Clean);
    }

    #[test]
    fn test_containment_not_master() {
        let (status, _) = run(
            StatusPolicy::RemoteContainment,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::RemoteContains, Some("  origin/newbranch\n  origin/master-old\n")),
            ],
        );
        assert_eq!(status.unwrap(), Status::NotMaster);
    }

    #[test]
    fn test_containment_no_remote_branch() {
        let (status, asked) = run(
            StatusPolicy::RemoteContainment,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::RemoteContains, Some("")),
            ],
        );
        assert_eq!(status.unwrap(), Status::NoUpstream);
        assert!(!asked.contains(&Probe::SymbolicHead));
    }

    #[test]
    fn test_containment_listing_failure_is_error() {
        let (status, _) = run(
            StatusPolicy::RemoteContainment,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::RemoteContains, None),
            ],
        );
        assert!(status.is_err());
    }

    #[test]
    fn test_tracking_detached() {
        let (status, asked) = run(
            StatusPolicy::UpstreamTracking,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::SymbolicHead, None),
            ],
        );
        assert_eq!(status.unwrap(), Status::Detached);
        assert!(!asked.contains(&Probe::Upstream));
    }

    #[test]
    fn test_tracking_without_upstream() {
        let (status, _) = run(
            StatusPolicy::UpstreamTracking,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::SymbolicHead, Some("refs/heads/master\n")),
                (Probe::Upstream, None),
            ],
        );
        assert_eq!(status.unwrap(), Status::NoUpstream);
    }

    #[test]
    fn test_tracking_unpushed_and_clean() {
        let base = [
            (Probe::WorkingTree, Some("")),
            (Probe::HeadCommit, Some("abc\n")),
            (Probe::SymbolicHead, Some("refs/heads/master\n")),
            (Probe::Upstream, Some("origin/master\n")),
        ];

        let mut ahead = base.to_vec();
        ahead.push((Probe::Unpushed, Some("abc\n")));
        assert_eq!(
            run(StatusPolicy::UpstreamTracking, &ahead).0.unwrap(),
            Status::Unpushed
        );

        let mut even = base.to_vec();
        even.push((Probe::Unpushed, Some("\n")));
        assert_eq!(
            run(StatusPolicy::UpstreamTracking, &even).0.unwrap(),
            Status::Clean
        );

        let mut broken = base.to_vec();
        broken.push((Probe::Unpushed, None));
        assert!(run(StatusPolicy::UpstreamTracking, &broken).0.is_err());
    }

    #[test]
    fn test_tracking_never_lists_remote_branches() {
        let (_, asked) = run(
            StatusPolicy::UpstreamTracking,
            &[
                (Probe::WorkingTree, Some("")),
                (Probe::HeadCommit, Some("abc\n")),
                (Probe::SymbolicHead, Some("refs/heads/master\n")),
                (Probe::Upstream, Some("origin/master\n")),
                (Probe::Unpushed, Some("")),
            ],
        );
        assert!(!asked.contains(&Probe::RemoteContains));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::NoUpstream.to_string(), "no-upstream");
        assert_eq!(Status::default(), Status::Unknown);
    }
}
