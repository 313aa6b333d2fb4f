//! Whole-directory info reports

use std::sync::Arc;

use gitctx_exec::{FailureHandler, SystemExecutor};
use gitctx_git::Context;
use gitctx_test_utils::doubles::{PanicTerminate, RecordingOutput};
use gitctx_test_utils::repo::MockRepo;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn context() -> Context {
    let handler = FailureHandler::new(Arc::new(RecordingOutput::new()), Arc::new(PanicTerminate));
    let executor = Arc::new(SystemExecutor::new(handler.clone()));
    Context::with_executor(executor, handler, &[])
}

fn value<'a>(report: &'a gitctx_git::InfoReport, operation: &str) -> Option<&'a str> {
    report.get(operation).and_then(|e| e.value.as_deref())
}

#[test]
fn test_report_on_repository() {
    let repo = MockRepo::new();
    repo.git(&["tag", "v1.0.0"]);
    let ctx = context();

    let report = ctx.report(repo.path());

    let operations: Vec<_> = report.entries.iter().map(|e| e.operation).collect();
    assert_eq!(
        operations,
        vec![
            "is-git",
            "remote-url",
            "sha",
            "branch",
            "commit-time",
            "tags",
            "latest-tag",
            "status",
            "top-level",
        ]
    );
    assert!(report.entries.iter().all(|e| e.error.is_none()), "{report:?}");

    assert_eq!(value(&report, "is-git"), Some("true"));
    assert_eq!(value(&report, "branch"), Some("master"));
    assert_eq!(value(&report, "tags"), Some("v1.0.0"));
    assert_eq!(value(&report, "latest-tag"), Some("v1.0.0"));
    assert_eq!(value(&report, "status"), Some("clean"));
    assert_eq!(
        value(&report, "sha"),
        Some(repo.git(&["rev-parse", "HEAD"]).trim())
    );
    assert!(report.total_elapsed() >= report.entries[0].elapsed);
}

#[test]
fn test_report_captures_failures() {
    let temp = TempDir::new().unwrap();
    let ctx = context();

    let report = ctx.report(temp.path().join("missing"));

    assert_eq!(value(&report, "is-git"), Some("false"));
    let sha = report.get("sha").unwrap();
    assert!(sha.value.is_none());
    assert!(sha.error.is_some());
}
