//! Both brace forms failing is fatal
//!
//! Kept alone in its own test binary: the escape mode is process-wide state.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use gitctx_exec::FailureHandler;
use gitctx_git::escape;
use gitctx_git::{Context, StatusPolicy};
use gitctx_test_utils::doubles::{Level, PanicTerminate, RecordingOutput, ScriptedExecutor};
use pretty_assertions::assert_eq;

#[test]
fn test_undecidable_escape_terminates() {
    let executor = Arc::new(
        ScriptedExecutor::new()
            .respond("status --porcelain", "")
            .respond("rev-parse --verify --quiet HEAD", "1234abcd\n")
            .respond("symbolic-ref --quiet HEAD", "refs/heads/master\n"),
    );
    let output = Arc::new(RecordingOutput::new());
    let handler = FailureHandler::new(output.clone(), Arc::new(PanicTerminate));
    let ctx = Context::with_executor(executor.clone(), handler, &[])
        .with_status_policy(StatusPolicy::UpstreamTracking);

    let result = panic::catch_unwind(AssertUnwindSafe(|| ctx.status("/repo")));
    let payload = result.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert_eq!(message, "terminated with 1");

    let errors = output.messages(Level::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("curly braces"), "{errors:?}");

    assert_eq!(escape::escape_mode(), None);
    assert_eq!(executor.count("rev-parse @{0}"), 1);
    assert_eq!(executor.count("rev-parse @\\{0\\}"), 1);
}
