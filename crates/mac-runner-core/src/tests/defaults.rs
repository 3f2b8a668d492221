use crate::{
    CoreError, ProcessOutput,
    tests::support::{ScriptedRunner, runner_with},
};

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Script answering `defaults read` with "0" until read number `n`, then "1".
fn matching_on_read(n: usize) -> Arc<ScriptedRunner> {
    let reads = AtomicUsize::new(0);
    ScriptedRunner::with_script(move |command| {
        if command.starts_with("defaults read") {
            let read = reads.fetch_add(1, Ordering::SeqCst) + 1;
            ProcessOutput::stdout(if read >= n { "1\n" } else { "0\n" })
        } else {
            ProcessOutput::default()
        }
    })
}

/// WHAT: A write verified on the first read runs one write+read pair
/// WHY: No retries are wasted when the store behaves
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_matching_first_read_when_setting_default_then_single_attempt() {
    // Given: The first readback already matches
    let process = matching_on_read(1);
    let runner = runner_with(&process);
    runner.set_default("com.apple.dock", "autohide", "-bool true", "1");

    // When: Running
    runner.run().await.unwrap();

    // Then: Exactly one write and one read
    assert_eq!(
        process.calls(),
        vec![
            "defaults write com.apple.dock autohide -bool true",
            "defaults read com.apple.dock autohide",
        ]
    );
}

/// WHAT: A write verified on the Nth read stops after N attempts
/// WHY: The store sometimes ignores writes; retrying must stop once it sticks
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_match_on_seventh_read_when_setting_default_then_seven_attempts() {
    // Given: The seventh readback is the first to match
    let process = matching_on_read(7);
    let runner = runner_with(&process);
    runner.set_default("com.apple.dock", "tilesize", "-int 36", "1");

    // When: Running
    runner.run().await.unwrap();

    // Then: Seven write+read pairs, alternating
    let calls = process.calls();
    assert_eq!(calls.len(), 14);
    for pair in calls.chunks(2) {
        assert!(pair[0].starts_with("defaults write"));
        assert!(pair[1].starts_with("defaults read"));
    }
}

/// WHAT: A write verified on the tenth read still succeeds
/// WHY: The last attempt of the budget counts; ten attempts, not nine
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_match_on_tenth_read_when_setting_default_then_ten_attempts_succeed() {
    // Given: Only the tenth readback matches
    let process = matching_on_read(10);
    let runner = runner_with(&process);
    runner.set_default("com.apple.dock", "orientation", "-string left", "1");

    // When: Running
    let result = runner.run().await;

    // Then: Success after the full budget of write+read pairs
    assert!(result.is_ok());
    assert_eq!(process.calls().len(), 20);
}

/// WHAT: A write that never verifies fails after ten attempts
/// WHY: The retry budget is bounded and the failure names the write
#[tokio::test(start_paused = true)]
async fn given_never_matching_read_when_setting_default_then_retry_exhausted() {
    // Given: Readbacks never match
    let process = matching_on_read(usize::MAX);
    let runner = runner_with(&process);
    runner
        .set_default("com.apple.finder", "AppleShowAllFiles", "-bool true", "1")
        .kill_app("Finder");

    // When: Running
    let result = runner.run().await;

    // Then: Ten attempts, then failure naming the write; killall never ran
    match result {
        Err(CoreError::RetryExhausted {
            command, attempts, ..
        }) => {
            assert_eq!(attempts, 10);
            assert_eq!(
                command,
                "defaults write com.apple.finder AppleShowAllFiles -bool true"
            );
        }
        other => panic!("expected RetryExhausted, got {other:?}"),
    }
    let calls = process.calls();
    assert_eq!(calls.len(), 20);
    assert!(!calls.iter().any(|c| c.starts_with("killall")));
}

/// WHAT: A failing attempt does not abort the verified write
/// WHY: Per-attempt errors are logged and retried
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_first_write_errors_when_setting_default_then_second_attempt_succeeds() {
    // Given: The first write reports an error, later calls succeed
    let writes = AtomicUsize::new(0);
    let process = ScriptedRunner::with_script(move |command| {
        if command.starts_with("defaults write") {
            if writes.fetch_add(1, Ordering::SeqCst) == 0 {
                return ProcessOutput::stderr("Could not write domain");
            }
            ProcessOutput::default()
        } else {
            ProcessOutput::stdout("Big Sur\n")
        }
    });
    let runner = runner_with(&process);
    runner.set_default("com.example", "name", "-string \"Big Sur\"", "Big Sur");

    // When: Running
    runner.run().await.unwrap();

    // Then: write (failed), write, read
    let calls = process.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].starts_with("defaults write"));
    assert!(calls[1].starts_with("defaults write"));
    assert!(calls[2].starts_with("defaults read"));
}

/// WHAT: read_default issues a single unverified read
/// WHY: Reads are diagnostic only
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_read_default_when_running_then_grep_read_issued() {
    let process = ScriptedRunner::with_script(|_| ProcessOutput::stdout("    autohide = 1;\n"));
    let runner = runner_with(&process);
    runner.read_default("com.apple.dock", "autohide");

    runner.run().await.unwrap();

    assert_eq!(
        process.calls(),
        vec!["defaults read com.apple.dock | grep autohide"]
    );
}

/// WHAT: delete_default failures propagate immediately
/// WHY: Only verified writes retry
#[tokio::test(start_paused = true)]
async fn given_missing_key_when_deleting_default_then_error_propagates() {
    let process = ScriptedRunner::with_script(|_| {
        ProcessOutput::stderr("Domain (com.apple.dock) not found.")
    });
    let runner = runner_with(&process);
    runner.delete_default("com.apple.dock", "autohide");

    let result = runner.run().await;

    assert!(matches!(result, Err(CoreError::CommandFailed { .. })));
    assert_eq!(process.calls(), vec!["defaults delete com.apple.dock autohide"]);
}
