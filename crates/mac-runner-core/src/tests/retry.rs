use crate::{CoreError, CoreResult, RetryPolicy, trimmed_eq};

use std::{
    cell::Cell,
    panic::Location,
    time::Duration,
};

use error_location::ErrorLocation;
use tokio::time::Instant;

/// WHAT: Verification stops at the first matching readback
/// WHY: Extra writes would reset state the caller just verified
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_match_on_third_read_when_verifying_then_three_attempts() {
    // Given: Reads that match on the third call
    let policy = RetryPolicy::default();
    let writes = Cell::new(0u32);
    let reads = Cell::new(0u32);

    // When: Verifying
    let attempt = policy
        .verify(
            "write",
            || async {
                writes.set(writes.get() + 1);
                Ok::<(), CoreError>(())
            },
            || async {
                reads.set(reads.get() + 1);
                Ok::<_, CoreError>(if reads.get() == 3 { "yes" } else { "no" }.to_string())
            },
            |readback| trimmed_eq(readback, "yes"),
        )
        .await
        .unwrap();

    // Then: Exactly three write+read pairs ran
    assert_eq!(attempt, 3);
    assert_eq!(writes.get(), 3);
    assert_eq!(reads.get(), 3);
}

/// WHAT: Attempt errors are swallowed until the budget runs out
/// WHY: Only exhaustion may fail a verified write
#[tokio::test]
async fn given_failing_writes_when_verifying_then_retry_exhausted() {
    // Given: A write that always errors
    let policy = RetryPolicy::new(4, Duration::ZERO);
    let reads = Cell::new(0u32);

    // When: Verifying
    let result = policy
        .verify(
            "defaults write a b c",
            || async {
                Err::<(), _>(CoreError::CommandFailed {
                    command: "defaults write a b c".to_string(),
                    stderr: "denied".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            },
            || async {
                reads.set(reads.get() + 1);
                Ok::<_, CoreError>(String::new())
            },
            |_| true,
        )
        .await;

    // Then: The budget is reported and reads never ran
    assert!(matches!(
        result,
        Err(CoreError::RetryExhausted { attempts: 4, ref command, .. }) if command == "defaults write a b c"
    ));
    assert_eq!(reads.get(), 0);
}

/// WHAT: The inter-attempt delay separates failed attempts only
/// WHY: A verified first attempt must not pay the delay
#[tokio::test(start_paused = true)]
async fn given_attempt_delay_when_all_attempts_fail_then_delay_between_each() {
    // Given: Three attempts with a one second gap
    let policy = RetryPolicy::new(3, Duration::from_secs(1));
    let start = Instant::now();

    // When: Every readback mismatches
    let result: CoreResult<u32> = policy
        .verify(
            "write",
            || async { Ok::<(), CoreError>(()) },
            || async { Ok::<_, CoreError>("no".to_string()) },
            |readback| readback == "yes",
        )
        .await;

    // Then: Two gaps elapsed, not three
    assert!(result.is_err());
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(3));
}

/// WHAT: Readbacks are compared without surrounding whitespace
/// WHY: `defaults read` ends its output with a newline
#[test]
fn given_padded_readback_when_comparing_then_trimmed_equal() {
    assert!(trimmed_eq("1\n", "1"));
    assert!(trimmed_eq("  Big Sur ", "Big Sur"));
    assert!(!trimmed_eq("10\n", "1"));
}
