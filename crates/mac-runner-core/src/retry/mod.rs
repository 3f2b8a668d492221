mod retry_policy;

pub use retry_policy::{DEFAULT_MAX_ATTEMPTS, RetryPolicy, trimmed_eq};
