//! Preference store steps backed by the `defaults` tool.
//!
//! Writes are the only verified step in the pipeline: each one is read back
//! and retried until the stored value matches.

use crate::{CoreError, pipeline::Runner, retry::trimmed_eq};

use std::time::Duration;

use tracing::info;

impl Runner {
    /// Queue a verified write of `params` to `domain`/`key`.
    ///
    /// The step writes with `defaults write`, reads the key back and
    /// compares the trimmed value against `expected`, retrying under the
    /// runner's [`RetryPolicy`](crate::RetryPolicy).
    pub fn set_default(&self, domain: &str, key: &str, params: &str, expected: &str) -> Runner {
        let gateway = self.gateway.clone();
        let policy = self.settings.retry;
        let write_settle = self.settings.write_settle;
        let write_command = format!("defaults write {domain} {key} {params}");
        let read_command = format!("defaults read {domain} {key}");
        let expected = expected.to_string();

        self.register(move || {
            let gateway = gateway.clone();
            let write_command = write_command.clone();
            let read_command = read_command.clone();
            let expected = expected.clone();

            async move {
                let attempts = policy
                    .verify(
                        &write_command,
                        || async {
                            gateway.exec(&write_command, write_settle).await?;
                            Ok::<(), CoreError>(())
                        },
                        || gateway.exec(&read_command, Duration::ZERO),
                        |readback| trimmed_eq(readback, &expected),
                    )
                    .await?;

                info!(command = %write_command, attempts, "Default written");
                Ok(())
            }
        })
    }

    /// Queue a read of `key` in `domain`. The matching lines are logged.
    pub fn read_default(&self, domain: &str, key: &str) -> Runner {
        let gateway = self.gateway.clone();
        let command = format!("defaults read {domain} | grep {key}");

        self.register(move || {
            let gateway = gateway.clone();
            let command = command.clone();

            async move {
                let value = gateway.exec(&command, Duration::ZERO).await?;
                info!(command = %command, value = %value.trim(), "Default read");
                Ok(())
            }
        })
    }

    /// Queue deletion of `key` from `domain`.
    pub fn delete_default(&self, domain: &str, key: &str) -> Runner {
        self.exec_step(
            format!("defaults delete {domain} {key}"),
            self.gateway.default_settle(),
        )
    }
}
