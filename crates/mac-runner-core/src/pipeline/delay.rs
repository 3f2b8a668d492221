use crate::pipeline::Runner;

use std::time::Duration;

impl Runner {
    /// Queue a pause of `delay`.
    ///
    /// Paces interactions that have no observable completion signal, such
    /// as window animations.
    pub fn wait(&self, delay: Duration) -> Runner {
        self.register(move || async move {
            tokio::time::sleep(delay).await;
            Ok(())
        })
    }
}
