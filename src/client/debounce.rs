use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period before a typeahead request fires
pub const TYPEAHEAD_QUIET: Duration = Duration::from_millis(300);

/// Cancellable delayed task. Each `schedule` cancels the pending task and
/// re-arms the timer, so only the last input within a quiet period fires.
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Cancel whatever is pending and arm a fresh timer for `task`
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            task.await;
        }));
    }

    /// Cancel the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
