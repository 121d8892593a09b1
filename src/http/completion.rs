use std::pin::pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

/// A countable completion signal: [`CompletionGroup::wait`] resolves once
/// every guard handed out by [`CompletionGroup::register`] has been dropped.
///
/// Releasing on drop means a member is counted done however it ends,
/// including early returns and construction failures.
#[derive(Debug, Clone, Default)]
pub struct CompletionGroup {
    state: Arc<GroupState>,
}

#[derive(Debug, Default)]
struct GroupState {
    pending: AtomicUsize,
    drained: Notify,
}

impl CompletionGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one pending member to the group.
    #[must_use]
    pub fn register(&self) -> CompletionGuard {
        self.state.pending.fetch_add(1, Ordering::AcqRel);
        CompletionGuard {
            state: Arc::clone(&self.state),
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.pending.load(Ordering::Acquire)
    }

    /// Waits until no registered member is pending.
    pub async fn wait(&self) {
        loop {
            let mut drained = pin!(self.state.drained.notified());
            drained.as_mut().enable();
            if self.pending() == 0 {
                return;
            }
            drained.await;
        }
    }
}

/// Marks one member of a [`CompletionGroup`] as done when dropped.
#[derive(Debug)]
pub struct CompletionGuard {
    state: Arc<GroupState>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if self.state.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.state.drained.notify_waiters();
        }
    }
}
