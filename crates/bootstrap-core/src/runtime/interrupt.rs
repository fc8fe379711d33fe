//! Cooperative interrupt delivery for the launch phase
//!
//! The binary's Ctrl+C handler calls [`InterruptSignal::trigger`]. The signal
//! is only consumed while something is waiting on it (the signal is "armed");
//! otherwise `trigger` returns `false` and the handler falls back to exiting.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    armed: AtomicBool,
    notify: Notify,
}

/// Shared interrupt flag, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct InterruptSignal {
    inner: Arc<Inner>,
}

impl InterruptSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an interrupt. Returns `true` if a waiter will receive it.
    pub fn trigger(&self) -> bool {
        if self.inner.armed.load(Ordering::SeqCst) {
            self.inner.notify.notify_one();
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.inner.armed.load(Ordering::SeqCst)
    }

    /// Start accepting interrupts until the returned guard is dropped
    pub fn arm(&self) -> ArmedInterrupt {
        self.inner.armed.store(true, Ordering::SeqCst);
        ArmedInterrupt {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Guard returned by [`InterruptSignal::arm`]
#[derive(Debug)]
pub struct ArmedInterrupt {
    inner: Arc<Inner>,
}

impl ArmedInterrupt {
    /// Resolve once an interrupt has been triggered
    pub async fn wait(&self) {
        self.inner.notify.notified().await;
    }
}

impl Drop for ArmedInterrupt {
    fn drop(&mut self) {
        self.inner.armed.store(false, Ordering::SeqCst);
    }
}
