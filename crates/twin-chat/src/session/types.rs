//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::Message;

/// What happened to one `submit` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend replied; carries the appended assistant message.
    Answered(Message),
    /// The exchange failed; carries the appended fallback message.
    Failed(Message),
    /// Nothing was appended and no request was sent.
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    /// The assistant message appended by this call, if any.
    pub fn reply(&self) -> Option<&Message> {
        match self {
            Self::Answered(msg) | Self::Failed(msg) => Some(msg),
            Self::Ignored(_) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was empty after trimming.
    Empty,
    /// Another submission was still waiting for its reply.
    Busy,
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `None` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
