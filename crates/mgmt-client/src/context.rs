use std::{future::Future, time::Duration};

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Execution context bounding all calls made on behalf of one operation by a single
/// deadline. It can also be canceled explicitly, which aborts the call in progress.
#[derive(Debug, Clone)]
pub struct Context {
    deadline: Instant,
    cancel: CancellationToken,
}

impl Context {
    pub fn with_deadline(deadline: Instant) -> Self {
        Context {
            deadline,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left until deadline, `None` if it already passed
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .checked_duration_since(Instant::now())
            .filter(|d| !d.is_zero())
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Checks that the context is still live
    pub fn err(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else if self.remaining().is_none() {
            Err(Error::DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    /// Runs `fut` until it completes, the deadline passes or the context is canceled.
    /// A dead context fails immediately and `fut` is never polled.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output>
    where
        F: Future,
    {
        self.err()?;
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Error::Cancelled),
            res = tokio::time::timeout_at(self.deadline, fut) => {
                res.map_err(|_| Error::DeadlineExceeded)
            }
        }
    }
}
