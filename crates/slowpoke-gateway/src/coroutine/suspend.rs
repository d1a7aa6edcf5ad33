use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// A suspension point yielded by a routine: the scheduler awaits it and sends
/// the output back on the next resumption.
pub struct Suspend<S> {
    label: &'static str,
    fut: BoxFuture<'static, S>,
}

impl<S> Suspend<S> {
    pub fn new<F>(label: &'static str, fut: F) -> Self
    where
        F: Future<Output = S> + Send + 'static,
    {
        Self {
            label,
            fut: fut.boxed(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Suspend<()> {
    /// Suspend for `period` on the runtime timer.
    pub fn sleep(period: Duration) -> Self {
        Self::new("sleep", tokio::time::sleep(period))
    }
}

impl<S> fmt::Debug for Suspend<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Suspend({})", self.label)
    }
}

impl<S> Future for Suspend<S> {
    type Output = S;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<S> {
        self.fut.as_mut().poll(cx)
    }
}
