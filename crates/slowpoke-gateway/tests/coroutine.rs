//! Scheduler and coroutine adapters.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::thread;
use std::time::Duration;

use bytes::Bytes;

use slowpoke_core::error::Result;
use slowpoke_core::{callsite, Routine, SlowLogConfig, Step};
use slowpoke_gateway::coroutine::{coroutine_async, coroutine_with, drive, Suspend};
use slowpoke_gateway::http::{RequestCtx, Response, Verb};

use log_capture::LogCapture;

/// Yields `Suspend`s resolving to successive numbers, sums what it receives.
struct Summer {
    left: u32,
    total: u32,
}

impl Routine for Summer {
    type Sent = u32;
    type Yield = Suspend<u32>;
    type Return = u32;

    fn start(&mut self) -> Step<Suspend<u32>, u32> {
        self.next()
    }

    fn send(&mut self, value: u32) -> Step<Suspend<u32>, u32> {
        self.total += value;
        self.next()
    }
}

impl Summer {
    fn next(&mut self) -> Step<Suspend<u32>, u32> {
        if self.left == 0 {
            return Step::Complete(self.total);
        }
        let n = self.left;
        self.left -= 1;
        Step::Yielded(Suspend::new("number", async move {
            tokio::task::yield_now().await;
            n
        }))
    }
}

fn req() -> RequestCtx {
    RequestCtx::new(Verb::Get, "/", Some("who=world".into()), Bytes::new())
}

fn fast_threshold() -> SlowLogConfig {
    SlowLogConfig::default().with_threshold(Duration::from_millis(20))
}

#[tokio::test]
async fn drive_sends_each_output_back() {
    let total = drive(Summer { left: 4, total: 0 }).await;
    assert_eq!(total, 4 + 3 + 2 + 1);
}

#[tokio::test]
async fn drive_completes_routine_without_suspensions() {
    assert_eq!(drive(Summer { left: 0, total: 7 }).await, 7);
}

/// Blocks on its first resumption only.
struct BlockFirst;

impl Routine for BlockFirst {
    type Sent = ();
    type Yield = Suspend<()>;
    type Return = Result<Response>;

    fn start(&mut self) -> Step<Self::Yield, Self::Return> {
        thread::sleep(Duration::from_millis(60));
        Step::Yielded(Suspend::sleep(Duration::from_millis(1)))
    }

    fn send(&mut self, _: ()) -> Step<Self::Yield, Self::Return> {
        Step::Complete(Ok(Response::text("done")))
    }
}

#[tokio::test]
async fn declared_coroutine_is_timed_per_resumption() {
    let cap = LogCapture::new();
    let _guard = tracing::subscriber::set_default(cap.subscriber());

    let method = coroutine_with(callsite!("Block.get"), fast_threshold(), |_: &RequestCtx| {
        BlockFirst
    });
    assert!(method.is_step_based());

    let resp = method.invoke(req()).await.unwrap();
    assert_eq!(resp.body(), b"done");

    let lines = cap.slow_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("step=0"), "{}", lines[0]);
    assert!(lines[0].contains("returned Suspend(sleep)"), "{}", lines[0]);
}

#[tokio::test]
async fn async_method_is_timed_per_poll() {
    let cap = LogCapture::new();
    let _guard = tracing::subscriber::set_default(cap.subscriber());

    let method = coroutine_async(callsite!("Hello.get"), fast_threshold(), |ctx: &RequestCtx| {
        let ctx = ctx.clone();
        async move {
            tokio::task::yield_now().await;
            thread::sleep(Duration::from_millis(60));
            tokio::task::yield_now().await;
            let who = ctx.query_param("who").unwrap_or("nobody").to_string();
            let out: Result<Response> = Ok(Response::text(format!("Hello, {who}")));
            out
        }
    });
    assert!(method.is_step_based());

    let resp = method.invoke(req()).await.unwrap();
    assert_eq!(resp.body(), b"Hello, world");

    let lines = cap.slow_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("step=1"), "{}", lines[0]);
    assert!(lines[0].contains("Hello.get(RequestCtx {"), "{}", lines[0]);
    assert!(lines[0].contains("returned Pending"), "{}", lines[0]);
}

#[test]
fn suspend_debug_shows_label_only() {
    let s = Suspend::new("lookup", async { 1u8 });
    assert_eq!(format!("{s:?}"), "Suspend(lookup)");
    assert_eq!(s.label(), "lookup");
}
