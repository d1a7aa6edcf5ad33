//! Demo handler mounted at `/`.
//!
//! - `GET` writes ten greetings from a step-based routine, suspending on a
//!   timer before each one. The sixth resumption blocks the thread for two
//!   seconds, which shows up as exactly one slow-iteration record.
//! - `POST` writes ten greetings synchronously, blocking for one timer period
//!   after each, which shows up as one slow-call record.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use slowpoke_core::error::Result;
use slowpoke_core::{callsite, Routine, SlowLogConfig, Step};

use crate::coroutine::{coroutine_with, Suspend};
use crate::handler::{RequestHandler, VerbMethod};
use crate::http::{RequestCtx, Response, Verb};

const GREETING: &str = "Hello, world\r\n";
const ROUNDS: u32 = 10;
const BLOCKING_ROUND: u32 = 5;

pub struct MainHandler {
    slowlog: SlowLogConfig,
    tick: Duration,
    block: Duration,
}

impl MainHandler {
    pub fn new(slowlog: SlowLogConfig) -> Self {
        Self {
            slowlog,
            tick: Duration::from_secs(1),
            block: Duration::from_secs(2),
        }
    }

    /// Shorter timer and blocking periods (tests, local runs).
    pub fn with_periods(mut self, tick: Duration, block: Duration) -> Self {
        self.tick = tick;
        self.block = block;
        self
    }

    fn post(&self, _ctx: &RequestCtx) -> Result<Response> {
        let mut out = Response::new();
        for _ in 0..ROUNDS {
            out.write(GREETING);
            thread::sleep(self.tick);
        }
        Ok(out)
    }
}

impl RequestHandler for MainHandler {
    fn name(&self) -> &'static str {
        "MainHandler"
    }

    fn method(self: Arc<Self>, verb: Verb) -> Option<VerbMethod> {
        match verb {
            Verb::Get => {
                let (tick, block) = (self.tick, self.block);
                Some(coroutine_with(
                    callsite!("MainHandler.get"),
                    self.slowlog,
                    move |_ctx: &RequestCtx| Greeter::new(tick, block),
                ))
            }
            Verb::Post => Some(VerbMethod::plain(
                callsite!("MainHandler.post"),
                move |ctx: &RequestCtx| self.post(ctx),
            )),
            _ => None,
        }
    }
}

/// The `GET` routine: suspend, (maybe block), write; ten times.
struct Greeter {
    round: u32,
    tick: Duration,
    block: Duration,
    out: Response,
    line: u32,
}

impl Greeter {
    fn new(tick: Duration, block: Duration) -> Self {
        Self {
            round: 0,
            tick,
            block,
            out: Response::new(),
            line: line!(),
        }
    }

    /// Suspend on the timer at source line `line`.
    fn suspend(&mut self, line: u32) -> Step<Suspend<()>, Result<Response>> {
        self.line = line;
        Step::Yielded(Suspend::sleep(self.tick))
    }
}

impl Routine for Greeter {
    type Sent = ();
    type Yield = Suspend<()>;
    type Return = Result<Response>;

    fn start(&mut self) -> Step<Self::Yield, Self::Return> {
        self.suspend(line!())
    }

    fn send(&mut self, _: ()) -> Step<Self::Yield, Self::Return> {
        if self.round == BLOCKING_ROUND {
            thread::sleep(self.block);
        }
        self.out.write(GREETING);
        self.round += 1;

        if self.round == ROUNDS {
            return Step::Complete(Ok(std::mem::take(&mut self.out)));
        }
        self.suspend(line!())
    }

    fn line(&self) -> Option<u32> {
        Some(self.line)
    }
}
