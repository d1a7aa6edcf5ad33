//! CallTimer behavior: transparency, slow-call records, failure paths.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::Cell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

use slowpoke_core::{callsite, CallTimer, SlowLogConfig};

use log_capture::LogCapture;

fn fast_threshold() -> SlowLogConfig {
    SlowLogConfig::default().with_threshold(Duration::from_millis(20))
}

#[test]
fn returns_result_and_invokes_once() {
    let cap = LogCapture::new();
    let calls = Cell::new(0);
    let timer = CallTimer::new(callsite!("double"), |x: &u32| {
        calls.set(calls.get() + 1);
        x * 2
    });

    let out = tracing::subscriber::with_default(cap.subscriber(), || timer.call(&21));

    assert_eq!(out, 42);
    assert_eq!(calls.get(), 1);
    assert!(cap.slow_lines().is_empty());
}

#[test]
fn slow_call_emits_one_record() {
    let cap = LogCapture::new();
    let site = callsite!("greet");
    let timer = CallTimer::new(site, |name: &str| {
        thread::sleep(Duration::from_millis(60));
        format!("Hello, {name}")
    })
    .with_config(fast_threshold());

    let out = tracing::subscriber::with_default(cap.subscriber(), || timer.call("world"));
    assert_eq!(out, "Hello, world");

    let lines = cap.slow_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    let line = &lines[0];
    assert!(line.contains("ERROR"), "{line}");
    assert!(line.contains("Slow function call took 0.0"), "{line}");
    assert!(
        line.contains(&format!("seconds on {} line {} ", site.file(), site.line())),
        "{line}"
    );
    assert!(
        line.contains(r#"greet("world") returned "Hello, world""#),
        "{line}"
    );
}

#[test]
fn tuple_arguments_render_as_an_argument_list() {
    let cap = LogCapture::new();
    let timer = CallTimer::new(callsite!("add"), |&(a, b): &(u32, u32)| {
        thread::sleep(Duration::from_millis(60));
        a + b
    })
    .with_config(fast_threshold());

    let out = tracing::subscriber::with_default(cap.subscriber(), || timer.call(&(1, 2)));
    assert_eq!(out, 3);

    let lines = cap.slow_lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("add(1, 2) returned 3"), "{}", lines[0]);
}

#[test]
fn unit_arguments_render_as_an_empty_list() {
    let cap = LogCapture::new();
    let timer = CallTimer::new(callsite!("tick"), |_: &()| {
        thread::sleep(Duration::from_millis(60));
        "tock"
    })
    .with_config(fast_threshold());

    tracing::subscriber::with_default(cap.subscriber(), || timer.call(&()));

    let lines = cap.slow_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#"tick() returned "tock""#), "{}", lines[0]);
}

#[test]
fn default_threshold_ignores_fast_calls() {
    let cap = LogCapture::new();
    let timer = CallTimer::new(callsite!("sum"), |xs: &[u64]| xs.iter().sum::<u64>());

    let out = tracing::subscriber::with_default(cap.subscriber(), || timer.call(&[1, 2, 3][..]));

    assert_eq!(out, 6);
    assert!(cap.slow_lines().is_empty());
}

#[test]
fn threshold_is_strict() {
    let cfg = SlowLogConfig::default();
    assert!(!cfg.is_slow(Duration::from_secs(1)));
    assert!(!cfg.is_slow(Duration::from_micros(999_999)));
    assert!(cfg.is_slow(Duration::from_micros(1_000_001)));
}

#[test]
fn failed_call_is_returned_and_not_logged() {
    let cap = LogCapture::new();
    let timer = CallTimer::new(callsite!("fails"), |_: &()| -> Result<u8, String> {
        thread::sleep(Duration::from_millis(60));
        Err("boom".into())
    })
    .with_config(fast_threshold());

    let out = tracing::subscriber::with_default(cap.subscriber(), || timer.try_call(&()));

    assert_eq!(out, Err("boom".to_string()));
    assert!(cap.slow_lines().is_empty());
}

#[test]
fn slow_ok_from_fallible_call_is_logged() {
    let cap = LogCapture::new();
    let timer = CallTimer::new(callsite!("parse"), |s: &str| -> Result<u8, String> {
        thread::sleep(Duration::from_millis(60));
        s.parse::<u8>().map_err(|e| e.to_string())
    })
    .with_config(fast_threshold());

    let out = tracing::subscriber::with_default(cap.subscriber(), || timer.try_call("7"));

    assert_eq!(out, Ok(7));
    let lines = cap.slow_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#"parse("7") returned 7"#), "{}", lines[0]);
}

#[test]
fn panic_propagates_without_record() {
    let cap = LogCapture::new();
    let timer = CallTimer::new(callsite!("explodes"), |_: &()| -> u8 {
        thread::sleep(Duration::from_millis(60));
        panic!("explode");
    })
    .with_config(fast_threshold());

    let res = tracing::subscriber::with_default(cap.subscriber(), || {
        catch_unwind(AssertUnwindSafe(|| timer.call(&())))
    });

    assert!(res.is_err());
    assert!(cap.slow_lines().is_empty());
}

struct Broken;

impl fmt::Debug for Broken {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn unrenderable_argument_still_returns_result() {
    let cap = LogCapture::new();
    let timer = CallTimer::new(callsite!("opaque"), |_: &Broken| {
        thread::sleep(Duration::from_millis(60));
        "done"
    })
    .with_config(fast_threshold());

    let out = tracing::subscriber::with_default(cap.subscriber(), || timer.call(&Broken));

    assert_eq!(out, "done");
    let lines = cap.slow_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#"opaque(<unrenderable>) returned "done""#), "{}", lines[0]);
}
