#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use slowpoke_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
instrument:
  slow_treshold_ms: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8888");
    assert!(cfg.instrument.attach_all);

    let slowlog = cfg.instrument.slowlog();
    assert_eq!(slowlog.threshold, Duration::from_secs(1));
    assert_eq!(slowlog.max_render_bytes, 256);
}

#[test]
fn custom_threshold() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
instrument:
  attach_all: false
  slow_threshold_ms: 250
  max_render_bytes: 1024
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert!(!cfg.instrument.attach_all);
    assert_eq!(cfg.instrument.slowlog().threshold, Duration::from_millis(250));
    assert_eq!(cfg.instrument.slowlog().max_render_bytes, 1024);
}

#[test]
fn reject_out_of_range_values() {
    let zero = "version: 1\ninstrument:\n  slow_threshold_ms: 0\n";
    assert!(config::load_from_str(zero).is_err());

    let tiny = "version: 1\ninstrument:\n  max_render_bytes: 4\n";
    assert!(config::load_from_str(tiny).is_err());
}

#[test]
fn reject_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}
