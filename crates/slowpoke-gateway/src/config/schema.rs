use std::time::Duration;

use serde::Deserialize;
use slowpoke_core::error::{Result, SlowpokeError};
use slowpoke_core::SlowLogConfig;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub instrument: InstrumentSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SlowpokeError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.instrument.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.trim().is_empty() {
            return Err(SlowpokeError::BadRequest(
                "server.listen must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentSection {
    /// Attach call timers to every handler, not only `Timed` ones.
    #[serde(default = "default_attach_all")]
    pub attach_all: bool,

    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: u64,

    #[serde(default = "default_max_render_bytes")]
    pub max_render_bytes: usize,
}

impl Default for InstrumentSection {
    fn default() -> Self {
        Self {
            attach_all: default_attach_all(),
            slow_threshold_ms: default_slow_threshold_ms(),
            max_render_bytes: default_max_render_bytes(),
        }
    }
}

impl InstrumentSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=600_000).contains(&self.slow_threshold_ms) {
            return Err(SlowpokeError::BadRequest(
                "instrument.slow_threshold_ms must be between 1 and 600000".into(),
            ));
        }
        if !(16..=65_536).contains(&self.max_render_bytes) {
            return Err(SlowpokeError::BadRequest(
                "instrument.max_render_bytes must be between 16 and 65536".into(),
            ));
        }
        Ok(())
    }

    pub fn slowlog(&self) -> SlowLogConfig {
        SlowLogConfig::default()
            .with_threshold(Duration::from_millis(self.slow_threshold_ms))
            .with_max_render_bytes(self.max_render_bytes)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8888".into()
}
fn default_attach_all() -> bool {
    true
}
fn default_slow_threshold_ms() -> u64 {
    1000
}
fn default_max_render_bytes() -> usize {
    256
}
