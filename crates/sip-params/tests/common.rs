// Common test utilities for sip-params
#![allow(dead_code)]

use rvoip_sip_params::prelude::*;

/// Parameters trailing a request or status line.
pub fn start_line(raw: &str) -> ParserCategory {
    ParserCategory::start_line(raw.to_string())
}

/// Parameters of a header occurrence.
pub fn header(name: HeaderName, raw: &str) -> ParserCategory {
    ParserCategory::new(raw.to_string(), name)
}

/// Same as `start_line` with a custom config.
pub fn with_config(raw: &str, config: ParseConfig) -> ParserCategory {
    start_line(raw).with_config(config)
}

pub fn strict_numeric() -> ParseConfig {
    ParseConfig {
        lenient_numeric: false,
        ..ParseConfig::default()
    }
}

/// Routes crate logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("rvoip_sip_params=debug")
        .with_test_writer()
        .try_init();
}
