//! Basic logger usage example
//!
//! Demonstrates the process-wide logger, every severity, and the shipping
//! behavior of critical logs.
//!
//! Run with: cargo run --example basic_usage

use csctrl_logger::prelude::*;
use csctrl_logger::{critical, debug, error, info, trace, warn};

fn main() -> Result<()> {
    csctrl_logger::init();
    let logger = csctrl_logger::logger();

    info!(logger, "CSCTRL Version {}", env!("CARGO_PKG_VERSION"));

    trace!(logger, "This is a trace message");
    debug!(logger, "This is a debug message");
    info!(logger, "Listening to CS2 logs at '{}'", "/cslog");
    warn!(logger, "No servers configured");
    error!(logger, "Can't write config to file '{}'", "csctrl.json");

    // Critical logs halt development builds; demonstrate with an explicit shipping logger
    let shipping = Logger::builder()
        .sink(ConsoleSink::new())
        .build_mode(BuildMode::Shipping)
        .build();
    critical!(shipping, "Unknown match state, continuing in shipping mode");

    logger.set_min_level(Severity::Warn);
    info!(logger, "Info message (hidden)");
    warn!(logger, "Warning message (visible)");

    logger.flush()?;
    Ok(())
}
