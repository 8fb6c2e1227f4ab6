use std::{str::FromStr, sync::Once};

use tracing::Level;
use tracing_subscriber::{Registry, filter::Targets, prelude::*};

const LOG_VAR: &str = "OPTIONAL_LOG";

static INIT: Once = Once::new();

/// Routes events from the library through the test writer. The level is read from `OPTIONAL_LOG`
/// and defaults to `debug`.
pub fn install_logger() {
    INIT.call_once(|| {
        let level = std::env::var(LOG_VAR)
            .ok()
            .and_then(|level| Level::from_str(&level).ok())
            .unwrap_or(Level::DEBUG);
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_filter(Targets::new().with_target("optional_container", level));
        let _ = Registry::default().with(fmt_layer).try_init();
    });
}
