//! Logger bootstrap.
//!
//! Diagnostics go to stderr through the `log` facade with a `flexi_logger`
//! backend. The default level is `warn`, so only persistence problems show up
//! next to the menus; `-v` raises it to `debug`. `RUST_LOG` overrides both.
//!
//! Events are flat `key=value` text, e.g. `event=load status=failed error=...`.
//!
//! # Invariants
//! - Initialization never panics.
//! - Calling [`init_logging`] more than once is a no-op.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Level used when neither `-v` nor `RUST_LOG` says otherwise.
pub fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Starts the stderr logger.
///
/// Returns a human-readable error when the backend cannot start; callers may
/// carry on without logging.
pub fn init_logging(verbose: bool) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_env_or_str(default_log_level(verbose))
                .map_err(|err| format!("invalid log specification: {err}"))?
                .log_to_stderr()
                .format(flexi_logger::default_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))
        })
        .map(|_| ())
}
