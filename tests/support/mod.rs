#![allow(dead_code)]

use std::env;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a log subscriber when `ATOMIC_FALLBACK_LOG` is set.
///
/// The filter defaults to tracing every cell operation and can be narrowed
/// with `RUST_LOG`.
pub fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        if env::var("ATOMIC_FALLBACK_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("atomic_fallback=trace"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
