//! Tracing bootstrap for embedders and tests.
//!
//! Initialization is idempotent: the first call installs the subscriber,
//! later calls are no-ops. `RUST_LOG` overrides the default directive
//! when set.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Initialize the global tracing subscriber.
///
/// `default_directive` is used when `RUST_LOG` is absent, e.g.
/// `"comm_toolkit=debug"`. Safe to call from multiple tests; only the
/// first call has any effect.
pub fn init(default_directive: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        // try_init: another subscriber may already be installed by the
        // embedding application; that is not an error for us.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    });
}
