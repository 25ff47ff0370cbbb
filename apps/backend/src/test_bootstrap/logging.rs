//! One-shot tracing setup for tests.
//!
//! `TEST_LOG` overrides `RUST_LOG`; with neither set, output stays at `warn`
//! so passing runs are quiet. Safe to call from every test binary: only the
//! first call installs a subscriber.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

pub fn init() {
    INIT.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .try_init();
    });
}
