//! Test logging utilities.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize logging for tests (call once)
///
/// Installs a `tracing` subscriber that writes through the test harness, so
/// output is only shown for failing tests. The filter is taken from
/// `RUST_LOG` and defaults to `docview_bridge=debug`.
///
/// # Examples
///
/// ```
/// use docview_test::logging::init_test_logging;
///
/// init_test_logging();
/// init_test_logging(); // later calls are no-ops
/// ```
pub fn init_test_logging() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new("docview_bridge=debug"));
		let _ = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_test_writer()
			.try_init();
	});
}
