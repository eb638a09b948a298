//! Logging setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter used by `--debug` when `RUST_LOG` is not set.
const DEBUG_FILTER: &str = "vouch=debug";

/// Install the global subscriber: a hierarchical stderr layer filtered by
/// `RUST_LOG`, or by [`DEBUG_FILTER`] when `debug` is set and `RUST_LOG` is
/// absent. Without either, only warnings are shown.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing(debug: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) if debug => EnvFilter::new(DEBUG_FILTER),
            Err(_) => EnvFilter::new("warn"),
        };

        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);

        if let Err(error) = tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init()
        {
            eprintln!("warning: logging not initialized: {error}");
        }
    });
}
