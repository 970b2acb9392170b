//! Diagnostic logging for the compiler itself.
//!
//! Enable with `FERRET_LOG=debug` or a full filter such as
//! `FERRET_LOG=ferret_lexer=trace`. Output goes to stderr as an indented
//! span tree.

use std::sync::Once;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FERRET_LOG";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Installs nothing unless `FERRET_LOG` is set, so normal runs pay no
/// logging cost.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }

        let filter = EnvFilter::from_env(LOG_ENV);
        let tree = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_indent_lines(true);

        let _ = tracing_subscriber::registry()
            .with(tree)
            .with(filter)
            .try_init();
    });
}
