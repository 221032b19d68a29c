//! Logger initialization for hosts and the studio binary.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; subsequent calls are ignored.
///
/// `filter` follows the `env_logger` syntax (e.g. `"info"`,
/// `"tinct_field=debug"`). When `None`, `RUST_LOG` wins, then a
/// warn-level default. The commit pipeline logs its arm/cancel/commit
/// decisions at debug, which hosts opt into.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }
        builder.init();
        log::debug!("logging initialized");
    });
}
