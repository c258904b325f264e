use std::env;

use log::LevelFilter;

/// Installs the global logger with `level` as the default filter. Filters from `RUST_LOG` take
/// precedence.
pub fn init(level: LevelFilter) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let Err(err) = builder.try_init() {
        eprintln!("Failed to initialize logger: {}", err);
    }
}
