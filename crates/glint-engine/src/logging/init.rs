/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "glint_engine=debug,glutin=warn"). When unset, `RUST_LOG` is consulted and
/// then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string actually applied.
    fn resolve_filter(&self, rust_log: Option<String>) -> Option<String> {
        self.env_filter.clone().or(rust_log).filter(|f| !f.trim().is_empty())
    }
}

/// Installs the global logger.
///
/// Returns `false` when a logger was already installed (the call is then a
/// no-op), so calling this more than once is harmless. Intended usage is early
/// in `main`.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut builder = env_logger::Builder::new();

    match config.resolve_filter(std::env::var("RUST_LOG").ok()) {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => {
            builder.filter_level(config.default_level);
        }
    }

    builder.write_style(config.write_style);
    builder.format_timestamp_millis();

    let installed = builder.try_init().is_ok();
    if installed {
        log::debug!("logging initialized");
    }
    installed
}
