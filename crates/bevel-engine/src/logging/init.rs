use std::sync::Once;

/// Logger configuration.
///
/// Filter resolution: `env_filter` if set, else `RUST_LOG`, else
/// `default_level`. `env_filter` uses `env_logger` syntax
/// (e.g. "warn,bevel_engine::select=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

impl LoggingConfig {
    pub fn env_filter(mut self, v: impl Into<String>) -> Self {
        self.env_filter = Some(v.into());
        self
    }

    pub fn default_level(mut self, v: log::LevelFilter) -> Self {
        self.default_level = v;
        self
    }

    pub fn write_style(mut self, v: env_logger::WriteStyle) -> Self {
        self.write_style = v;
        self
    }

    pub fn is_test(mut self, v: bool) -> Self {
        self.is_test = v;
        self
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls are ignored.
///
/// A logger installed by someone else first is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style).is_test(config.is_test);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let cfg = LoggingConfig::default().default_level(log::LevelFilter::Debug).is_test(true);
        init_logging(cfg.clone());
        init_logging(cfg);
        log::debug!("still fine");
    }
}
