use std::sync::Once;

/// Level used when neither the config nor `RUST_LOG` names a filter.
pub const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// How the rasterizer's log records are filtered and printed.
///
/// Shape failures are `warn!`, exports `info!`, per-shape geometry `trace!`.
/// `env_filter` uses `env_logger` directives, e.g. `"scanline_engine::shapes=trace"`
/// to see every span a scene draws.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the backend for the engine's `log` records.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then [`DEFAULT_LEVEL`].
/// Returns `true` only for the call that installed the logger; later calls, and a
/// call that finds another logger already registered, return `false`.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(DEFAULT_LEVEL);
        }

        builder.write_style(config.write_style);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("rasterizer logging ready");
        }
    });
    installed
}
