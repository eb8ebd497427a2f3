//! Logging Infrastructure
//!
//! The terminal owns stdout while the board is on screen, so log events go
//! to the in-app log pane via tui-logger. Setting `LOG_DIR` adds a
//! daily-rolling file output on top.

use crate::config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger
pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter);

    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
        let file_appender = tracing_appender::rolling::daily(dir, "pickup-board");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false);
        registry.with(file_layer).try_init()?;
    } else {
        registry.try_init()?;
    }

    // log crate adapter, the pane widget reads through it
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    Ok(())
}
