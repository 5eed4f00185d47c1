mod clock;
mod config;
mod error;
mod format;
mod layers;
mod level;

pub use clock::{LoggerClock, LoggerTimeZone, init_local_offset};
pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Can succeed only once per process; later calls return
/// [`LoggerError::AlreadyInitialized`].
///
/// When `cfg.tz` is [`LoggerTimeZone::Local`], call [`init_local_offset`] first,
/// before any thread is spawned.
///
/// # Examples
/// ```rust
/// use arc_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => layers::install_text(cfg),
        LoggerFormat::Json => layers::install_json(cfg),
        LoggerFormat::Journald => layers::install_journald(cfg),
    }
}
