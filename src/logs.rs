use log::LevelFilter;
use log4rs::{
    Config, Handle,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use thiserror::Error;

use crate::config::LogConfig;

const LOG_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10 MB

const LOG_FILE_COUNT: u32 = 3;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to set up log archive roller: {0}")]
    Roller(String),

    #[error("failed to open log file: {0}")]
    File(#[from] std::io::Error),

    #[error("invalid logger configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),

    #[error("logger already initialized: {0}")]
    Init(#[from] log::SetLoggerError),
}

/// Stderr at info, plus a size-rolled gzip archived file at debug when
/// `LOG_FILE_PATH` is configured.
pub fn init_logger(config: &LogConfig) -> Result<Handle, LogError> {
    let stderr_level = LevelFilter::Info;
    let file_level = LevelFilter::Debug;

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(stderr_level)))
                .build("stderr", Box::new(stderr)),
        )
        .logger(Logger::builder().build("sqlx", LevelFilter::Warn));
    let mut root = Root::builder().appender("stderr");

    if let (Some(file_path), Some(archive_pattern)) = (&config.file_path, &config.archive_pattern)
    {
        let trigger = SizeTrigger::new(LOG_SIZE_LIMIT);
        let roller = FixedWindowRoller::builder()
            .build(archive_pattern, LOG_FILE_COUNT)
            .map_err(|e| LogError::Roller(e.to_string()))?;
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let logfile = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(file_path, Box::new(policy))?;

        builder = builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(file_level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    let config = builder.build(root.build(LevelFilter::Debug))?;
    Ok(log4rs::init_config(config)?)
}
