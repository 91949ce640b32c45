use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Targets that `--log-level` applies to. Channel failures are reported by
/// `netorder_marshal` at debug level; command summaries come from `netorder`.
const NETORDER_TARGETS: [&str; 2] = ["netorder", "netorder_marshal"];

/// Ceiling for events from any other crate.
const DEPENDENCY_LEVEL: LevelFilter = LevelFilter::WARN;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Per-target filter: netorder crates at `level`, everything else capped at
/// warn (or `level`, if that is quieter).
pub fn log_targets(level: LogLevel) -> Targets {
    let level = LevelFilter::from(level);
    NETORDER_TARGETS.iter().fold(
        Targets::new().with_default(level.min(DEPENDENCY_LEVEL)),
        |targets, target| targets.with_target(*target, level),
    )
}

/// Install the stderr subscriber. Event targets are kept in the output so a
/// channel failure can be told apart from a command summary.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);
    let registry = tracing_subscriber::registry().with(log_targets(level));

    match format {
        LogFormat::Text => {
            let _ = registry.with(layer).try_init();
        }
        LogFormat::Json => {
            let _ = registry.with(layer.json()).try_init();
        }
    }
}
