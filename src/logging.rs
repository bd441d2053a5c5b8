//! Diagnostic logging. Off unless asked for, and always on stderr so stdout
//! carries nothing but the cats.

use anyhow::{anyhow, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

// ISO 8601 timestamp and color coded level tag
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Work out the level from `--log-level` or the number of `-v` flags.
/// An explicit level wins.
pub fn resolve_level(log_level: Option<&str>, verbose: u8) -> Result<LevelFilter> {
    if let Some(name) = log_level {
        return name
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("unknown log level: {name}"));
    }
    Ok(match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    })
}

/// Install the global logger. Does nothing when `level` is `Off`.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    log::info!("logging enabled at level {level}");
    Ok(())
}
