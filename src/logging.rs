//! File logging. A TUI owns stdout, so every record goes to disk.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::AppConfig;

/// Optional log4rs configuration that replaces the built-in appender.
pub const LOG_CONFIG_PATH: &str = "config/log4rs.yaml";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";
const ROLL_SIZE_BYTES: u64 = 1024 * 1024;
const ROLL_WINDOW: u32 = 3;

/// Installs the global logger. Uses `config/log4rs.yaml` when present,
/// otherwise a size-rolled file at `config.log_file` with gzip archives.
pub fn init(root: &Path, config: &AppConfig) -> Result<()> {
    let yaml = root.join(LOG_CONFIG_PATH);
    if yaml.exists() {
        log4rs::init_file(&yaml, Default::default())
            .with_context(|| format!("loading logger configuration {}", yaml.display()))?;
        return Ok(());
    }

    let log_path = root.join(&config.log_file);
    let archive = format!("{}.{{}}.gz", log_path.display());
    let roller = FixedWindowRoller::builder()
        .build(&archive, ROLL_WINDOW)
        .map_err(|err| anyhow!("building log roller for {archive}: {err}"))?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE_BYTES)), Box::new(roller));
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&log_path, Box::new(policy))
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let logger = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))
        .context("building logger configuration")?;
    log4rs::init_config(logger).context("installing logger")?;
    Ok(())
}
