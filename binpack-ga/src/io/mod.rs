use anyhow::Result;
use log::{LevelFilter, info};

use crate::EPOCH;

/// Installs a global logger writing to stdout.
///
/// Records of the packing crates pass `level_filter`, everything else only from [`LevelFilter::Warn`] up.
/// Every line starts with the seconds elapsed since [`EPOCH`], the level and the module which logged it.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{:>10.3}s {:<5} {:<24} {message}",
                EPOCH.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
            ))
        })
        .level(LevelFilter::Warn.min(level_filter))
        .level_for("binpack", level_filter)
        .level_for("binpack_ga", level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[GA] logging since {}", jiff::Timestamp::now());
    Ok(())
}
