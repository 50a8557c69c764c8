use log::{LevelFilter, debug, info};

#[test]
fn logger_installs_once() -> anyhow::Result<()> {
    binpack_ga::io::init_logger(LevelFilter::Debug)?;
    info!("[GA] logger ready");
    debug!("[GA] passes the crate filter");
    assert!(binpack_ga::io::init_logger(LevelFilter::Debug).is_err());
    Ok(())
}
