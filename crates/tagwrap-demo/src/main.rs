use anyhow::Context;
use tracing::info;

use tagwrap_core::Scanner;
use tagwrap_observe::{LoggerTimeZone, init_local_offset, init_logger};

mod config;
mod demo;

use config::AppConfig;
use demo::DemoObject;

fn main() -> anyhow::Result<()> {
    // 1) config
    let cfg = match std::env::args_os().nth(1) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    // 2) logger
    if cfg.logger.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    init_logger(&cfg.logger)?;
    info!("logger initialized");

    // 3) scan
    let scanner = Scanner::new(cfg.scan);
    let demo = DemoObject::new();
    info!(target_object = demo.name(), "scanning");
    let report = scanner
        .process_stdout(&demo)
        .context("demo scan failed")?;

    info!(invoked = report.len(), "demo finished");
    Ok(())
}
