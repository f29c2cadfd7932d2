use std::fs::create_dir_all;
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use fern::log_file;
use log::LevelFilter;

static COLORS: ColoredLevelConfig = ColoredLevelConfig {
    error: Color::BrightRed,
    warn: Color::BrightYellow,
    info: Color::BrightGreen,
    debug: Color::BrightMagenta,
    trace: Color::White,
};

/// Colored info records go to stderr, everything from debug up goes to
/// `{appdir}/logs/{date}.log`
pub fn init_logs(appdir: impl AsRef<Path>) -> Result<()> {
    let logdir = appdir.as_ref().join("logs");
    create_dir_all(&logdir)?;
    let logfile = logdir.join(Local::now().format("%Y-%m-%d.log").to_string());

    let file = Dispatch::new()
        .format(|out, msg, rec| {
            out.finish(format_args!(
                "[{}] {} {} {}",
                Local::now().format("%d-%m-%Y %H:%M:%S"),
                rec.level(),
                rec.target(),
                msg
            ));
        })
        .level(LevelFilter::Debug)
        .chain(log_file(logfile)?);

    let stderr = Dispatch::new()
        .format(|out, msg, rec| {
            out.finish(format_args!(
                "[{}] {} {} {}",
                Local::now().format("%H:%M:%S"),
                COLORS.color(rec.level()),
                rec.target(),
                msg
            ));
        })
        .level(LevelFilter::Info)
        .chain(std::io::stderr());

    Dispatch::new()
        // winit is chatty at debug
        .level_for("winit", LevelFilter::Warn)
        .level_for("eframe", LevelFilter::Info)
        .chain(file)
        .chain(stderr)
        .apply()?;

    Ok(())
}
