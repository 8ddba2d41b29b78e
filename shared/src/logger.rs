use std::io::Write;

use chrono::Local;
use colored::Colorize;
use log::Level;

/// Installs the `env_logger` backend on stderr.
///
/// Defaults to `info` unless `RUST_LOG` says otherwise. Calling it twice is
/// harmless, the second registration is ignored.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");

    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => "ERROR".red().bold(),
                Level::Warn => "WARN ".yellow().bold(),
                Level::Info => "INFO ".green(),
                Level::Debug => "DEBUG".blue(),
                Level::Trace => "TRACE".dimmed(),
            };
            writeln!(
                buf,
                "{} {} [{}] {}",
                Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                level,
                record.target(),
                record.args()
            )
        })
        .try_init();
}
