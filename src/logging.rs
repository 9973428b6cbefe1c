use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use env_logger::{Env, Target};

/// Returns the default log path inside the user's data directory.
/// Falls back to `./demotimer.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let log_dir = data_dir.join("demotimer");
        std::fs::create_dir_all(&log_dir).ok();
        log_dir.join("demotimer.log")
    } else {
        PathBuf::from("demotimer.log")
    }
}

/// Route `log` output to a file so it never lands on the terminal UI.
/// The level comes from `RUST_LOG` and defaults to `info`.
pub fn init() -> Result<PathBuf> {
    let path = default_log_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(path)
}
