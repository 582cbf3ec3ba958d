use chrono::Local;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

pub const LOG_LEVEL_ENV: &str = "ACCOUNTAPI_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "ACCOUNTAPI_LOG_DIR";

pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        init_result = init_logging_inner(app_name);
    });
    init_result
}

fn log_level() -> log::LevelFilter {
    std::env::var(LOG_LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|level| level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info)
}

// Unset, `off`, `none` and empty all disable the file sink.
fn log_dir() -> Option<PathBuf> {
    match std::env::var(LOG_DIR_ENV).ok().as_deref() {
        None | Some("off") | Some("none") | Some("") => None,
        Some(path) => Some(PathBuf::from(path)),
    }
}

fn init_logging_inner(app_name: &str) -> Result<(), String> {
    // stdout carries command output, so log lines go to stderr.
    let mut dispatch = fern::Dispatch::new()
        .level(log_level())
        .level_for("reqwest", log::LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(dir) = log_dir() {
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let date = Local::now().format("%Y_%m_%d");
        let file_path = dir.join(format!("{app_name}-{date}.log"));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}
