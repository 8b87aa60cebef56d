use std::ffi::OsString;
use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_DIR_ENV: &str = "IM_LOG_DIR";
const BACKTRACE_ENV: &str = "IM_LOG_INCLUDE_BACKTRACE";

// Flushes the non-blocking file writer on process exit.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Routes panics through `tracing` with thread and source location. Installed
/// once per process; later calls are no-ops.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let include_backtrace = env_flag(BACKTRACE_ENV);

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let thread_name = thread.name().unwrap_or("unknown");
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
            let message = panic_message(info.payload());

            tracing::error!(
                application = app_name,
                %thread_name,
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic payload not string".into())
}

/// Where log lines end up after [`init_tracing_subscriber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Daily-rotated file; the path is the un-suffixed base name.
    File(PathBuf),
    Stderr,
}

fn log_file_path(dir: Option<OsString>, app_name: &str) -> Option<(PathBuf, String)> {
    let dir = dir.filter(|dir| !dir.is_empty())?;
    Some((PathBuf::from(dir), format!("{app_name}.log")))
}

fn rotating_file_writer(app_name: &'static str) -> Option<(BoxMakeWriter, PathBuf)> {
    let (dir, file_name) = log_file_path(std::env::var_os(LOG_DIR_ENV), app_name)?;
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("failed to create {LOG_DIR_ENV} ({err}); logging to stderr");
        return None;
    }

    let base = dir.join(&file_name);
    let appender = tracing_appender::rolling::daily(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some((BoxMakeWriter::new(non_blocking), base))
}

/// Sets up the global subscriber. `RUST_LOG` controls filtering (default
/// `info`); with `IM_LOG_DIR` set, output goes to `<dir>/<app>.log` rotated
/// daily, otherwise to stderr so stdout stays free for command output.
pub fn init_tracing_subscriber(app_name: &'static str) -> LogDestination {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match rotating_file_writer(app_name) {
        Some((writer, base)) => {
            let _ = builder.with_ansi(false).with_writer(writer).try_init();
            LogDestination::File(base)
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            LogDestination::Stderr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_handles_str_and_string_payloads() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");

        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(panic_message(boxed.as_ref()), "owned boom");

        let boxed: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(boxed.as_ref()), "panic payload not string");
    }

    #[test]
    fn log_file_path_needs_a_non_empty_dir() {
        assert_eq!(log_file_path(None, "im-recommend"), None);
        assert_eq!(log_file_path(Some(OsString::new()), "im-recommend"), None);
        assert_eq!(
            log_file_path(Some(OsString::from("/var/log/im")), "im-recommend"),
            Some((PathBuf::from("/var/log/im"), "im-recommend.log".to_string()))
        );
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing_subscriber("im-test");
        init_tracing_subscriber("im-test");
        install_tracing_panic_hook("im-test");
        install_tracing_panic_hook("im-test");
    }
}
