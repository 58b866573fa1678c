use std::path::{Path, PathBuf};

use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for a run.
///
/// Progress and failures go to stderr in a compact format; stdout stays
/// reserved for the closing summary line. When `log_file` is given, a
/// daily-rolling file additionally receives every event as JSON, which
/// is what log shippers expect from an unattended batch job.
///
/// `RUST_LOG` overrides the level; otherwise `verbose` picks between
/// debug and info.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "rota=debug" } else { "rota=info" }));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry().with(filter).with(stderr);

    match log_file {
        Some(path) => {
            let file = fmt::layer()
                .with_writer(rolling_appender(&path))
                .with_ansi(false)
                .json();
            registry.with(file).init();
        }
        None => registry.init(),
    }
}

fn rolling_appender(path: &Path) -> RollingFileAppender {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(directory);
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("rota.log"));
    rolling::daily(directory, file_name)
}
