//! Logging setup for host binaries and integration tests

/// Initialize the logger with default settings for terminal hosts.
/// Uses INFO level by default, with a format that works correctly in raw
/// terminal mode. The RUST_LOG environment variable can override the level.
/// Safe to call more than once; repeat calls are ignored.
pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "\r[{} {:5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .try_init()
        .ok();
}
