//! Logging setup for standalone hosts and demos.
//!
//! A real game host usually installs its own logger; in that case the
//! `log` records from this crate go there and this is never called.

/// Install `env_logger` with an `info` default, overridable via `RUST_LOG`.
///
/// Returns false if a logger was already installed.
pub fn init_logging() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
