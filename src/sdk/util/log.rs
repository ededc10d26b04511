use env_logger::{Builder, Env};

/// Logger setup for the CLI: info by default, RUST_LOG overrides.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
