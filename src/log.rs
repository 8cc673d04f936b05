use log::LevelFilter;

/// Environment variable that switches on debug logging
pub const DEBUG_ENV_VAR: &str = "ROOTWORD_DEBUG";

/// Initialize logging for the terminal shell.
///
/// Uses `Debug` level when `debug_enabled` is set, `Info` otherwise. `RUST_LOG`
/// overrides either when present. Safe to call more than once; later calls are
/// ignored.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}

/// Whether debug logging was requested through the environment
pub fn debug_from_env() -> bool {
    std::env::var(DEBUG_ENV_VAR).is_ok()
}
