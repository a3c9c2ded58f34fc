use log::LevelFilter;

/// Environment variable that turns on debug logging in the CLI.
pub const DEBUG_ENV_VAR: &str = "NERDITT_DEBUG";

fn default_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Set up the `log` backend for the current target.
///
/// Native builds log to stderr through `env_logger`, with `RUST_LOG` taking
/// precedence over `debug_enabled`. WASM builds log to the browser console.
///
/// Only the first call installs a logger; later calls do nothing.
pub fn init_logger(debug_enabled: bool) {
    let level = default_level(debug_enabled);

    #[cfg(target_arch = "wasm32")]
    {
        let level = level.to_level().unwrap_or(log::Level::Info);
        if let Err(e) = console_log::init_with_level(level) {
            // console_log can't report its own failure
            let msg = format!("console_log unavailable ({e}); nerditt will not log");
            web_sys::console::error_1(&msg.into());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if builder.try_init().is_err() {
            return;
        }
    }

    log::debug!("logger ready at {level}");
}

/// `true` when `NERDITT_DEBUG` is set to anything.
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
        log::info!("still logging");
    }
}
