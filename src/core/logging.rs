//! Logging setup for the command-line tools.

/// Install an env_logger with millisecond timestamps.
///
/// The filter defaults to `info`; `RUST_LOG` overrides it. Returns `false`
/// when a logger was already installed, which is harmless.
pub fn init() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_noop() {
        init();
        assert!(!init());
    }
}
