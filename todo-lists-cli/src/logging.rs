use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Log level selected by the global flags
///
/// `--quiet` wins over `--debug`, which wins over `--verbose`.
pub fn log_level(verbose: bool, debug: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    }
}

/// Install the global subscriber writing to stderr
///
/// `RUST_LOG`, when set, replaces the flag-derived filter.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    let log_level = log_level(verbose, debug, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hyper=warn,{log_level}")));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_precedence() {
        assert_eq!(log_level(false, false, false), Level::INFO);
        assert_eq!(log_level(true, false, false), Level::TRACE);
        assert_eq!(log_level(true, true, false), Level::DEBUG);
        assert_eq!(log_level(true, true, true), Level::ERROR);
    }
}
