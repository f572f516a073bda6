//! Tracing setup for the CLI.

use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Returns the default filter directive for a `-v` count.
///
/// The `orgtree` target prefix also covers the `orgtree_*` library crates.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "orgtree=warn",
        1 => "orgtree=info",
        _ => "orgtree=debug",
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
pub fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "orgtree=warn");
        assert_eq!(default_filter(1), "orgtree=info");
        assert_eq!(default_filter(2), "orgtree=debug");
        assert_eq!(default_filter(9), "orgtree=debug");
    }
}
