//! Log filter selection for the binary

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "pet_academy=info";

/// Filter from `--log`, else `RUST_LOG`, else the default
///
/// An unparsable `RUST_LOG` falls back to the default rather than
/// silencing everything.
pub fn log_filter(cli: Option<&str>, env: Option<&str>) -> EnvFilter {
    match (cli, env) {
        (Some(directives), _) => EnvFilter::new(directives),
        (None, Some(directives)) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        (None, None) => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}
