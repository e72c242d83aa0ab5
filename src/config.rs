//! # Router Configuration
//!
//! Environment-driven tuning for the router. There is no configuration
//! file; the route table itself is built in code.
//!
//! ## Environment Variables
//!
//! ### `TRIER_SLOW_MATCH_US`
//!
//! Resolution time, in microseconds, above which a successful match is
//! logged at `WARN` instead of `DEBUG`. Accepts:
//! - Decimal: `250`
//! - Hexadecimal: `0xfa`
//!
//! Default: `1000` (1 ms). Unparsable values fall back to the default.
//!
//! ```bash
//! export TRIER_SLOW_MATCH_US=200
//! ```

use std::env;
use std::time::Duration;

const SLOW_MATCH_ENV: &str = "TRIER_SLOW_MATCH_US";
const DEFAULT_SLOW_MATCH_US: u64 = 1_000;

/// Runtime configuration carried by a [`Builder`](crate::router::Builder)
/// into every router it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Matches slower than this are reported at `WARN`
    pub slow_match_threshold: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let micros = lookup(SLOW_MATCH_ENV)
            .as_deref()
            .and_then(parse_micros)
            .unwrap_or(DEFAULT_SLOW_MATCH_US);
        Self {
            slow_match_threshold: Duration::from_micros(micros),
        }
    }
}

fn parse_micros(val: &str) -> Option<u64> {
    let val = val.trim();
    match val.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}
