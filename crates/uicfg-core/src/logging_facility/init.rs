//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is unset
const DEV_FILTER: &str = "uicfg=debug,uicfg_core=debug,uicfg_store=debug,uicfg_engine=debug";
const PROD_FILTER: &str = "uicfg=info,uicfg_core=info,uicfg_store=info,uicfg_engine=info";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl FromStr for Profile {
    type Err = String;

    /// Parses the `--log-format` / `UICFG_LOG_FORMAT` spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "dev" | "development" => Ok(Profile::Development),
            "json" | "prod" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup; later calls
/// are no-ops. Output goes to stderr so stdout stays free for command
/// results.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; use `init_test_capture()` to record events
///
/// # Example
///
/// ```
/// use uicfg_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEV_FILTER)),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(PROD_FILTER)),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
