//! Command handlers
//!
//! Each handler loads the router configuration, performs the requested
//! operation, and prints output in the selected format.

mod quiet;
mod route;
mod rules;

pub use quiet::run_quiet;
pub use route::run_route;
pub use rules::run_rules;

use crate::config::{ConfigFile, RouterConfigFile};
use crate::error::Result;

/// Load the configuration from an explicit path or the default locations.
///
/// An explicit path that fails to load is an error; with no path, missing
/// default files fall back to an empty configuration.
pub(crate) fn load_config(path: Option<&str>) -> Result<RouterConfigFile> {
    match path {
        Some(path) => ConfigFile::load(path),
        None => Ok(ConfigFile::load_default().unwrap_or_default()),
    }
}
