//! Store path configuration: defaults, then an optional `withal.toml`,
//! then `WITHAL_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::fault::Fault;
use crate::store::DEFAULT_STORE_PATH;

/// Base name of the settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "withal";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreSettings {
    pub path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store: StoreSettings {
                path: DEFAULT_STORE_PATH.to_string(),
            },
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, Fault> {
        Self::from_file(SETTINGS_FILE)
    }

    /// Later sources win: defaults, then the named file (which may be
    /// absent), then the environment (e.g. `WITHAL_STORE__PATH`).
    pub fn from_file(name: &str) -> Result<Self, Fault> {
        let settings = Config::builder()
            .set_default("store.path", DEFAULT_STORE_PATH)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("WITHAL").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
