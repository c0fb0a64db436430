use std::num::NonZeroU64;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::MaintenanceError;

const ENV_PREFIX: &str = "MEDIAN_";

/// Raw settings as read from `MEDIAN_*` environment variables.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_input_path")]
    input_path: PathBuf,
    #[serde(default = "default_modulus")]
    modulus: u64,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("Median.txt")
}

fn default_modulus() -> u64 {
    10_000
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub modulus: NonZeroU64,
}

impl Config {
    /**
    Loads the configuration from the process environment, after merging in a `.env` file
    if one is present in the working directory.
    */
    pub fn from_env() -> Result<Self, MaintenanceError> {
        // A missing .env file is fine, the defaults cover everything.
        dotenv::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, MaintenanceError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        let modulus = NonZeroU64::new(raw.modulus).ok_or(MaintenanceError::ZeroModulus)?;
        Ok(Self {
            input_path: raw.input_path,
            modulus,
        })
    }

    /// A positional path on the command line wins over the environment.
    pub fn with_input_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.input_path = path;
        }
        self
    }
}
