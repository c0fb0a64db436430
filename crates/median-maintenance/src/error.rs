use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaintenanceError {
    #[error("Unable to load the configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("The modulus must be a positive integer")]
    ZeroModulus,
    #[error("Unable to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line} `{text}` is not an integer: {source}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}
