use std::path::PathBuf;

use heap_median::{measure_time, MedianFinder};

use crate::config::Config;
use crate::error::MaintenanceError;

mod config;
mod error;
mod input;

/**
Reads the configured stream, tracks the running median of every prefix and returns
the sum of those medians reduced by the configured modulus.
*/
async fn run(config: &Config) -> Result<u64, MaintenanceError> {
    let mut finder = MedianFinder::new();
    let (ingested, elapsed) = measure_time!({ input::ingest_file(&config.input_path, &mut finder).await });
    let count = ingested?;

    tracing::info!(count, ?elapsed, median = ?finder.current_median(), "Ingested the stream");
    Ok(finder.sum_modulo(config.modulus))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?.with_input_override(std::env::args().nth(1).map(PathBuf::from));
    tracing::info!(path = %config.input_path.display(), modulus = config.modulus.get(), "Loaded the configuration");

    match run(&config).await {
        Ok(answer) => {
            tracing::info!(answer, "Sum of running medians");
            println!("{answer}");
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error, "Failed to compute the running medians");
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::num::NonZeroU64;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn config_for(path: &Path, modulus: u64) -> Config {
        Config {
            input_path: path.to_path_buf(),
            modulus: NonZeroU64::new(modulus).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_reference_answer() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/reference.txt");
        assert_eq!(run(&config_for(&path, 10_000)).await.unwrap(), 142);
        assert_eq!(run(&config_for(&path, 100)).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_empty_stream_answers_zero() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(run(&config_for(file.path(), 10_000)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_negative_stream() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "-3\n-10\n-1").unwrap();
        assert_eq!(run(&config_for(file.path(), 10_000)).await.unwrap(), 9_984);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "7\n1.5").unwrap();
        let error = run(&config_for(file.path(), 10_000)).await.unwrap_err();
        assert!(matches!(error, MaintenanceError::Parse { line: 2, .. }));
    }
}
