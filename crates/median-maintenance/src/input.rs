use std::path::Path;

use heap_median::MedianFinder;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::MaintenanceError;

/// Trims a line and parses it. Blank lines yield `None`.
fn parse_line(line_no: usize, line: &str) -> Option<Result<i64, MaintenanceError>> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.parse().map_err(|source| MaintenanceError::Parse {
        line: line_no,
        text: text.to_string(),
        source,
    }))
}

/// Feeds every integer line of `reader` into `finder`, in order.
/// Returns how many values were ingested.
pub async fn ingest<R>(
    reader: R,
    origin: &Path,
    finder: &mut MedianFinder<i64>,
) -> Result<usize, MaintenanceError>
where
    R: AsyncBufRead + Unpin,
{
    let io_error = |source| MaintenanceError::Io {
        path: origin.to_path_buf(),
        source,
    };

    let mut lines = reader.lines();
    let mut line_no = 0;
    let mut count = 0;
    while let Some(line) = lines.next_line().await.map_err(io_error)? {
        line_no += 1;
        if let Some(value) = parse_line(line_no, &line) {
            finder.insert(value?);
            count += 1;
        }
    }
    tracing::debug!(path = %origin.display(), lines = line_no, count, "Finished reading the stream");
    Ok(count)
}

pub async fn ingest_file(
    path: &Path,
    finder: &mut MedianFinder<i64>,
) -> Result<usize, MaintenanceError> {
    let file = File::open(path).await.map_err(|source| MaintenanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ingest(BufReader::new(file), path, finder).await
}
