use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read playlist {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {line} has {found} values, expected {expected}")]
    RowShape {
        line: usize,
        found: usize,
        expected: usize,
    },
}
