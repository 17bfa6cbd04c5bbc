use std::path::PathBuf;
use thiserror::Error;

/// Failure of a call to the remote annotation service. This is the only
/// error kind the per-gene processing can raise; it aborts the whole run.
#[derive(Debug, Error)]
pub enum RemoteLookupError {
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response from '{url}': {message}")]
    Malformed { url: String, message: String },
}

#[derive(Debug, Error)]
pub enum PromoterError {
    #[error(transparent)]
    Remote(#[from] RemoteLookupError),
    #[error("could not access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write table row: {0}")]
    Csv(#[from] csv::Error),
}

impl PromoterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
