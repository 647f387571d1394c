use thiserror::Error;

/// Errors surfaced to callers of the analyzer.
///
/// The local pipeline never produces these; they come from the input
/// sources around it (URL fetching, reference data files, configuration).
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Failed to fetch a recipe page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The fetched page had no usable recipe text
    #[error("No recipe text found at {0}")]
    NoRecipeText(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Reference data file could not be read
    #[error("Failed to read reference data {path}: {source}")]
    ReferenceIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reference data file was not valid JSON or had the wrong shape
    #[error("Invalid reference data: {0}")]
    ReferenceFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Failure of the remote analysis collaborator.
///
/// Every variant is treated the same by the orchestrator: the remote is
/// unavailable and the local pipeline runs instead.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Remote request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote analysis returned status {0}")]
    Status(u16),

    #[error("Malformed remote response: {0}")]
    Malformed(String),

    #[error("Remote analysis timed out after {0:?}")]
    Timeout(std::time::Duration),
}
