use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode scenario: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("invalid log format: {0}")]
    LogFormat(#[from] ballot_utils::LoggingError),

    #[error("scenario has no steps")]
    NoSteps,
}
