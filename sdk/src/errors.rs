use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-success status code.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the provider was unexpected. (e.g. no choices
    /// returned in a completion)
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type CompletionResult<T> = Result<T, CompletionError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    /// The request to the quote service failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-success status code.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The relay returned an envelope whose contents could not be unwrapped
    /// into a quote payload.
    #[error("Relay error: {0}")]
    Relay(String),
    /// The quote payload did not have the expected shape. (e.g. an empty
    /// array)
    #[error("Invariant: {0}")]
    Invariant(String),
}

pub type QuoteResult<T> = Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// No credential was configured and none was found in the environment.
    /// There is intentionally no baked-in fallback value.
    #[error("no API key: set `api_key` in the config or the {0} environment variable")]
    MissingApiKey(&'static str),
}
