use crate::{CompletionError, QuoteError};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

/// Create a JSON request, parse the response.
/// Throws error on non-success status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<R, CompletionError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    if response.status().is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(CompletionError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    }
}

/// Issue a GET request, parse the JSON response.
/// Throws error on non-success status code.
pub async fn get_json<R: DeserializeOwned>(client: &Client, url: &str) -> Result<R, QuoteError> {
    let response = client.get(url).send().await?;
    if response.status().is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(QuoteError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    }
}
