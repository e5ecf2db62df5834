use crate::{client_utils, QuoteError, QuoteResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

pub const ZEN_QUOTES_BASE_URL: &str = "https://zenquotes.io";

/// Generic CORS relay. Wraps the upstream body in a JSON envelope.
const RELAY_BASE_URL: &str = "https://api.allorigins.win/get";

/// A source of motivational quotes.
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch a single quote.
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] when neither transport path yields a quote.
    async fn fetch_quote(&self) -> QuoteResult<String>;
}

/// Client for the zenquotes-style random quote endpoint.
///
/// Each fetch tries the endpoint directly and, on any failure, retries once
/// through the relay before giving up.
pub struct ZenQuoteApi {
    base_url: String,
    client: Client,
}

#[derive(Clone, Default)]
pub struct ZenQuoteApiOptions {
    /// Overrides [`ZEN_QUOTES_BASE_URL`].
    pub base_url: Option<String>,
    pub client: Option<Client>,
}

impl ZenQuoteApi {
    #[must_use]
    pub fn new(options: ZenQuoteApiOptions) -> Self {
        let ZenQuoteApiOptions { base_url, client } = options;

        let base_url = base_url
            .unwrap_or_else(|| ZEN_QUOTES_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);

        Self { base_url, client }
    }

    fn random_url(&self) -> String {
        format!("{}/api/random", self.base_url)
    }

    async fn fetch_direct(&self) -> QuoteResult<String> {
        let quotes: Vec<QuoteEntry> =
            client_utils::get_json(&self.client, &self.random_url()).await?;
        first_quote_text(quotes)
    }

    /// Same request routed through the relay. The upstream body arrives as a
    /// string inside the envelope, so it is parsed a second time.
    async fn fetch_relayed(&self) -> QuoteResult<String> {
        let url = format!(
            "{RELAY_BASE_URL}?url={}",
            urlencoding::encode(&self.random_url())
        );
        let envelope: RelayEnvelope = client_utils::get_json(&self.client, &url).await?;
        let quotes: Vec<QuoteEntry> = serde_json::from_str(&envelope.contents)
            .map_err(|error| QuoteError::Relay(format!("invalid relayed payload: {error}")))?;
        first_quote_text(quotes)
    }
}

#[async_trait::async_trait]
impl QuoteSource for ZenQuoteApi {
    async fn fetch_quote(&self) -> QuoteResult<String> {
        match self.fetch_direct().await {
            Ok(quote) => Ok(quote),
            Err(error) => {
                debug!(%error, "direct quote fetch failed, retrying through relay");
                self.fetch_relayed().await
            }
        }
    }
}

fn first_quote_text(quotes: Vec<QuoteEntry>) -> QuoteResult<String> {
    quotes
        .into_iter()
        .next()
        .map(|entry| entry.q)
        .ok_or_else(|| QuoteError::Invariant("empty quote array".to_string()))
}

/// Element of the quote payload; `q` is the quote text.
#[derive(Debug, Clone, Deserialize)]
struct QuoteEntry {
    q: String,
}

#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_first_element_text() {
        let quotes: Vec<QuoteEntry> = serde_json::from_str(
            r#"[{"q":"Every sunrise is a new beginning.","a":"Unknown","h":"<blockquote>...</blockquote>"}]"#,
        )
        .unwrap();
        assert_eq!(
            first_quote_text(quotes).unwrap(),
            "Every sunrise is a new beginning."
        );
    }

    #[test]
    fn empty_payload_is_an_invariant_error() {
        let result = first_quote_text(vec![]);
        assert!(matches!(result, Err(QuoteError::Invariant(_))));
    }

    #[test]
    fn relay_envelope_unwraps_to_quote_payload() {
        let envelope: RelayEnvelope = serde_json::from_str(
            r#"{"contents":"[{\"q\":\"This too shall pass.\",\"a\":\"Unknown\"}]","status":{"http_code":200}}"#,
        )
        .unwrap();
        let quotes: Vec<QuoteEntry> = serde_json::from_str(&envelope.contents).unwrap();
        assert_eq!(first_quote_text(quotes).unwrap(), "This too shall pass.");
    }

    #[test]
    fn relay_url_is_percent_encoded() {
        let api = ZenQuoteApi::new(ZenQuoteApiOptions::default());
        let random_url = api.random_url();
        let encoded = urlencoding::encode(&random_url);
        assert_eq!(encoded, "https%3A%2F%2Fzenquotes.io%2Fapi%2Frandom");
    }
}
