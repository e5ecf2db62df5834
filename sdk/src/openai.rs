use crate::{
    client_utils, ChatMessage, CompletionError, CompletionInput, CompletionModel, CompletionResult,
};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};
use serde::{Deserialize, Serialize};

const PROVIDER: &str = "openai-chat";

/// Groq hosts the completion service behind an OpenAI-compatible API.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// A client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// One request, one reply. No streaming and no retries; the widget layer
/// decides what a failed call degrades to.
pub struct OpenAIChatModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Clone, Default)]
pub struct OpenAIChatModelOptions {
    /// Overrides [`GROQ_BASE_URL`].
    pub base_url: Option<String>,
    pub api_key: String,
    pub client: Option<Client>,
}

impl OpenAIChatModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: OpenAIChatModelOptions) -> Self {
        let OpenAIChatModelOptions {
            base_url,
            api_key,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| GROQ_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
        }
    }

    fn request_headers(&self) -> CompletionResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth_header =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|error| {
                CompletionError::InvalidInput(format!("Invalid API key header value: {error}"))
            })?;
        auth_header.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_header);

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl CompletionModel for OpenAIChatModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn complete(&self, input: CompletionInput) -> CompletionResult<String> {
        let request = convert_to_chat_request(input, &self.model_id);
        let headers = self.request_headers()?;

        let response: ChatCompletionResponse = client_utils::send_json(
            &self.client,
            &format!("{}/chat/completions", self.base_url),
            &request,
            headers,
        )
        .await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            CompletionError::Invariant(PROVIDER, "No choices in response".to_string())
        })?;

        choice.message.content.ok_or_else(|| {
            CompletionError::Invariant(PROVIDER, "No content in choice message".to_string())
        })
    }
}

fn convert_to_chat_request(input: CompletionInput, model_id: &str) -> ChatCompletionRequest {
    let CompletionInput {
        system_prompt,
        messages,
        max_tokens,
        temperature,
    } = input;

    let mut request_messages = Vec::with_capacity(messages.len() + 1);
    if let Some(system_prompt) = system_prompt {
        request_messages.push(ChatMessage::system(system_prompt));
    }
    request_messages.extend(messages);

    ChatCompletionRequest {
        model: model_id.to_string(),
        messages: request_messages,
        max_tokens,
        temperature,
        stream: false,
    }
}

// https://platform.openai.com/docs/api-reference/chat
#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}
