use crate::{ChatError, ConversationHistory, Genre};
use std::sync::Arc;
use tracing::warn;
use uplift_sdk::{CompletionInput, CompletionModel, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Returned whenever the completion service cannot produce a usable reply.
pub const MAINTENANCE_MESSAGE: &str = "I'm sorry - our support assistant is down for a little \
    maintenance right now. Please check back in a few minutes; we'll be here for you.";

/// Replies of this many characters or fewer are treated as a service failure.
const MIN_REPLY_CHARS: usize = 10;

/// A stateful conversation with one support persona.
///
/// Holds the session's genre and bounded history. All state is single-owner
/// `&mut self` state; share it across tasks by wrapping the session, not by
/// cloning it.
pub struct ChatSession {
    model: Arc<dyn CompletionModel>,
    genre: Genre,
    history: ConversationHistory,
    max_tokens: u32,
    temperature: f64,
}

impl ChatSession {
    #[must_use]
    pub fn new(params: ChatSessionParams) -> Self {
        Self {
            model: params.model,
            genre: params.genre,
            history: ConversationHistory::new(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }

    pub fn builder(model: Arc<dyn CompletionModel>) -> ChatSessionParams {
        ChatSessionParams::new(model)
    }

    /// Exchange one message with the support persona. Never fails: any
    /// transport problem or unusable reply degrades to [`MAINTENANCE_MESSAGE`].
    ///
    /// The user message is recorded in history either way; the maintenance
    /// message is not, so a degraded turn never pollutes later context.
    pub async fn respond(&mut self, user_message: impl Into<String>) -> String {
        match self.try_respond(user_message.into()).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, genre = %self.genre, "support chat degraded to maintenance message");
                MAINTENANCE_MESSAGE.to_string()
            }
        }
    }

    /// The fallible core of [`Self::respond`]: appends the user message,
    /// sends the genre's system prompt plus the most recent history window,
    /// and appends the assistant reply on success.
    ///
    /// No retries; the chat endpoint gets exactly one chance per turn.
    pub async fn try_respond(&mut self, user_message: String) -> Result<String, ChatError> {
        self.history.push_user(user_message);

        let input = CompletionInput {
            system_prompt: Some(self.genre.system_prompt().to_string()),
            messages: self.history.context().to_vec(),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        let reply = self.model.complete(input).await?;

        let chars = reply.chars().count();
        if chars <= MIN_REPLY_CHARS {
            return Err(ChatError::ReplyTooShort(chars));
        }

        self.history.push_assistant(reply.clone());
        Ok(reply)
    }

    /// Switch persona. Takes effect on the next request; stored history is
    /// untouched.
    pub fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }

    #[must_use]
    pub fn genre(&self) -> Genre {
        self.genre
    }

    #[must_use]
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Forget the conversation so far. Genre is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Parameters required to create a new chat session.
/// # Default Values
/// - `genre`: [`Genre::MentalHealth`]
/// - `max_tokens`: [`DEFAULT_MAX_TOKENS`]
/// - `temperature`: [`DEFAULT_TEMPERATURE`]
pub struct ChatSessionParams {
    pub model: Arc<dyn CompletionModel>,
    pub genre: Genre,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl ChatSessionParams {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self {
            model,
            genre: Genre::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Set the starting persona
    #[must_use]
    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    /// Set the reply length bound
    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn build(self) -> ChatSession {
        ChatSession::new(self)
    }
}
