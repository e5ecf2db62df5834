use crate::{CompletionInput, CompletionResult};

/// A provider that can turn a conversation into a single assistant reply.
#[async_trait::async_trait]
pub trait CompletionModel: Send + Sync {
    fn provider(&self) -> &'static str;

    fn model_id(&self) -> String;

    /// Generate the assistant reply for the given input.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::CompletionError`] when the request cannot be sent,
    /// the service answers with a non-success status, or the response does
    /// not contain a usable reply.
    async fn complete(&self, input: CompletionInput) -> CompletionResult<String>;
}
