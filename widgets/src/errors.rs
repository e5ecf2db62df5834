use thiserror::Error;

/// Reasons a chat turn failed to produce a usable assistant reply.
///
/// [`crate::ChatSession::respond`] converts every variant into the fixed
/// maintenance message; the typed error is observable through
/// [`crate::ChatSession::try_respond`].
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Completion error: {0}")]
    Completion(#[from] uplift_sdk::CompletionError),
    /// The service answered, but with a reply too short to be usable.
    #[error("Reply of {0} characters is too short to be usable")]
    ReplyTooShort(usize),
}
