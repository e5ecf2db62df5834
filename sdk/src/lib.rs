mod client_utils;
mod completion;
mod config;
mod errors;
mod openai;
mod quotes;
pub mod testing;
mod types;

pub use completion::CompletionModel;
pub use config::{ApiConfig, API_KEY_ENV, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use errors::*;
pub use openai::{OpenAIChatModel, OpenAIChatModelOptions, GROQ_BASE_URL};
pub use quotes::{QuoteSource, ZenQuoteApi, ZenQuoteApiOptions, ZEN_QUOTES_BASE_URL};
pub use types::*;
