//! Mock implementations for exercising widget logic without network access.

use std::{collections::VecDeque, sync::Mutex};

use crate::{
    CompletionError, CompletionInput, CompletionModel, CompletionResult, QuoteError, QuoteResult,
    QuoteSource,
};

#[derive(Default)]
struct MockCompletionState {
    mocked_results: VecDeque<CompletionResult<String>>,
    tracked_inputs: Vec<CompletionInput>,
}

/// A mock completion model that tracks inputs and yields predefined replies.
#[derive(Default)]
pub struct MockCompletionModel {
    state: Mutex<MockCompletionState>,
}

impl MockCompletionModel {
    /// Construct a new mock completion model instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a reply to be returned by the next `complete` call.
    pub fn enqueue_reply(&self, reply: impl Into<String>) -> &Self {
        self.enqueue_result(Ok(reply.into()))
    }

    /// Enqueue an error to be returned by the next `complete` call.
    pub fn enqueue_error(&self, error: CompletionError) -> &Self {
        self.enqueue_result(Err(error))
    }

    /// Enqueue a raw result.
    pub fn enqueue_result(&self, result: CompletionResult<String>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.push_back(result);
        drop(state);
        self
    }

    /// Retrieve the tracked completion inputs accumulated so far.
    #[must_use]
    pub fn tracked_inputs(&self) -> Vec<CompletionInput> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_inputs.clone()
    }

    /// Clear both tracked inputs and enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.clear();
        state.tracked_inputs.clear();
    }
}

#[async_trait::async_trait]
impl CompletionModel for MockCompletionModel {
    fn provider(&self) -> &'static str {
        "mock"
    }

    fn model_id(&self) -> String {
        "mock-model".to_string()
    }

    async fn complete(&self, input: CompletionInput) -> CompletionResult<String> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_inputs.push(input);

        match state.mocked_results.pop_front() {
            Some(result) => result,
            None => Err(CompletionError::Invariant(
                "mock",
                "no mocked completion results available".to_string(),
            )),
        }
    }
}

#[derive(Default)]
struct MockQuoteState {
    mocked_results: VecDeque<QuoteResult<String>>,
    fetch_count: usize,
}

/// A mock quote source that yields predefined quotes or errors.
///
/// An exhausted queue yields errors, which matches a quote service that has
/// become unreachable.
#[derive(Default)]
pub struct MockQuoteSource {
    state: Mutex<MockQuoteState>,
}

impl MockQuoteSource {
    /// Construct a new mock quote source instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a quote to be returned by the next `fetch_quote` call.
    pub fn enqueue_quote(&self, quote: impl Into<String>) -> &Self {
        self.enqueue_result(Ok(quote.into()))
    }

    /// Enqueue an error to be returned by the next `fetch_quote` call.
    pub fn enqueue_error(&self, error: QuoteError) -> &Self {
        self.enqueue_result(Err(error))
    }

    /// Enqueue a raw result.
    pub fn enqueue_result(&self, result: QuoteResult<String>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.push_back(result);
        drop(state);
        self
    }

    /// Number of `fetch_quote` calls made so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.fetch_count
    }
}

#[async_trait::async_trait]
impl QuoteSource for MockQuoteSource {
    async fn fetch_quote(&self) -> QuoteResult<String> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.fetch_count += 1;

        match state.mocked_results.pop_front() {
            Some(result) => result,
            None => Err(QuoteError::Invariant(
                "no mocked quote results available".to_string(),
            )),
        }
    }
}
