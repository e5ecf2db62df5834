use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use uplift_sdk::QuoteSource;

/// Remote fetch attempts per quote request before falling back to the local
/// pool. Each attempt may itself try two transport paths inside the source.
pub const MAX_REMOTE_ATTEMPTS: usize = 5;

/// Curated local pool used whenever the remote service is unavailable or
/// keeps repeating itself.
pub const FALLBACK_QUOTES: [&str; 30] = [
    "You are stronger than you know, braver than you believe, and more loved than you can imagine.",
    "This too shall pass. You've overcome challenges before, and you will overcome this one too.",
    "Your worth is not determined by your struggles. You are valuable just as you are.",
    "Every sunrise is a new beginning. Today is a fresh start, full of possibilities.",
    "You don't have to be perfect to be worthy of love and happiness.",
    "The darkest nights produce the brightest stars. Your light will shine again.",
    "You are not alone in this. There are people who care about you deeply.",
    "Healing is not linear, and that's perfectly okay. Progress, not perfection.",
    "You have survived 100% of your worst days. You are a survivor.",
    "Your feelings are valid, and it's okay to take time to process them.",
    "Small steps still move you forward. Be proud of every one of them.",
    "Rest is not a reward you have to earn. You're allowed to pause.",
    "Asking for help is a sign of strength, not weakness.",
    "You are allowed to outgrow the version of you that survived last year.",
    "Storms run out of rain. Whatever you're facing will ease.",
    "Be as kind to yourself as you would be to a friend in your place.",
    "Your pace is your own. You don't have to keep up with anyone else.",
    "Even on the hard days, you are still growing.",
    "One bad chapter doesn't mean your story is over.",
    "You've gotten through every day so far. That's a perfect record.",
    "It's okay to not have it all figured out. Nobody really does.",
    "Breathe. You don't have to solve everything tonight.",
    "The fact that you're trying matters more than you know.",
    "You bring something to the world that no one else can.",
    "Hope is allowed, even when things are uncertain.",
    "Today counts, even if all you did was keep going.",
    "Your best is allowed to look different from day to day.",
    "Courage doesn't always roar. Sometimes it's quietly trying again tomorrow.",
    "You deserve the same compassion you give everyone else.",
    "Better days are not just possible, they're coming.",
];

/// Session-scoped quote selection state.
///
/// Prefers the remote source, avoids repeating anything already shown this
/// session, and falls back to [`FALLBACK_QUOTES`] when the remote side is
/// unavailable or exhausted.
pub struct QuoteRotator {
    source: Arc<dyn QuoteSource>,
    used_api: HashSet<String>,
    used_local: HashSet<String>,
}

impl QuoteRotator {
    #[must_use]
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            used_api: HashSet::new(),
            used_local: HashSet::new(),
        }
    }

    /// Produce the next quote. Never fails.
    ///
    /// Up to [`MAX_REMOTE_ATTEMPTS`] remote fetches; a quote already shown
    /// this session doesn't count as a success. On exhaustion every failure
    /// degrades to [`Self::unique_fallback_quote`].
    pub async fn quote(&mut self) -> String {
        for attempt in 1..=MAX_REMOTE_ATTEMPTS {
            match self.source.fetch_quote().await {
                Ok(quote) => {
                    if self.used_api.insert(quote.clone()) {
                        return quote;
                    }
                    debug!(attempt, "remote quote already shown this session");
                }
                Err(error) => {
                    debug!(attempt, %error, "remote quote fetch failed");
                }
            }
        }

        debug!("remote quote attempts exhausted, using local pool");
        self.unique_fallback_quote()
    }

    /// Pick from the local pool uniformly at random, avoiding repeats until
    /// the whole pool has been shown, then starting over.
    pub fn unique_fallback_quote(&mut self) -> String {
        let mut candidates: Vec<&str> = FALLBACK_QUOTES
            .iter()
            .copied()
            .filter(|quote| !self.used_local.contains(*quote))
            .collect();

        if candidates.is_empty() {
            self.used_local.clear();
            candidates = FALLBACK_QUOTES.to_vec();
        }

        let quote = candidates
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FALLBACK_QUOTES[0]);

        self.used_local.insert(quote.to_string());
        quote.to_string()
    }

    /// Forget everything shown this session.
    pub fn reset(&mut self) {
        self.used_api.clear();
        self.used_local.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_sdk::testing::MockQuoteSource;

    fn rotator() -> QuoteRotator {
        QuoteRotator::new(Arc::new(MockQuoteSource::new()))
    }

    #[test]
    fn fallback_pool_has_thirty_distinct_entries() {
        let distinct: HashSet<&str> = FALLBACK_QUOTES.iter().copied().collect();
        assert_eq!(distinct.len(), 30);
    }

    #[test]
    fn fallback_never_repeats_until_pool_exhausted() {
        let mut rotator = rotator();

        let mut seen = HashSet::new();
        for _ in 0..FALLBACK_QUOTES.len() {
            let quote = rotator.unique_fallback_quote();
            assert!(seen.insert(quote), "quote repeated before pool exhausted");
        }
        // Whole pool shown exactly once.
        assert_eq!(seen.len(), FALLBACK_QUOTES.len());

        // The set has reset; the next pick is a repeat by necessity.
        let next = rotator.unique_fallback_quote();
        assert!(seen.contains(&next));
    }

    #[test]
    fn fallback_is_always_a_pool_member() {
        let mut rotator = rotator();
        for _ in 0..100 {
            let quote = rotator.unique_fallback_quote();
            assert!(FALLBACK_QUOTES.contains(&quote.as_str()));
        }
    }

    #[test]
    fn reset_forgets_shown_quotes() {
        let mut rotator = rotator();
        let first = rotator.unique_fallback_quote();
        rotator.reset();
        assert!(rotator.used_local.is_empty());
        // After a reset the same quote may legitimately come back.
        let _ = first;
    }
}
