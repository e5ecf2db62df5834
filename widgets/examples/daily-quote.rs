use std::sync::Arc;
use uplift_sdk::{ZenQuoteApi, ZenQuoteApiOptions};
use uplift_widgets::QuoteRotator;

#[tokio::main]
async fn main() {
    let source = ZenQuoteApi::new(ZenQuoteApiOptions::default());
    let mut rotator = QuoteRotator::new(Arc::new(source));

    // A handful of pulls to show the no-repeat behavior.
    for _ in 0..3 {
        println!("\"{}\"", rotator.quote().await);
    }
}
