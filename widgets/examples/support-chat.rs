use dotenvy::dotenv;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use uplift_sdk::ApiConfig;
use uplift_widgets::{ChatSession, Genre};

/// Interactive support chat. Pick a persona with an argument
/// (`mental-health`, `medical`, `financial`, `tech`), default mental-health.
#[tokio::main]
async fn main() {
    dotenv().ok();

    let genre = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<Genre>().expect("unknown genre"))
        .unwrap_or_default();

    let model = ApiConfig::default()
        .build_model()
        .expect("GROQ_API_KEY must be set");

    let mut session = ChatSession::builder(Arc::new(model)).genre(genre).build();

    println!("{} — type a message, empty line to quit", genre.title());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            break;
        }

        // The page shows a typing indicator for a moment; simulate it here.
        tokio::time::sleep(Duration::from_millis(600)).await;

        println!("{}", session.respond(message).await);
    }
}
