use dotenvy::dotenv;
use uplift_sdk::{
    ApiConfig, ChatMessage, CompletionInput, CompletionModel, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE,
};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let model = ApiConfig::default().build_model().unwrap();

    let reply = model
        .complete(CompletionInput {
            system_prompt: Some(
                "You are a supportive, caring friend having a conversation.".to_string(),
            ),
            messages: vec![
                ChatMessage::user("I had a rough day."),
                ChatMessage::assistant("I'm sorry to hear that. What happened?"),
                ChatMessage::user("Work was just too much."),
            ],
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            temperature: Some(DEFAULT_TEMPERATURE),
        })
        .await
        .unwrap();

    println!("{reply}");
}
