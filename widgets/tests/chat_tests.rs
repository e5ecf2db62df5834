use std::sync::Arc;
use uplift_sdk::{testing::MockCompletionModel, CompletionError, Role};
use uplift_widgets::{ChatError, ChatSession, Genre, MAINTENANCE_MESSAGE, MAX_TURNS};

fn session(model: &Arc<MockCompletionModel>) -> ChatSession {
    ChatSession::builder(model.clone()).build()
}

#[tokio::test]
async fn respond_returns_reply_and_records_both_turns() {
    let model = Arc::new(MockCompletionModel::new());
    model.enqueue_reply("I'm really glad you reached out. What's on your mind?");

    let mut session = session(&model);
    let reply = session.respond("I had a rough day.").await;

    assert_eq!(reply, "I'm really glad you reached out. What's on your mind?");

    let turns = session.history().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[0].content, "I had a rough day.");
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].content, reply);
}

#[tokio::test]
async fn request_carries_genre_prompt_and_bounded_context() {
    let model = Arc::new(MockCompletionModel::new());
    for _ in 0..7 {
        model.enqueue_reply("That sounds hard. Tell me more?");
    }

    let mut session = session(&model);
    for i in 0..6 {
        session.respond(format!("message {i}")).await;
    }
    // 12 turns stored; the 13th (the new user message) rolls the window.
    session.respond("the newest message").await;

    let inputs = model.tracked_inputs();
    let last = inputs.last().unwrap();

    assert_eq!(
        last.system_prompt.as_deref(),
        Some(Genre::MentalHealth.system_prompt())
    );
    assert_eq!(last.messages.len(), 8);
    assert_eq!(last.messages.last().unwrap().content, "the newest message");
}

#[tokio::test]
async fn completion_failure_returns_exact_maintenance_message() {
    let model = Arc::new(MockCompletionModel::new());
    model.enqueue_error(CompletionError::Invariant("mock", "boom".to_string()));

    let mut session = session(&model);
    let reply = session.respond("hello?").await;

    assert_eq!(reply, MAINTENANCE_MESSAGE);

    // The user turn is kept; the maintenance message is not stored.
    let turns = session.history().turns();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].role, Role::User);
}

#[tokio::test]
async fn ten_char_reply_is_a_failure_eleven_is_not() {
    let model = Arc::new(MockCompletionModel::new());

    model.enqueue_reply("0123456789"); // exactly 10 chars
    let mut session = session(&model);
    assert_eq!(session.respond("hi").await, MAINTENANCE_MESSAGE);
    assert_eq!(session.history().len(), 1);

    model.enqueue_reply("hello there"); // 11 chars
    assert_eq!(session.respond("hi again").await, "hello there");
    assert_eq!(session.history().len(), 3);
}

#[tokio::test]
async fn short_reply_error_is_typed() {
    let model = Arc::new(MockCompletionModel::new());
    model.enqueue_reply("ok");

    let mut session = session(&model);
    let error = session.try_respond("hi".to_string()).await.unwrap_err();

    assert!(matches!(error, ChatError::ReplyTooShort(2)));
}

#[tokio::test]
async fn switching_genre_changes_prompt_without_mutating_history() {
    let model = Arc::new(MockCompletionModel::new());
    model.enqueue_reply("I hear you. Want to talk it through?");
    model.enqueue_reply("Let's try restarting it together.");

    let mut session = session(&model);
    session.respond("feeling low").await;

    let stored_before: Vec<_> = session.history().turns().to_vec();

    session.set_genre(Genre::Tech);
    session.respond("also my laptop is broken").await;

    let inputs = model.tracked_inputs();
    assert_eq!(
        inputs[0].system_prompt.as_deref(),
        Some(Genre::MentalHealth.system_prompt())
    );
    assert_eq!(
        inputs[1].system_prompt.as_deref(),
        Some(Genre::Tech.system_prompt())
    );

    // Turns recorded under the old genre are untouched.
    assert_eq!(&session.history().turns()[..2], &stored_before[..]);
}

#[tokio::test]
async fn stored_history_never_exceeds_cap() {
    let model = Arc::new(MockCompletionModel::new());
    for _ in 0..15 {
        model.enqueue_reply("Thanks for sharing that with me.");
    }

    let mut session = session(&model);
    for i in 0..15 {
        session.respond(format!("message {i}")).await;
    }

    assert_eq!(session.history().len(), MAX_TURNS);
}

#[tokio::test]
async fn clear_history_keeps_genre() {
    let model = Arc::new(MockCompletionModel::new());
    model.enqueue_reply("Happy to help with your budget.");

    let mut session = ChatSession::builder(model.clone())
        .genre(Genre::Financial)
        .build();
    session.respond("money is tight").await;

    session.clear_history();

    assert!(session.history().is_empty());
    assert_eq!(session.genre(), Genre::Financial);
}
