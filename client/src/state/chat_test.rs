use super::*;

fn opened(video_id: &str) -> ChatState {
    let mut chat = ChatState::default();
    chat.open(video_id);
    chat
}

fn reply(text: &str, timestamp: Option<&str>) -> ChatResponse {
    ChatResponse { reply: text.to_owned(), confidence: 0.92, related_timestamp: timestamp.map(str::to_owned) }
}

#[test]
fn push_user_trims_and_marks_pending() {
    let mut chat = ChatState::default();
    assert_eq!(chat.push_user("  how is my knee?  ").as_deref(), Some("how is my knee?"));
    assert!(chat.pending);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].role, ChatRole::User);
}

#[test]
fn blank_input_is_ignored() {
    let mut chat = ChatState::default();
    assert!(chat.push_user("   ").is_none());
    assert!(chat.messages.is_empty());
    assert!(!chat.pending);
}

#[test]
fn second_question_waits_for_reply() {
    let mut chat = ChatState::default();
    chat.push_user("first");
    assert!(chat.push_user("second").is_none());
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn successful_reply_carries_confidence_and_timestamp() {
    let mut chat = opened("v1");
    chat.push_user("knee?");
    chat.resolve::<()>("v1", Ok(reply("**Knee** at 0:04", Some("0:04"))));
    assert!(!chat.pending);
    let last = chat.messages.last().expect("reply");
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.confidence, Some(0.92));
    assert_eq!(last.related_timestamp.as_deref(), Some("0:04"));
}

#[test]
fn empty_related_timestamp_is_dropped() {
    let mut chat = opened("v1");
    chat.push_user("summary");
    chat.resolve::<()>("v1", Ok(reply("ok", Some(""))));
    assert!(chat.messages[1].related_timestamp.is_none());
}

#[test]
fn failed_request_appends_single_fallback() {
    let mut chat = opened("v1");
    chat.push_user("knee?");
    chat.resolve("v1", Err("offline"));
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].role, ChatRole::User);
    let fallback = &chat.messages[1];
    assert_eq!(fallback.role, ChatRole::Assistant);
    assert_eq!(fallback.content, FALLBACK_REPLY);
    assert_eq!(fallback.confidence, Some(FALLBACK_CONFIDENCE));
    assert!(!chat.pending);
}

#[test]
fn open_resets_history_for_another_video() {
    let mut chat = ChatState::default();
    chat.open("v1");
    chat.push_user("hi");
    chat.open("v1");
    assert_eq!(chat.messages.len(), 1);
    chat.open("v2");
    assert!(chat.messages.is_empty());
    assert!(!chat.pending);
    assert_eq!(chat.video_id.as_deref(), Some("v2"));
}

#[test]
fn message_ids_are_unique() {
    let mut chat = opened("v1");
    chat.push_user("a");
    chat.resolve("v1", Err(()));
    assert_ne!(chat.messages[0].id, chat.messages[1].id);
}

#[test]
fn reply_for_previous_video_is_dropped() {
    let mut chat = opened("v1");
    chat.push_user("knee?");
    chat.open("v2");
    chat.push_user("hip?");

    assert!(!chat.resolve::<()>("v1", Ok(reply("knee answer", None))));
    assert_eq!(chat.messages.len(), 1);
    assert!(chat.pending);

    assert!(chat.resolve::<()>("v2", Ok(reply("hip answer", None))));
    assert_eq!(chat.messages[1].content, "hip answer");
    assert!(!chat.pending);
}
