use std::sync::{Arc, Mutex};

use atelier::application::ports::{
    ChatModel, ChatModelError, ChatRole, CompletionRequest,
};
use atelier::application::services::{ReplyError, ReplyService};
use atelier::domain::{Message, MessageRole};

struct CapturingChatModel {
    seen: Mutex<Vec<CompletionRequest>>,
    reply: String,
}

impl CapturingChatModel {
    fn new(reply: &str) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            reply: reply.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ChatModel for CapturingChatModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ChatModelError> {
        self.seen.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

struct FailingChatModel;

#[async_trait::async_trait]
impl ChatModel for FailingChatModel {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, ChatModelError> {
        Err(ChatModelError::ApiRequestFailed("boom".to_string()))
    }
}

fn history() -> Vec<Message> {
    vec![
        Message::new(MessageRole::User, "I had a rough week".to_string()),
        Message::new(MessageRole::Assistant, "Tell me more".to_string()),
    ]
}

#[tokio::test]
async fn given_message_when_replying_then_returns_completion_text() {
    let chat_model = Arc::new(CapturingChatModel::new("That sounds hard."));
    let service = ReplyService::new(Arc::clone(&chat_model));

    let reply = service.reply("Work was stressful", &history()).await.unwrap();

    assert_eq!(reply, "That sounds hard.");
}

#[tokio::test]
async fn given_history_when_replying_then_sends_history_before_new_message() {
    let chat_model = Arc::new(CapturingChatModel::new("ok"));
    let service = ReplyService::new(Arc::clone(&chat_model));

    service.reply("Work was stressful", &history()).await.unwrap();

    let seen = chat_model.seen.lock().unwrap();
    let request = &seen[0];

    assert_eq!(request.messages.len(), 3);
    assert_eq!(request.messages[0].role, ChatRole::User);
    assert_eq!(request.messages[0].content, "I had a rough week");
    assert_eq!(request.messages[1].role, ChatRole::Assistant);
    assert_eq!(request.messages[2].role, ChatRole::User);
    assert_eq!(request.messages[2].content, "Work was stressful");
}

#[tokio::test]
async fn given_reply_call_when_inspecting_request_then_uses_chat_parameters() {
    let chat_model = Arc::new(CapturingChatModel::new("ok"));
    let service = ReplyService::new(Arc::clone(&chat_model));

    service.reply("hello", &[]).await.unwrap();

    let seen = chat_model.seen.lock().unwrap();
    let request = &seen[0];

    assert_eq!(request.temperature, 0.7);
    assert_eq!(request.max_tokens, 800);
    assert!(!request.json_object);
}

#[tokio::test]
async fn given_upstream_failure_when_replying_then_propagates_error() {
    let service = ReplyService::new(Arc::new(FailingChatModel));

    let result = service.reply("hello", &[]).await;

    assert!(matches!(result, Err(ReplyError::Completion(_))));
}
