//! Messages shown in the assistant chat.

use common::ir_models::AssistantResponse;

pub const ASSISTANT_ERROR_MESSAGE: &str =
    "Şu anda isteği işlerken bir hata oluştu. Lütfen bağlantınızı kontrol edip tekrar dener misiniz?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    /// Set on assistant replies that came back from the API.
    pub answer: Option<AssistantResponse>,
}

impl ChatMessage {
    pub fn user(id: u64, content: String) -> Self {
        Self { id, role: ChatRole::User, content, answer: None }
    }

    pub fn assistant(id: u64, answer: AssistantResponse) -> Self {
        Self { id, role: ChatRole::Assistant, content: answer.answer.clone(), answer: Some(answer) }
    }

    pub fn assistant_error(id: u64) -> Self {
        Self { id, role: ChatRole::Assistant, content: ASSISTANT_ERROR_MESSAGE.to_string(), answer: None }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}
