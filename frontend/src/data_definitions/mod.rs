//! UI state types.

pub mod chat_message;
