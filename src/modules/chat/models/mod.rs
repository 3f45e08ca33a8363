mod chat_message;

pub use chat_message::{ChatRequest, ChatResponse};
