// Chat relay module

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{ChatRequest, ChatResponse};
pub use services::{ChatProvider, ChatService, MockChatProvider, OpenAiProvider};
