pub mod chat_service;
pub mod mock;
pub mod openai;
pub mod provider;

pub use chat_service::ChatService;
pub use mock::MockChatProvider;
pub use openai::OpenAiProvider;
pub use provider::ChatProvider;
