pub mod openai;
pub mod types;

pub use openai::OpenAiClient;
pub use types::{ChatMessage, ChatModel, ChatRequest, MockChatModel, Role};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("could not connect to the generation service at {0}")]
    Connection(String),

    #[error("generation request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("generation service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not parse generation response: {0}")]
    ResponseParsing(String),

    #[error("generation response contained no choices")]
    EmptyResponse,
}
