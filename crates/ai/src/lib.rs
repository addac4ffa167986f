//! AI gateway: turns task data into prompts, calls a Gemini-style
//! generateContent endpoint and normalizes the response into plain text.

pub mod client;
pub mod error;
pub mod extract;
pub mod prompt;

pub use client::{AiConfig, AiReply, GeminiClient};
pub use error::AiError;
pub use prompt::TaskCard;
