//! Outbound side of the relay: the Gemini `generateContent` client and the
//! tagged error it hands back to the handler.

pub mod client;
pub mod error;

pub use client::GeminiClient;
pub use error::UpstreamError;
