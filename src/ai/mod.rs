//! Email generation features backed by a local language model
//!
//! - Language and tone catalogs that steer the generated text
//! - Prompt templates for writing, replying, summarizing and enhancing
//! - An Ollama-compatible inference client
//! - The service that ties a request to a prompt and a generation call

mod client;
pub mod language;
mod prompts;
mod service;
mod tone;

pub use client::{OllamaClient, TextGenerator};
pub use language::LanguageProfile;
pub use prompts::Action;
pub use service::{EmailRequest, EmailService};
pub use tone::Tone;
