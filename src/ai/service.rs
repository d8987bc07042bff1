//! Sequences prompt building and inference for a single request

use std::time::Instant;

use super::client::TextGenerator;
use super::language;
use super::prompts::{self, Action};
use super::tone::Tone;
use crate::constants::DEFAULT_LANGUAGE;
use crate::error::Result;

/// One email task. Owned by the caller for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub action: Action,
    pub text: String,
    pub tone: Tone,
    pub language: String,
    pub previous_email: Option<String>,
}

impl EmailRequest {
    pub fn new(action: Action, text: impl Into<String>) -> Self {
        Self {
            action,
            text: text.into(),
            tone: Tone::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            previous_email: None,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn previous_email(mut self, previous_email: Option<String>) -> Self {
        self.previous_email = previous_email;
        self
    }

    /// Render the prompt for this request without contacting the provider
    pub fn build_prompt(&self) -> Result<String> {
        let profile = language::lookup(&self.language);
        if !language::is_supported(&self.language) {
            tracing::debug!(
                "Unknown language '{}', falling back to {}",
                self.language,
                profile.name
            );
        }

        prompts::build(
            self.action,
            &self.text,
            self.tone,
            profile,
            self.previous_email.as_deref(),
        )
    }
}

/// Stateless apart from the generator; safe to share across handlers.
pub struct EmailService<G> {
    generator: G,
}

impl<G: TextGenerator> EmailService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, request: &EmailRequest) -> Result<String> {
        let prompt = request.build_prompt()?;

        let start = Instant::now();
        let result = self.generator.generate(&prompt).await?;
        let elapsed = start.elapsed();

        tracing::info!(
            action = %request.action,
            language = %request.language,
            "Generated email in {:.2}s",
            elapsed.as_secs_f64()
        );

        Ok(result)
    }
}
