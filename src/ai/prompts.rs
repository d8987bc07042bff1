//! Prompt templates for the four email actions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::language::LanguageProfile;
use super::tone::Tone;
use crate::constants::SUMMARY_WORD_LIMIT;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Compose a new email from instructions
    Write,
    /// Answer a previous email
    Reply,
    /// Condense a previous email into bullet points
    Summarize,
    /// Polish a previous email
    Enhance,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Write => "write",
            Action::Reply => "reply",
            Action::Summarize => "summarize",
            Action::Enhance => "enhance",
        }
    }

    pub fn requires_previous_email(self) -> bool {
        !matches!(self, Action::Write)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "write" => Ok(Action::Write),
            "reply" => Ok(Action::Reply),
            "summarize" => Ok(Action::Summarize),
            "enhance" => Ok(Action::Enhance),
            other => Err(Error::InvalidRequest(format!("unknown action: {other}"))),
        }
    }
}

/// Render the prompt sent to the model.
///
/// `previous_email` is ignored for [`Action::Write`] and required (non-blank)
/// for every other action.
pub fn build(
    action: Action,
    text: &str,
    tone: Tone,
    language: &LanguageProfile,
    previous_email: Option<&str>,
) -> Result<String> {
    let tone_instructions = tone.instructions();
    if !action.requires_previous_email() && previous_email.is_some() {
        tracing::debug!("Ignoring previous email for {} action", action);
    }
    let previous = || {
        previous_email
            .filter(|body| !body.trim().is_empty())
            .ok_or_else(|| {
                Error::InvalidRequest(format!("previous email is required for {action} action"))
            })
    };

    Ok(match action {
        Action::Write => write_prompt(text, tone_instructions, language),
        Action::Reply => reply_prompt(previous()?, text, tone_instructions, language),
        Action::Summarize => summarize_prompt(previous()?, language),
        Action::Enhance => enhance_prompt(previous()?, text, tone_instructions, language),
    })
}

fn reply_prompt(previous: &str, text: &str, tone: &str, lang: &LanguageProfile) -> String {
    let name = lang.name;
    let greeting = lang.formal_greeting;
    let closing = lang.closing;

    format!(
        r#"Write a response to this email in {name}:

Original Email:
{previous}

Your Response Instructions:
{text}

Requirements:
1. Write a completely new response in {name} ONLY
2. Do NOT use templates or placeholders like [Your Name] or [Date]
3. Do NOT mix languages
4. Do NOT copy or repeat any part of the original email
5. Start with {greeting}
6. Acknowledge the original email's main points
7. Respond specifically to what the original email asks or proposes
8. End with {closing}
9. Keep the tone {tone}
10. Use proper {name} grammar and punctuation
11. Make it personal and specific to the situation

Remember: This should be a new response, not a template or modification of the original."#
    )
}

fn summarize_prompt(previous: &str, lang: &LanguageProfile) -> String {
    let name = lang.name;

    format!(
        r#"Summarize the following email in {name}:

{previous}

Instructions:
- Provide 2–3 concise bullet points
- Focus only on the main points and actions
- Exclude greetings, sign-offs, and extra details
- Keep the total summary under {SUMMARY_WORD_LIMIT} words
- Be clear and direct"#
    )
}

fn enhance_prompt(previous: &str, text: &str, tone: &str, lang: &LanguageProfile) -> String {
    let name = lang.name;
    let greeting = lang.formal_greeting;
    let closing = lang.closing;

    format!(
        r#"Enhance this email in {name}:

Original Email:
{previous}

Enhancement Instructions:
{text}

Requirements:
1. Keep the same main message and intent
2. Improve the language and structure
3. Make it more professional and polished
4. Use proper {name} grammar and punctuation
5. Keep the tone {tone}
6. Start with {greeting}
7. End with {closing}
8. Do NOT change the core message or add new information

Remember: This should be an enhanced version of the original email, maintaining its main points but improving its presentation."#
    )
}

fn write_prompt(text: &str, tone: &str, lang: &LanguageProfile) -> String {
    let name = lang.name;
    let greeting = lang.formal_greeting;
    let closing = lang.closing;

    format!(
        r#"Write a new email in {name}:
Content: {text}
Style: {tone}
Greeting: {greeting}
Closing: {closing}
Requirements:
1. Write a complete email in {name} ONLY
2. Do NOT use templates or placeholders
3. Include proper greeting and closing
4. Keep it professional and clear
5. Use proper grammar and punctuation"#
    )
}
