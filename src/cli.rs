//! Command-line argument parsing

use clap::{Args, Parser, Subcommand};

use crate::ai::{Action, EmailRequest, Tone};
use crate::constants::DEFAULT_LANGUAGE;
use crate::error::Result;

/// Write, reply to, summarize and enhance emails with a local language model
#[derive(Debug, Parser)]
#[command(name = "mailwright", version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Inference provider base URL (overrides $OLLAMA_SERVICE_IP and the config file)
    #[arg(long, global = true)]
    pub ollama_url: Option<String>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on (defaults to the config file, then 0.0.0.0:5000)
        #[arg(long)]
        bind: Option<String>,
    },
    /// List supported languages
    Languages,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Action to perform
    #[arg(long, value_enum, required = true)]
    pub action: Option<Action>,

    /// Text content or instructions
    #[arg(long, required = true)]
    pub text: Option<String>,

    /// Email tone: professional, friendly, casual or custom
    #[arg(long, default_value = "professional")]
    pub tone: String,

    /// Language code
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Previous email content, required for reply, summarize and enhance
    #[arg(long)]
    pub previous_email: Option<String>,

    /// Print the prompt instead of sending it to the model
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// `Ok(None)` when clap let a subcommand through without generation flags.
    /// The tone is parsed here rather than by clap so a bad value is reported
    /// like any other request error.
    pub fn to_request(&self) -> Result<Option<EmailRequest>> {
        let (Some(action), Some(text)) = (self.action, self.text.clone()) else {
            return Ok(None);
        };
        let tone: Tone = self.tone.parse()?;

        let request = EmailRequest::new(action, text)
            .tone(tone)
            .language(self.language.clone())
            .previous_email(self.previous_email.clone());
        Ok(Some(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "mailwright",
            "--action",
            "reply",
            "--text",
            "Thanks, see you then",
            "--tone",
            "friendly",
            "--previous-email",
            "Dinner at 7?",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        let request = cli.generate.to_request().unwrap().unwrap();
        assert_eq!(request.action, Action::Reply);
        assert_eq!(request.text, "Thanks, see you then");
        assert_eq!(request.tone, Tone::Friendly);
        assert_eq!(request.language, "en");
        assert_eq!(request.previous_email.as_deref(), Some("Dinner at 7?"));
    }

    #[test]
    fn test_action_and_text_are_required() {
        assert!(Cli::try_parse_from(["mailwright", "--text", "hi"]).is_err());
        assert!(Cli::try_parse_from(["mailwright", "--action", "write"]).is_err());
        assert!(
            Cli::try_parse_from(["mailwright", "--action", "forward", "--text", "hi"]).is_err()
        );
    }

    #[test]
    fn test_unknown_tone_is_a_request_error() {
        let cli = Cli::try_parse_from([
            "mailwright",
            "--action",
            "write",
            "--text",
            "hi",
            "--tone",
            "grumpy",
        ])
        .unwrap();

        let err = cli.generate.to_request().unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert_eq!(err.to_string(), "unknown tone: grumpy");
    }

    #[test]
    fn test_tone_defaults_to_professional() {
        let cli = Cli::try_parse_from(["mailwright", "--action", "write", "--text", "hi"]).unwrap();
        let request = cli.generate.to_request().unwrap().unwrap();
        assert_eq!(request.tone, Tone::Professional);
    }

    #[test]
    fn test_serve_subcommand_needs_no_generate_flags() {
        let cli = Cli::try_parse_from([
            "mailwright",
            "serve",
            "--bind",
            "127.0.0.1:9000",
            "--ollama-url",
            "http://localhost:11434",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Serve { bind }) => assert_eq!(bind.as_deref(), Some("127.0.0.1:9000")),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.ollama_url.as_deref(), Some("http://localhost:11434"));
        assert!(cli.generate.to_request().unwrap().is_none());
    }
}
