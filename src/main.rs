mod ai;
mod cli;
mod config;
mod constants;
mod error;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ai::{EmailService, OllamaClient, language};
use crate::cli::{Cli, Commands};
use crate::config::Config;

/// Where log output goes. One-shot CLI runs keep stdout/stderr for the
/// result and the error payload, so they log to a file.
enum LogTarget {
    File,
    Stderr,
}

fn setup_logging(target: LogTarget) {
    use std::fs::OpenOptions;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mailwright=debug"));

    let log_file = match target {
        LogTarget::File => Config::data_dir()
            .ok()
            .and_then(|dir| std::fs::create_dir_all(&dir).ok().map(|_| dir))
            .map(|dir| dir.join("mailwright.log"))
            .and_then(|path| {
                OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&path)
                    .ok()
            }),
        LogTarget::Stderr => None,
    };

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_service(config: &Config, url_override: Option<&str>) -> Result<EmailService<OllamaClient>> {
    let base_url = config.inference_url(url_override)?;
    let client = OllamaClient::new(
        &base_url,
        config.inference.model.clone(),
        config.inference.options.clone(),
    );
    tracing::info!(
        "Using inference provider at {} (model {})",
        client.endpoint(),
        config.inference.model
    );

    Ok(EmailService::new(client))
}

async fn run_generate(cli: &Cli) -> Result<()> {
    let request = cli
        .generate
        .to_request()?
        .context("--action and --text are required")?;

    if cli.generate.dry_run {
        println!("{}", request.build_prompt()?);
        return Ok(());
    }

    let config = Config::load()?;
    let service = build_service(&config, cli.ollama_url.as_deref())?;
    let result = service.handle(&request).await?;

    println!("{}", result.trim());
    Ok(())
}

async fn run_server(cli: &Cli, bind: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let service = build_service(&config, cli.ollama_url.as_deref())?;
    let bind = bind.unwrap_or(config.server.bind.as_str());

    server::run(service, bind).await
}

/// What a failed one-shot run prints to stderr
fn error_payload(e: &anyhow::Error) -> serde_json::Value {
    serde_json::json!({
        "status": "error",
        "error": format!("{:#}", e),
    })
}

fn print_languages() {
    for profile in language::all() {
        println!("{:<4}{}", profile.code, profile.name);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Serve { bind }) => {
            setup_logging(LogTarget::Stderr);
            run_server(&cli, bind.as_deref()).await
        }
        Some(Commands::Languages) => {
            print_languages();
            Ok(())
        }
        None => {
            setup_logging(LogTarget::File);

            if let Err(e) = run_generate(&cli).await {
                tracing::error!("Generation failed: {:#}", e);
                eprintln!("{}", error_payload(&e));
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
