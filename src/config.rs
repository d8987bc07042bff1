use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_NUM_CTX, DEFAULT_NUM_GPU,
    DEFAULT_NUM_PREDICT, DEFAULT_NUM_THREAD, DEFAULT_REPEAT_PENALTY, DEFAULT_STOP_SEQUENCES,
    DEFAULT_TEMPERATURE, DEFAULT_TOP_K, DEFAULT_TOP_P, ENV_INFERENCE_URL,
};
use crate::error::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Inference provider settings (Ollama-compatible endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the provider, e.g. `http://localhost:11434`.
    /// Overridden by `OLLAMA_SERVICE_IP` and by `--ollama-url`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub options: GenerationOptions,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            model: default_model(),
            options: GenerationOptions::default(),
        }
    }
}

/// Sampling parameters sent with every generation request.
/// Fixed per deployment; requests cannot change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub repeat_penalty: f32,
    pub stop: Vec<String>,
    pub num_predict: u32,
    pub num_ctx: u32,
    pub num_thread: u32,
    pub num_gpu: u32,
    /// None lets the provider pick a random seed
    pub seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            repeat_penalty: DEFAULT_REPEAT_PENALTY,
            stop: DEFAULT_STOP_SEQUENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            num_predict: DEFAULT_NUM_PREDICT,
            num_ctx: DEFAULT_NUM_CTX,
            num_thread: DEFAULT_NUM_THREAD,
            num_gpu: DEFAULT_NUM_GPU,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mailwright");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .context("Could not find data directory")?
            .join("mailwright");
        Ok(dir)
    }

    /// Load the config file if there is one. A missing file is not an error;
    /// the only required setting can come from the environment instead.
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve the inference base URL: CLI flag, then `OLLAMA_SERVICE_IP`,
    /// then the config file. Having none is fatal.
    pub fn inference_url(&self, cli_override: Option<&str>) -> Result<String, Error> {
        let from_env = env::var(ENV_INFERENCE_URL).ok();
        pick_base_url(
            cli_override,
            from_env.as_deref(),
            self.inference.base_url.as_deref(),
        )
    }
}

fn pick_base_url(
    cli: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> Result<String, Error> {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(|url| url.trim().trim_end_matches('/'))
        .find(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::Configuration(format!(
                "{} environment variable is not set",
                ENV_INFERENCE_URL
            ))
        })
}
