//! Application-wide constants for tuning and configuration
//!
//! Centralizes defaults so the config layer and the tests agree on them.

/// Environment variable holding the inference provider base URL.
pub const ENV_INFERENCE_URL: &str = "OLLAMA_SERVICE_IP";

/// Path appended to the base URL for text generation.
pub const GENERATE_PATH: &str = "/api/generate";

/// Model requested from the inference provider unless configured otherwise.
pub const DEFAULT_MODEL: &str = "tinyllama";

/// Address the HTTP server listens on by default.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Language code used when a request omits one, and the fallback for
/// codes missing from the catalog.
pub const DEFAULT_LANGUAGE: &str = "en";

// === Generation parameters ===

pub const DEFAULT_MAX_TOKENS: u32 = 250;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_REPEAT_PENALTY: f32 = 1.2;

/// Tokens generated before the model is cut off.
pub const DEFAULT_NUM_PREDICT: u32 = 150;

/// Context window size in tokens.
pub const DEFAULT_NUM_CTX: u32 = 512;

pub const DEFAULT_NUM_THREAD: u32 = 8;
pub const DEFAULT_NUM_GPU: u32 = 1;

/// Stop sequences. Most of these catch the model starting a
/// `[Your Name]`-style placeholder.
pub const DEFAULT_STOP_SEQUENCES: &[&str] = &[
    "</email>",
    "---",
    "[Your",
    "[Company",
    "[Email",
    "[Today's",
];

// === Prompt constraints ===

/// Word ceiling given to the model for summaries.
pub const SUMMARY_WORD_LIMIT: usize = 50;
