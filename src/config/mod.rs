pub mod prompt;

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Args;
use crate::llm::gemini::GEMINI_API_URL;

/// Immutable service configuration, built once at startup and passed into
/// the server. The upstream endpoint is fixed in production; it is a field
/// here so tests can point the relay at a local stub.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub api_url: String,
    pub api_key: String,
    pub system_prompt: String,
    pub static_dir: PathBuf,
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            server_addr: args.server_addr.clone(),
            api_url: GEMINI_API_URL.to_string(),
            api_key: args.gemini_api_key.clone(),
            system_prompt: prompt::SYSTEM_PROMPT.to_string(),
            static_dir: PathBuf::from(&args.static_dir),
            upstream_timeout: Duration::from_secs(args.upstream_timeout_secs),
        }
    }
}
