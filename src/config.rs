use std::env;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_QUIZ_SOURCE_URL: &str = "https://samplelocalhost.com";
const DEFAULT_IP_API_URL: &str = "https://api.ipify.org?format=json";

/// Runtime settings, read once at startup. Only the bot token is
/// mandatory (consumed by `Bot::from_env`); everything else falls back
/// to the development defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the portfolio backend serving the visit/quiz endpoints.
    pub backend_url: String,
    /// Page whose text content seeds the generated questions.
    pub quiz_source_url: String,
    /// Public IP lookup service returning `{"ip": ...}`.
    pub ip_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            backend_url: env_or("PORTFOLIO_BACKEND_URL", DEFAULT_BACKEND_URL),
            quiz_source_url: env_or("PORTFOLIO_QUIZ_SOURCE_URL", DEFAULT_QUIZ_SOURCE_URL),
            ip_api_url: env_or("PORTFOLIO_IP_API_URL", DEFAULT_IP_API_URL),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
