//! Environment-driven configuration for the completion endpoint

use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 10;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Fixed parameters sent with every completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    /// Cap on generated tokens. Kept small by default to bound cost.
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Configuration for the LLM provider
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// Credential seeded into new sessions; users may replace it per session
    pub openai_api_key: Option<String>,
    /// OpenAI-compatible gateway base URL (e.g., `https://gateway.example/v1`)
    pub base_url: Option<String>,
    pub params: CompletionParams,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = CompletionParams::default();
        let params = CompletionParams {
            model: lookup("TUTOR_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.model),
            max_tokens: parse_or(
                "TUTOR_MAX_TOKENS",
                lookup("TUTOR_MAX_TOKENS"),
                defaults.max_tokens,
                |n| *n > 0,
            ),
            temperature: parse_or(
                "TUTOR_TEMPERATURE",
                lookup("TUTOR_TEMPERATURE"),
                defaults.temperature,
                |t| t.is_finite() && *t > 0.0,
            ),
        };

        Self {
            openai_api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            base_url: lookup("OPENAI_BASE_URL").filter(|u| !u.trim().is_empty()),
            params,
        }
    }
}

/// Parse `raw`, falling back to `default` when it is unset, unparseable, or
/// rejected by `valid`
fn parse_or<T: FromStr + Copy>(
    name: &str,
    raw: Option<String>,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T {
    let Some(value) = raw else {
        return default;
    };
    match value.trim().parse::<T>() {
        Ok(parsed) if valid(&parsed) => parsed,
        _ => {
            tracing::warn!(var = name, value = %value, "Ignoring invalid setting");
            default
        }
    }
}
