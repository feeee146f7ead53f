use anyhow::{bail, Context, Result};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub enable_llm_validation: bool,
    /// Share of the blended fit score taken from the LLM estimate, 0.0 – 1.0.
    pub llm_blend_weight: f64,
    pub max_resume_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let enable_llm_validation = match get("ENABLE_LLM_VALIDATION") {
            Some(v) => v
                .parse::<bool>()
                .context("ENABLE_LLM_VALIDATION must be 'true' or 'false'")?,
            None => false,
        };
        let anthropic_api_key = get("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty());
        if enable_llm_validation && anthropic_api_key.is_none() {
            bail!("ANTHROPIC_API_KEY is required when ENABLE_LLM_VALIDATION=true");
        }

        let llm_blend_weight = get("LLM_BLEND_WEIGHT")
            .unwrap_or_else(|| "0.3".to_string())
            .parse::<f64>()
            .context("LLM_BLEND_WEIGHT must be a number")?;
        if !(0.0..=1.0).contains(&llm_blend_weight) {
            bail!("LLM_BLEND_WEIGHT must be between 0 and 1, got {llm_blend_weight}");
        }

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            anthropic_api_key,
            enable_llm_validation,
            llm_blend_weight,
            max_resume_bytes: get("MAX_RESUME_BYTES")
                .unwrap_or_else(|| "200000".to_string())
                .parse::<usize>()
                .context("MAX_RESUME_BYTES must be a positive integer")?,
        })
    }
}
