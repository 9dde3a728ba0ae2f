use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};

/// Sampling parameters for one model session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub temperature: f64,
    pub top_k: u32,
}

impl SessionConfig {
    /// Initial fill pass: more deterministic.
    pub const FILL: SessionConfig = SessionConfig {
        temperature: 0.5,
        top_k: 10,
    };

    /// Correction pass: slightly more creative, so the model explores
    /// alternate formattings instead of repeating the rejected value.
    pub const FIX: SessionConfig = SessionConfig {
        temperature: 0.8,
        top_k: 50,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fill: SessionConfig,
    pub fix: SessionConfig,
    /// Selection controls with at most this many options embed them all
    /// in the fill prompt.
    pub inline_option_limit: usize,
    /// Sample size for larger option lists.
    pub option_sample_size: usize,
    /// Cap on option values listed per field in the fix prompt.
    pub fix_option_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fill: SessionConfig::FILL,
            fix: SessionConfig::FIX,
            inline_option_limit: 5,
            option_sample_size: 3,
            fix_option_limit: 8,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<()> {
        validate_range("fill.temperature", self.fill.temperature, 0.0, 2.0)?;
        validate_range("fix.temperature", self.fix.temperature, 0.0, 2.0)?;
        validate_positive_number("fill.top_k", self.fill.top_k as usize, 1)?;
        validate_positive_number("fix.top_k", self.fix.top_k as usize, 1)?;
        validate_positive_number("inline_option_limit", self.inline_option_limit, 1)?;
        validate_positive_number("option_sample_size", self.option_sample_size, 1)?;
        validate_positive_number("fix_option_limit", self.fix_option_limit, 1)?;
        Ok(())
    }
}
