use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Default path for the saved feedback file.
pub const DEFAULT_OUTPUT_PATH: &str = "resume_feedback.txt";

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment only (never a CLI flag, so it
/// stays out of shell history). The .env file is loaded at startup via dotenvy.
pub struct Config {
    pub gemini_api_key: String,
    /// Base URL for model endpoints (defaults to the public v1beta API)
    pub gemini_base_url: String,
    pub gemini_model: String,
    /// Where `review` saves the combined feedback and score
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything but the API key has a default, so `keywords` works
    /// with no configuration at all.
    pub fn load() -> Result<Self> {
        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            output_path: env::var("RESUME_REVIEWER_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        })
    }

    /// Check that the Gemini API key is configured.
    /// Call this before any operation that talks to the model.
    pub fn require_gemini(&self) -> Result<()> {
        if self.gemini_api_key.trim().is_empty() {
            anyhow::bail!(
                "GEMINI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
