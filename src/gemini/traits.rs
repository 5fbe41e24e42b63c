// ReviewModel trait — the seam between the review pipeline and whatever LLM answers it.

use anyhow::Result;
use async_trait::async_trait;

/// A text-in, text-out language model.
///
/// Implementations must be async because the real one is an HTTP call.
#[async_trait]
pub trait ReviewModel: Send + Sync {
    /// Send one prompt and return the model's text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "model"
    }
}
