//! Trait abstraction for the generation client to enable mocking in tests

use super::GenerationError;
use async_trait::async_trait;

/// A capability that turns a prompt into a completion.
///
/// One call is one outbound request. Implementations never retry and never
/// cache; the returned text is the completion exactly as received.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Request a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Short human-readable description for the status bar
    fn describe(&self) -> String;
}
