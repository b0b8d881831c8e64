//! Generation client module for chat-completion requests

mod client;
mod error;
mod traits;
mod unavailable;

pub use client::OpenAiClient;
pub use error::GenerationError;
pub use traits::GenerationClient;
pub use unavailable::UnavailableClient;

#[cfg(test)]
pub use traits::MockGenerationClient;

use crate::config::AppConfig;

/// Build the client for this configuration.
///
/// Falls back to [`UnavailableClient`] when the network client can't be built,
/// so every request then reports a configuration error instead of failing at
/// startup.
pub fn client_from_config(config: &AppConfig) -> Box<dyn GenerationClient> {
    match OpenAiClient::new(config) {
        Ok(client) => Box::new(client),
        Err(err) => {
            tracing::warn!("Generation disabled: {err}");
            Box::new(UnavailableClient::from_error(err))
        }
    }
}
