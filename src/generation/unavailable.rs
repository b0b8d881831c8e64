//! Stand-in client used when no network client can be built

use super::{GenerationClient, GenerationError};
use async_trait::async_trait;

/// Reports [`GenerationError::ClientUnavailable`] for every request
#[derive(Debug, Clone)]
pub struct UnavailableClient {
    reason: String,
}

impl UnavailableClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Carry over the reason of a failed client construction, without its prefix
    pub fn from_error(err: GenerationError) -> Self {
        match err {
            GenerationError::ClientUnavailable(reason) | GenerationError::RequestFailed(reason) => {
                Self::new(reason)
            }
        }
    }
}

#[async_trait]
impl GenerationClient for UnavailableClient {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::ClientUnavailable(self.reason.clone()))
    }

    fn describe(&self) -> String {
        "generation unavailable".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_reports_configuration_error() {
        let client = UnavailableClient::new("TLS backend missing");
        for prompt in ["", "Create a form"] {
            let err = client.generate(prompt).await.unwrap_err();
            assert!(err.is_configuration());
            assert_eq!(
                err,
                GenerationError::ClientUnavailable("TLS backend missing".to_string())
            );
        }
    }

    #[test]
    fn test_usable_as_trait_object() {
        let client: Box<dyn GenerationClient> = Box::new(UnavailableClient::new("no key"));
        let result = tokio_test::block_on(client.generate("Create a form"));
        assert!(matches!(result, Err(GenerationError::ClientUnavailable(_))));
    }

    #[tokio::test]
    async fn test_from_error_does_not_repeat_prefix() {
        let client = UnavailableClient::from_error(GenerationError::ClientUnavailable(
            "HTTP client could not be created: tls".to_string(),
        ));
        let err = client.generate("p").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Generation is unavailable: HTTP client could not be created: tls"
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            UnavailableClient::new("x").describe(),
            "generation unavailable"
        );
    }
}
