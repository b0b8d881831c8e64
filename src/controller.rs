//! Trigger handling: demo lookup or live generation
//!
//! Everything here is independent of the terminal so each trigger can be
//! exercised against a stub client.

use crate::catalog::{self, FormType, ToneOption, DEMO_DISCLAIMER};
use crate::generation::{GenerationClient, GenerationError};
use crate::prompt::build_prompt;
use std::time::Duration;

/// The control values at the moment of a trigger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSelection {
    pub form_type: FormType,
    pub tone: ToneOption,
    /// Free-text request, only meaningful for [`FormType::Custom`]
    pub description: String,
    pub demo_mode: bool,
}

/// What a trigger produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Canned sample from the catalog
    Demo {
        form_type: FormType,
        html: &'static str,
        download_link: Option<&'static str>,
    },
    /// Completion text from the client, untouched
    Generated { form_type: FormType, html: String },
    /// Generation failed; the message is shown inline
    Failed { message: String },
}

impl RenderOutcome {
    /// The page content for this outcome
    pub fn render(&self) -> String {
        match self {
            Self::Demo { html, .. } => format!("{html}\n\n{DEMO_DISCLAIMER}"),
            Self::Generated { html, .. } => html.clone(),
            Self::Failed { message } => format!("Error: {message}"),
        }
    }

    /// HTML that can be exported or copied, if any
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Demo { html, .. } => Some(html),
            Self::Generated { html, .. } => Some(html),
            Self::Failed { .. } => None,
        }
    }

    pub fn form_type(&self) -> Option<FormType> {
        match self {
            Self::Demo { form_type, .. } | Self::Generated { form_type, .. } => Some(*form_type),
            Self::Failed { .. } => None,
        }
    }

    pub fn download_link(&self) -> Option<&'static str> {
        match self {
            Self::Demo { download_link, .. } => *download_link,
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Per-trigger lifecycle of the output pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ControllerPhase {
    /// Awaiting a trigger
    #[default]
    Idle,
    /// Triggered; the selection is waiting for the client
    Generating(UserSelection),
    /// Result of the last trigger, shown until the next one
    Rendered(RenderOutcome),
}

impl ControllerPhase {
    pub fn outcome(&self) -> Option<&RenderOutcome> {
        match self {
            Self::Rendered(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating(_))
    }
}

/// Handle one trigger.
///
/// Demo mode looks up the catalog sample and never touches `client`. Live mode
/// builds the prompt and makes exactly one generation call, bounded by
/// `timeout` when given. Failures come back as [`RenderOutcome::Failed`].
pub async fn handle_trigger(
    selection: &UserSelection,
    client: &dyn GenerationClient,
    timeout: Option<Duration>,
) -> RenderOutcome {
    if selection.demo_mode {
        let entry = catalog::sample_for(selection.form_type);
        tracing::info!("Serving demo sample for {}", selection.form_type);
        return RenderOutcome::Demo {
            form_type: selection.form_type,
            html: entry.html,
            download_link: entry.download_link,
        };
    }

    let prompt = build_prompt(
        selection.form_type,
        &selection.description,
        selection.tone,
    );

    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, client.generate(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::RequestFailed(format!(
                "no response within {limit:?}"
            ))),
        },
        None => client.generate(&prompt).await,
    };

    match result {
        Ok(html) => {
            tracing::info!(
                "Generated {} ({} bytes)",
                selection.form_type,
                html.len()
            );
            RenderOutcome::Generated {
                form_type: selection.form_type,
                html,
            }
        }
        Err(err) if err.is_configuration() => {
            tracing::error!("Generation unavailable for {}: {err}", selection.form_type);
            RenderOutcome::Failed {
                message: err.to_string(),
            }
        }
        Err(err) => {
            tracing::warn!("Generation failed for {}: {err}", selection.form_type);
            RenderOutcome::Failed {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PLACEHOLDER_SAMPLE;
    use crate::generation::MockGenerationClient;

    fn selection(form_type: FormType, tone: ToneOption, description: &str, demo: bool) -> UserSelection {
        UserSelection {
            form_type,
            tone,
            description: description.to_string(),
            demo_mode: demo,
        }
    }

    mod demo_mode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_demo_never_calls_client() {
            for form_type in FormType::ALL {
                let mut client = MockGenerationClient::new();
                client.expect_generate().times(0);

                let sel = selection(form_type, ToneOption::PlainEnglish, "", true);
                let outcome = handle_trigger(&sel, &client, None).await;
                assert!(matches!(outcome, RenderOutcome::Demo { .. }));
            }
        }

        #[tokio::test]
        async fn test_cardiology_demo_renders_sample_and_disclaimer() {
            let mut client = MockGenerationClient::new();
            client.expect_generate().times(0);

            let sel = selection(
                FormType::CardiologyIntake,
                ToneOption::FormalMedical,
                "",
                true,
            );
            let outcome = handle_trigger(&sel, &client, None).await;

            let sample = FormType::CardiologyIntake.sample_html().unwrap();
            assert_eq!(outcome.render(), format!("{sample}\n\n{DEMO_DISCLAIMER}"));
            assert_eq!(
                outcome.download_link(),
                FormType::CardiologyIntake.download_link()
            );
            assert_eq!(outcome.html(), Some(sample));
        }

        #[tokio::test]
        async fn test_custom_demo_uses_placeholder() {
            let mut client = MockGenerationClient::new();
            client.expect_generate().times(0);

            let sel = selection(FormType::Custom, ToneOption::PlainEnglish, "anything", true);
            let outcome = handle_trigger(&sel, &client, None).await;

            assert!(outcome.render().starts_with(PLACEHOLDER_SAMPLE));
            assert_eq!(outcome.download_link(), None);
            assert!(!outcome.is_error());
        }
    }

    mod live_mode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_custom_request_renders_stub_text_exactly() {
            let mut client = MockGenerationClient::new();
            client
                .expect_generate()
                .withf(|prompt: &str| prompt.contains("referral for eczema") && prompt.contains("plain english"))
                .times(1)
                .returning(|_| Ok("<h2>OK</h2>".to_string()));

            let sel = selection(
                FormType::Custom,
                ToneOption::PlainEnglish,
                "referral for eczema",
                false,
            );
            let outcome = handle_trigger(&sel, &client, None).await;

            assert_eq!(outcome.render(), "<h2>OK</h2>");
            assert_eq!(outcome.form_type(), Some(FormType::Custom));
        }

        #[tokio::test]
        async fn test_generated_text_is_not_modified() {
            let raw = "  <script>alert(1)</script>\n<p>&nbsp;unescaped</p>  \n";
            let mut client = MockGenerationClient::new();
            client
                .expect_generate()
                .times(1)
                .returning(move |_| Ok(raw.to_string()));

            let sel = selection(
                FormType::EndocrinologyIntake,
                ToneOption::FormalMedical,
                "",
                false,
            );
            let outcome = handle_trigger(&sel, &client, Some(Duration::from_secs(5))).await;
            assert_eq!(outcome.render(), raw);
            assert_eq!(outcome.html(), Some(raw));
        }

        #[tokio::test]
        async fn test_prompt_comes_from_builder() {
            let expected = build_prompt(
                FormType::NuclearTestConsent,
                "",
                ToneOption::FormalMedical,
            );
            let mut client = MockGenerationClient::new();
            client
                .expect_generate()
                .withf(move |prompt: &str| prompt == expected)
                .times(1)
                .returning(|_| Ok("<p>consent</p>".to_string()));

            let sel = selection(
                FormType::NuclearTestConsent,
                ToneOption::FormalMedical,
                "",
                false,
            );
            handle_trigger(&sel, &client, None).await;
        }

        #[tokio::test]
        async fn test_transport_failure_is_shown_inline() {
            let mut client = MockGenerationClient::new();
            client.expect_generate().times(1).returning(|_| {
                Err(GenerationError::RequestFailed(
                    "operation timed out".to_string(),
                ))
            });

            let sel = selection(
                FormType::NuclearTestConsent,
                ToneOption::PlainEnglish,
                "",
                false,
            );
            let outcome = handle_trigger(&sel, &client, None).await;

            assert!(outcome.is_error());
            let rendered = outcome.render();
            assert!(rendered.starts_with("Error"), "{rendered}");
            assert!(rendered.contains("operation timed out"), "{rendered}");
            assert_eq!(outcome.html(), None);
        }

        #[tokio::test]
        async fn test_configuration_error_is_shown_inline() {
            let mut client = MockGenerationClient::new();
            client.expect_generate().times(1).returning(|_| {
                Err(GenerationError::ClientUnavailable(
                    "OPENAI_API_KEY is not set".to_string(),
                ))
            });

            let sel = selection(FormType::CardiologyIntake, ToneOption::PlainEnglish, "", false);
            let outcome = handle_trigger(&sel, &client, None).await;
            assert!(outcome.render().contains("OPENAI_API_KEY is not set"));
        }

        #[tokio::test(start_paused = true)]
        async fn test_slow_client_is_cut_off_by_timeout() {
            struct SlowClient;

            #[async_trait::async_trait]
            impl GenerationClient for SlowClient {
                async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
                    tokio::time::sleep(Duration::from_secs(600)).await;
                    Ok("late".to_string())
                }

                fn describe(&self) -> String {
                    "slow".to_string()
                }
            }

            let sel = selection(FormType::CardiologyIntake, ToneOption::PlainEnglish, "", false);
            let outcome = handle_trigger(&sel, &SlowClient, Some(Duration::from_secs(30))).await;
            assert_eq!(
                outcome,
                RenderOutcome::Failed {
                    message: "Generation request failed: no response within 30s".to_string()
                }
            );
        }
    }

    mod timeouts {
        use super::*;
        use pretty_assertions::assert_eq;

        struct SilentClient;

        #[async_trait::async_trait]
        impl GenerationClient for SilentClient {
            async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
                std::future::pending().await
            }

            fn describe(&self) -> String {
                "silent".to_string()
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_sub_second_limit_is_reported_exactly() {
            let sel = selection(FormType::NuclearTestConsent, ToneOption::PlainEnglish, "", false);
            let outcome = handle_trigger(&sel, &SilentClient, Some(Duration::from_millis(500))).await;
            assert_eq!(
                outcome.render(),
                "Error: Generation request failed: no response within 500ms"
            );
        }
    }

    mod phase {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(ControllerPhase::default(), ControllerPhase::Idle);
            assert!(ControllerPhase::Idle.outcome().is_none());
        }

        #[test]
        fn test_generating_has_no_outcome() {
            let phase = ControllerPhase::Generating(UserSelection::default());
            assert!(phase.is_generating());
            assert!(phase.outcome().is_none());
        }
    }
}
