//! Form type and tone identifiers

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Medical form templates the builder can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormType {
    #[default]
    CardiologyIntake,
    NuclearTestConsent,
    EndocrinologyIntake,
    Custom,
}

impl FormType {
    /// All form types in selector order
    pub const ALL: [FormType; 4] = [
        FormType::CardiologyIntake,
        FormType::NuclearTestConsent,
        FormType::EndocrinologyIntake,
        FormType::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CardiologyIntake => "Cardiology Intake Form",
            Self::NuclearTestConsent => "Nuclear Test Consent Form",
            Self::EndocrinologyIntake => "Endocrinology Intake Form",
            Self::Custom => "Custom",
        }
    }

    /// Stable kebab-case identifier, used in config files and export names
    pub fn id(&self) -> &'static str {
        match self {
            Self::CardiologyIntake => "cardiology-intake",
            Self::NuclearTestConsent => "nuclear-test-consent",
            Self::EndocrinologyIntake => "endocrinology-intake",
            Self::Custom => "custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Next entry in selector order (wraps around)
    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous entry in selector order (wraps around)
    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when an identifier names no catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownIdentifier {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for FormType {
    type Err = UnknownIdentifier;

    /// Accepts either the display label or the kebab-case id.
    ///
    /// Anything else is an [`UnknownIdentifier`]; callers fall back to the
    /// default form type rather than building an empty prompt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id() == trimmed || t.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownIdentifier {
                kind: "form type",
                value: s.to_string(),
            })
    }
}

/// Cosmetic style modifier inserted into generation instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToneOption {
    #[default]
    PlainEnglish,
    FormalMedical,
}

impl ToneOption {
    pub const ALL: [ToneOption; 2] = [ToneOption::PlainEnglish, ToneOption::FormalMedical];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PlainEnglish => "Plain English",
            Self::FormalMedical => "Formal Medical",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::PlainEnglish => "plain-english",
            Self::FormalMedical => "formal-medical",
        }
    }

    /// The label case-folded, as substituted into prompts
    pub fn prompt_word(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::PlainEnglish => Self::FormalMedical,
            Self::FormalMedical => Self::PlainEnglish,
        };
    }
}

impl fmt::Display for ToneOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToneOption {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id() == trimmed || t.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownIdentifier {
                kind: "tone",
                value: s.to_string(),
            })
    }
}
