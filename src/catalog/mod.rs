//! Form catalog
//!
//! The fixed set of form types, their canned demo samples and the
//! downloadable reference documents that go with them.

mod form_type;
mod samples;

pub use form_type::{FormType, ToneOption};

/// Shown when a form type has no registered sample
pub const PLACEHOLDER_SAMPLE: &str =
    "<p><em>No sample is available for this form type. Turn off demo mode to generate one.</em></p>";

/// Appended to every demo-mode render
pub const DEMO_DISCLAIMER: &str = "Demo mode: this is a static sample form. No AI generation was performed, no request was sent, and the content is illustrative only.";

/// Page footer caption
pub const FOOTER_CAPTION: &str = "No PHI is used or stored. This is a prototype for demo purposes.";

/// A catalog lookup result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleEntry {
    pub html: &'static str,
    pub download_link: Option<&'static str>,
}

impl FormType {
    /// The canned sample for this form type, if one is registered
    pub fn sample_html(&self) -> Option<&'static str> {
        match self {
            Self::CardiologyIntake => Some(samples::CARDIOLOGY_INTAKE_HTML),
            Self::NuclearTestConsent => Some(samples::NUCLEAR_TEST_CONSENT_HTML),
            Self::EndocrinologyIntake => Some(samples::ENDOCRINOLOGY_INTAKE_HTML),
            Self::Custom => None,
        }
    }

    /// Fixed external reference document for this form type
    pub fn download_link(&self) -> Option<&'static str> {
        match self {
            Self::CardiologyIntake => Some(samples::CARDIOLOGY_INTAKE_LINK),
            Self::NuclearTestConsent => Some(samples::NUCLEAR_TEST_CONSENT_LINK),
            Self::EndocrinologyIntake => Some(samples::ENDOCRINOLOGY_INTAKE_LINK),
            Self::Custom => None,
        }
    }
}

/// Look up the demo sample for a form type, falling back to the placeholder
pub fn sample_for(form_type: FormType) -> SampleEntry {
    SampleEntry {
        html: form_type.sample_html().unwrap_or(PLACEHOLDER_SAMPLE),
        download_link: form_type.download_link(),
    }
}
