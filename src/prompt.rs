//! Prompt construction for the generation API

use crate::catalog::{FormType, ToneOption};

/// Build the user instruction for a form request.
///
/// Pure: the same inputs always give the same string. The description is only
/// used for [`FormType::Custom`] and is embedded verbatim, empty or not.
/// Unrecognised form names never reach here; they are rejected when parsed
/// into a [`FormType`].
pub fn build_prompt(form_type: FormType, custom_description: &str, tone: ToneOption) -> String {
    let tone = tone.prompt_word();
    match form_type {
        FormType::Custom => format!(
            "You are a medical administrator. Create a {tone} medical form based on the following request: {custom_description}"
        ),
        FormType::CardiologyIntake => format!(
            "You are a medical administrator creating an intake form for a general cardiology clinic. \
             Use a {tone} tone. Include demographics, reason for visit, past medical history (cardiac), \
             medications, allergies, family history, lifestyle questions, and previous cardiac test results. \
             Format as HTML."
        ),
        FormType::NuclearTestConsent => format!(
            "You are preparing a consent form for a nuclear stress test. Use a {tone} tone. \
             Include purpose, explanation, risks, alternatives, acknowledgment, and signature areas. \
             Format as HTML."
        ),
        FormType::EndocrinologyIntake => format!(
            "Create a new patient intake form for an endocrinology clinic. Use a {tone} tone. \
             Include demographics, reason for visit, past medical history (endocrine), medications, \
             allergies, symptoms checklist, lifestyle/diet, and prior test results. Format as HTML."
        ),
    }
}
