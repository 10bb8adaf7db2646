//! Submission status

use serde::Serialize;

use crate::i18n::ContactFormTexts;

/// Where the contact form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Caption of the submit control
    pub fn submit_label(self, texts: &ContactFormTexts) -> &'static str {
        match self {
            SubmissionStatus::Sending => texts.sending,
            _ => texts.submit,
        }
    }

    /// Banner shown under the form, if any
    pub fn banner(self, texts: &ContactFormTexts) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some(texts.success),
            SubmissionStatus::Error => Some(texts.error),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }
}
