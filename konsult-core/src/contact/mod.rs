//! Contact form
//!
//! ```text
//!  CaptchaWidget ── verified / cleared ──▶ ContactFlow ── PendingSubmission ──▶ ContactSubmitter
//!  (TestCaptcha) ◀──────── reset ───────── form, status ◀─ SubmissionOutcome ── (Simulated / Http)
//! ```

mod captcha;
mod flow;
mod form;
mod status;
mod submitter;

pub use captcha::{
    CaptchaEvent, CaptchaEvents, CaptchaWidget, TestCaptcha, DEFAULT_TOKEN_TTL, TEST_SITE_KEY,
};
pub use flow::{
    ContactFlow, EmailReveal, PendingSubmission, SubmissionOutcome, SubmissionTicket,
    SubmitAttempt,
};
pub use form::{ContactForm, ContactPayload, FieldIssue, FormField};
pub use status::SubmissionStatus;
pub use submitter::{build_submitter, ContactSubmitter, HttpSubmitter, SimulatedSubmitter};
