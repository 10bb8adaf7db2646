//! Contact form flow
//!
//! State machine over [`SubmissionStatus`]:
//!
//! ```text
//!            honeypot filled ─────────────▶ (no change)
//!   idle ──┬ captcha missing ─────────────▶ error
//!          └ guards pass ──▶ sending ──┬──▶ success   (fields cleared, captcha reset)
//!                                      └──▶ error     (fields kept)
//! ```
//!
//! `success` and `error` re-enter the guards on the next submit. Only one
//! submission is in flight per mounted form: a second submit while `sending`
//! is refused, and an outcome is applied only when its ticket matches the
//! one the form is waiting for. A form that was unmounted (dropped and
//! remounted with a new id) therefore ignores late results.

use std::time::Duration;

use crate::error::{CoreError, CoreResult};

use super::captcha::{CaptchaEvents, CaptchaWidget, TestCaptcha};
use super::form::{ContactForm, ContactPayload, FormField};
use super::status::SubmissionStatus;
use super::submitter::ContactSubmitter;

/// Identifies one dispatched submission of one mounted form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket {
    mount_id: u64,
    seq: u64,
}

impl SubmissionTicket {
    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }
}

/// Result of pressing submit
#[derive(Debug)]
pub enum SubmitAttempt {
    /// Honeypot was filled; nothing happens and nothing is shown
    Suppressed,
    /// CAPTCHA not solved; status moved to `Error`
    CaptchaRequired,
    /// Another submission is still waiting; the control is disabled
    InFlight,
    /// Status moved to `Sending`; run the pending submission and hand its outcome to [`ContactFlow::finish`]
    Dispatched(PendingSubmission),
}

/// A submission that left the form and waits to be sent
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    ticket: SubmissionTicket,
    payload: ContactPayload,
}

impl PendingSubmission {
    pub fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }

    /// Perform the single external call, bounded by `timeout`
    pub async fn run(self, submitter: &dyn ContactSubmitter, timeout: Duration) -> SubmissionOutcome {
        let result = match tokio::time::timeout(timeout, submitter.submit(&self.payload)).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::SubmissionTimedOut(
                u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        };
        SubmissionOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// Resolution of a dispatched submission
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub ticket: SubmissionTicket,
    pub result: CoreResult<()>,
}

/// Contact address as the page may show it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailReveal<'a> {
    /// CAPTCHA solved: show the address
    Revealed(&'a str),
    /// Show the placeholder instead
    Protected,
}

/// Contact form state of one mounted Contact page
#[derive(Debug)]
pub struct ContactFlow<W: CaptchaWidget = TestCaptcha> {
    mount_id: u64,
    form: ContactForm,
    status: SubmissionStatus,
    captcha_verified: bool,
    captcha: W,
    next_seq: u64,
    in_flight: Option<SubmissionTicket>,
}

impl<W: CaptchaWidget> ContactFlow<W> {
    /// Fresh form for the mount identified by `mount_id`
    pub fn new(mount_id: u64, captcha: W) -> Self {
        Self {
            mount_id,
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
            captcha_verified: false,
            captcha,
            next_seq: 0,
            in_flight: None,
        }
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_captcha_verified(&self) -> bool {
        self.captcha_verified
    }

    pub fn captcha(&self) -> &W {
        &self.captcha
    }

    pub fn captcha_mut(&mut self) -> &mut W {
        &mut self.captcha
    }

    /// Replace a field value (user input)
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        self.form.push_char(field, ch);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.form.pop_char(field);
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none() && self.captcha_verified
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Run the guard sequence and, if it passes, move to `Sending`
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.in_flight.is_some() {
            log::debug!("Submit ignored, a submission is already in flight");
            return SubmitAttempt::InFlight;
        }

        if self.form.is_spam() {
            log::debug!("Honeypot filled, dropping submission");
            return SubmitAttempt::Suppressed;
        }

        if !self.captcha_verified {
            log::debug!("Submit attempted without CAPTCHA verification");
            self.status = SubmissionStatus::Error;
            return SubmitAttempt::CaptchaRequired;
        }

        self.next_seq += 1;
        let ticket = SubmissionTicket {
            mount_id: self.mount_id,
            seq: self.next_seq,
        };
        self.in_flight = Some(ticket);
        self.status = SubmissionStatus::Sending;

        SubmitAttempt::Dispatched(PendingSubmission {
            ticket,
            payload: self.form.payload(),
        })
    }

    /// Apply the outcome of a dispatched submission
    ///
    /// Returns `false` (and changes nothing) when the outcome does not belong
    /// to the submission this form is waiting for.
    pub fn finish(&mut self, outcome: SubmissionOutcome) -> bool {
        self.apply(outcome.ticket, &outcome.result)
    }

    fn apply(&mut self, ticket: SubmissionTicket, result: &CoreResult<()>) -> bool {
        if self.in_flight != Some(ticket) {
            log::debug!(
                "Ignoring stale submission outcome for mount {}",
                ticket.mount_id
            );
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                log::info!("Contact message delivered");
                self.status = SubmissionStatus::Success;
                self.form.clear();
                self.captcha.reset();
                self.captcha_verified = false;
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Contact message not delivered: {e}");
                } else {
                    log::error!("Contact message not delivered: {e}");
                }
                self.status = SubmissionStatus::Error;
            }
        }
        true
    }

    /// Give up on a dispatched submission whose outcome will never arrive
    ///
    /// The form moves to `Error` with its fields kept, and a late outcome for
    /// `ticket` is ignored. Returns `false` when `ticket` is not the one in flight.
    pub fn abandon(&mut self, ticket: SubmissionTicket) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        log::warn!("Submission abandoned before its outcome arrived");
        self.in_flight = None;
        self.status = SubmissionStatus::Error;
        true
    }

    /// Submit and wait for the result in one go
    ///
    /// Dropping the returned future before it resolves abandons the submission.
    pub async fn submit(
        &mut self,
        submitter: &dyn ContactSubmitter,
        timeout: Duration,
    ) -> CoreResult<()> {
        let pending = match self.begin_submit() {
            SubmitAttempt::Dispatched(pending) => pending,
            SubmitAttempt::Suppressed => return Err(CoreError::SpamSuppressed),
            SubmitAttempt::CaptchaRequired => return Err(CoreError::CaptchaRequired),
            SubmitAttempt::InFlight => return Err(CoreError::SubmissionInFlight),
        };

        let mut guard = AbandonOnDrop {
            ticket: pending.ticket(),
            flow: self,
            settled: false,
        };
        let SubmissionOutcome { ticket, result } = pending.run(submitter, timeout).await;
        guard.flow.apply(ticket, &result);
        guard.settled = true;
        result
    }

    /// Contact address gated on CAPTCHA verification
    pub fn email_reveal<'a>(&self, address: &'a str) -> EmailReveal<'a> {
        if self.captcha_verified {
            EmailReveal::Revealed(address)
        } else {
            EmailReveal::Protected
        }
    }
}

/// Abandons the in-flight ticket unless the outcome was applied
struct AbandonOnDrop<'a, W: CaptchaWidget> {
    flow: &'a mut ContactFlow<W>,
    ticket: SubmissionTicket,
    settled: bool,
}

impl<W: CaptchaWidget> Drop for AbandonOnDrop<'_, W> {
    fn drop(&mut self) {
        if !self.settled {
            self.flow.abandon(self.ticket);
        }
    }
}

impl<W: CaptchaWidget> CaptchaEvents for ContactFlow<W> {
    fn captcha_verified(&mut self, _token: String) {
        self.captcha_verified = true;
    }

    fn captcha_cleared(&mut self) {
        self.captcha_verified = false;
    }
}
