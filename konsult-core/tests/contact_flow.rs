//! End-to-end contact form scenarios against the public API

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use konsult_core::contact::{
    CaptchaEvents, ContactFlow, ContactPayload, ContactSubmitter, EmailReveal, FormField,
    SimulatedSubmitter, SubmissionStatus, SubmitAttempt, TestCaptcha,
};
use konsult_core::{CoreError, CoreResult};

#[derive(Default)]
struct CountingSubmitter {
    calls: AtomicUsize,
}

#[async_trait]
impl ContactSubmitter for CountingSubmitter {
    async fn submit(&self, _payload: &ContactPayload) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(())
    }
}

fn fill(flow: &mut ContactFlow) {
    for (field, value) in [
        (FormField::Name, "Ada"),
        (FormField::Email, "ada@x.com"),
        (FormField::Message, "Hello"),
    ] {
        flow.set_field(field, value);
    }
}

fn tick_captcha(flow: &mut ContactFlow) {
    let event = flow.captcha_mut().solve(Instant::now());
    if let Some(event) = event {
        flow.handle_captcha(event);
    }
}

#[tokio::test(start_paused = true)]
async fn visitor_sends_message_with_simulated_backend() {
    let mut flow = ContactFlow::new(1, TestCaptcha::default());
    fill(&mut flow);

    assert_eq!(
        flow.email_reveal("contact@example.com"),
        EmailReveal::Protected
    );
    tick_captcha(&mut flow);
    assert!(flow.can_submit());
    assert_eq!(
        flow.email_reveal("contact@example.com"),
        EmailReveal::Revealed("contact@example.com")
    );

    let submitter = SimulatedSubmitter::default();
    flow.submit(&submitter, Duration::from_secs(15))
        .await
        .unwrap();

    assert_eq!(flow.status(), SubmissionStatus::Success);
    assert!(flow.form().name.is_empty());
    assert!(!flow.captcha().is_checked());
    assert!(!flow.is_captcha_verified());
}

#[tokio::test(start_paused = true)]
async fn double_press_dispatches_one_submission() {
    let mut flow = ContactFlow::new(7, TestCaptcha::default());
    fill(&mut flow);
    tick_captcha(&mut flow);
    let submitter = Arc::new(CountingSubmitter::default());

    let SubmitAttempt::Dispatched(pending) = flow.begin_submit() else {
        panic!("first press should dispatch");
    };
    assert!(matches!(flow.begin_submit(), SubmitAttempt::InFlight));

    let task = {
        let submitter = Arc::clone(&submitter);
        tokio::spawn(async move { pending.run(submitter.as_ref(), Duration::from_secs(15)).await })
    };
    let outcome = task.await.unwrap();

    assert!(flow.finish(outcome));
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
    assert_eq!(flow.status(), SubmissionStatus::Success);
}

#[tokio::test]
async fn bot_submission_never_reaches_backend() {
    let mut flow = ContactFlow::new(3, TestCaptcha::default());
    fill(&mut flow);
    tick_captcha(&mut flow);
    flow.set_field(FormField::Honeypot, "http://spam.example");
    let submitter = CountingSubmitter::default();

    let err = flow
        .submit(&submitter, Duration::from_secs(15))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::SpamSuppressed));
    assert_eq!(flow.status(), SubmissionStatus::Idle);
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unverified_submission_never_reaches_backend() {
    let mut flow = ContactFlow::new(4, TestCaptcha::default());
    fill(&mut flow);
    let submitter = CountingSubmitter::default();

    let err = flow
        .submit(&submitter, Duration::from_secs(15))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::CaptchaRequired));
    assert_eq!(flow.status(), SubmissionStatus::Error);
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
    assert_eq!(flow.form().message, "Hello");
}

#[tokio::test(start_paused = true)]
async fn outcome_after_unmount_is_dropped() {
    let mut flow = ContactFlow::new(10, TestCaptcha::default());
    fill(&mut flow);
    tick_captcha(&mut flow);
    let SubmitAttempt::Dispatched(pending) = flow.begin_submit() else {
        panic!("expected dispatch");
    };
    let task = tokio::spawn(async move {
        pending
            .run(&SimulatedSubmitter::default(), Duration::from_secs(15))
            .await
    });

    // leaving the page drops the form; coming back mounts a fresh one
    drop(flow);
    let mut remounted = ContactFlow::new(11, TestCaptcha::default());

    let outcome = task.await.unwrap();
    assert!(outcome.result.is_ok());
    assert!(!remounted.finish(outcome));
    assert_eq!(remounted.status(), SubmissionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn cancelled_submit_leaves_form_usable() {
    let mut flow = ContactFlow::new(9, TestCaptcha::default());
    fill(&mut flow);
    tick_captcha(&mut flow);

    let slow = SimulatedSubmitter::new(Duration::from_secs(5));
    let cancelled = tokio::time::timeout(
        Duration::from_millis(10),
        flow.submit(&slow, Duration::from_secs(15)),
    )
    .await;
    assert!(cancelled.is_err());

    assert_eq!(flow.status(), SubmissionStatus::Error);
    assert_eq!(flow.form().name, "Ada");
    assert!(matches!(flow.begin_submit(), SubmitAttempt::Dispatched(_)));
}
