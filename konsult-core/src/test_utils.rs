//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::contact::{
    CaptchaEvent, CaptchaEvents, CaptchaWidget, ContactFlow, ContactPayload, ContactSubmitter,
    FormField,
};
use crate::error::{CoreError, CoreResult};

// ===== MockSubmitter =====

enum Behavior {
    Succeed,
    Fail(String),
    /// 永不返回（用于超时路径）
    Stall,
}

pub struct MockSubmitter {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockSubmitter {
    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::with(Behavior::Succeed)
    }

    pub fn failing(msg: &str) -> Self {
        Self::with(Behavior::Fail(msg.to_string()))
    }

    pub fn stalled() -> Self {
        Self::with(Behavior::Stall)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactSubmitter for MockSubmitter {
    async fn submit(&self, _payload: &ContactPayload) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail(msg) => Err(CoreError::SubmissionFailed(msg.clone())),
            Behavior::Stall => std::future::pending().await,
        }
    }
}

// ===== RecordingCaptcha =====

/// 记录 reset 次数的 CAPTCHA 组件
#[derive(Debug, Default)]
pub struct RecordingCaptcha {
    resets: usize,
}

impl RecordingCaptcha {
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl CaptchaWidget for RecordingCaptcha {
    fn site_key(&self) -> &str {
        "test-key"
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

// ===== 工厂方法 =====

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

/// 填好 Ada / ada@x.com / Hello 的表单，每次调用使用新的 mount id
pub fn filled_flow(verified: bool) -> ContactFlow<RecordingCaptcha> {
    let mount_id = NEXT_MOUNT.fetch_add(1, Ordering::SeqCst);
    let mut flow = ContactFlow::new(mount_id, RecordingCaptcha::default());
    flow.set_field(FormField::Name, "Ada");
    flow.set_field(FormField::Email, "ada@x.com");
    flow.set_field(FormField::Message, "Hello");
    if verified {
        flow.handle_captcha(CaptchaEvent::Verified("test-token".to_string()));
    }
    flow
}
