//! 提交服务
//!
//! 把 `PendingSubmission` 放到 tokio 运行时上执行，
//! 结果通过无界 mpsc 通道送回主循环。

use std::sync::Arc;
use std::time::Duration;

use konsult_core::contact::{ContactSubmitter, PendingSubmission, SubmissionOutcome};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 后台提交服务
pub struct SubmitService {
    handle: Handle,
    submitter: Arc<dyn ContactSubmitter>,
    timeout: Duration,
    outcomes: UnboundedSender<SubmissionOutcome>,
}

impl SubmitService {
    /// 创建服务，同时返回结果接收端（交给 `app::run`）
    pub fn new(
        handle: Handle,
        submitter: Arc<dyn ContactSubmitter>,
        timeout: Duration,
    ) -> (Self, UnboundedReceiver<SubmissionOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            handle,
            submitter,
            timeout,
            outcomes: tx,
        };
        (service, rx)
    }

    /// 在后台发送
    pub fn dispatch(&self, pending: PendingSubmission) {
        let submitter = Arc::clone(&self.submitter);
        let outcomes = self.outcomes.clone();
        let timeout = self.timeout;

        log::debug!(
            "Dispatching submission for mount {}",
            pending.ticket().mount_id()
        );

        self.handle.spawn(async move {
            let outcome = pending.run(submitter.as_ref(), timeout).await;
            // 主循环已退出时接收端被丢弃，结果无人关心
            if outcomes.send(outcome).is_err() {
                log::debug!("Submission finished after shutdown");
            }
        });
    }
}
