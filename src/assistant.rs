//! Simulated assistant: canned replies delivered after a delay.
//!
//! Each reply is a spawned task racing a timer against a cancel signal.
//! Cancelling (or dropping) the handle guarantees the reply is never
//! delivered.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const DEFAULT_REPLY: &str =
    "Thanks for your message. A member of our care team will follow up shortly.";

/// (keywords, reply); first match wins.
const CANNED_REPLIES: &[(&[&str], &str)] = &[
    (
        &["emergency", "chest pain", "bleeding"],
        "If this is an emergency, call your local emergency number or go to the nearest emergency department now.",
    ),
    (
        &["appointment", "schedule", "book", "reschedule"],
        "You can book or reschedule visits from the Appointments page. Would you like the next open slot?",
    ),
    (
        &["prescription", "refill", "medication"],
        "Refill requests are reviewed by your doctor within one business day.",
    ),
    (
        &["bill", "invoice", "payment", "insurance"],
        "Outstanding invoices are listed under Billing, where you can also update your payment method.",
    ),
    (
        &["lab", "result", "test"],
        "Lab results appear under Lab Results as soon as your care team releases them.",
    ),
];

/// Picks the reply for `prompt` by case-insensitive keyword match.
pub fn canned_reply(prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();
    CANNED_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| prompt.contains(k)))
        .map_or(DEFAULT_REPLY, |&(_, reply)| reply)
}

/// How a scheduled reply ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reply", rename_all = "snake_case")]
pub enum ReplyOutcome {
    Delivered(String),
    Cancelled,
    TimedOut,
}

/// Owner of one pending reply. Dropping it cancels the reply.
pub struct ReplyHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Option<String>>>,
    settled: Option<ReplyOutcome>,
}

/// Spawns a task that yields the canned reply for `prompt` after `delay`.
///
/// Must be called inside a tokio runtime.
pub fn schedule_reply(prompt: &str, delay: Duration) -> ReplyHandle {
    let reply = canned_reply(prompt).to_string();
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel_rx => {
                debug!("assistant reply cancelled before delivery");
                None
            }
            () = tokio::time::sleep(delay) => Some(reply),
        }
    });

    debug!(delay_ms = delay.as_millis() as u64, "assistant reply scheduled");

    ReplyHandle {
        cancel_tx: Some(cancel_tx),
        task: Some(task),
        settled: None,
    }
}

impl ReplyHandle {
    /// Stops the pending reply. Calling it again is a no-op, as is
    /// calling it after the reply was already delivered to `wait`.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_tx.is_none() && !matches!(self.settled, Some(ReplyOutcome::Delivered(_)))
    }

    /// Waits up to `timeout` for the reply. A timed-out wait leaves the
    /// reply pending; later calls may still see it delivered.
    pub async fn wait(&mut self, timeout: Duration) -> ReplyOutcome {
        if let Some(outcome) = &self.settled {
            return outcome.clone();
        }

        if self.cancel_tx.is_none() {
            return self.settle(ReplyOutcome::Cancelled);
        }

        let Some(task) = self.task.as_mut() else {
            return self.settle(ReplyOutcome::Cancelled);
        };

        let outcome = match tokio::time::timeout(timeout, task).await {
            Err(_) => return ReplyOutcome::TimedOut,
            Ok(Ok(Some(reply))) => ReplyOutcome::Delivered(reply),
            Ok(Ok(None)) => ReplyOutcome::Cancelled,
            Ok(Err(e)) => {
                warn!(error = %e, "assistant reply task failed");
                ReplyOutcome::Cancelled
            }
        };
        self.task = None;
        self.settle(outcome)
    }

    #[cfg(test)]
    fn abort_handle(&self) -> Option<tokio::task::AbortHandle> {
        self.task.as_ref().map(JoinHandle::abort_handle)
    }

    fn settle(&mut self, outcome: ReplyOutcome) -> ReplyOutcome {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.settled = Some(outcome.clone());
        outcome
    }
}

impl Drop for ReplyHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_millis(10);
    const PATIENT: Duration = Duration::from_secs(2);

    #[test]
    fn replies_match_keywords_case_insensitively() {
        assert!(canned_reply("Can I BOOK an appointment?").contains("Appointments page"));
        assert!(canned_reply("need a refill").contains("Refill requests"));
        assert!(canned_reply("Where is my Lab result").contains("Lab Results"));
    }

    #[test]
    fn emergency_wins_over_other_keywords() {
        assert!(canned_reply("chest pain, should I book an appointment?").starts_with("If this is an emergency"));
    }

    #[test]
    fn unmatched_prompt_gets_default() {
        assert_eq!(canned_reply("hello"), DEFAULT_REPLY);
        assert_eq!(canned_reply(""), DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn reply_is_delivered_after_delay() {
        let mut handle = schedule_reply("invoice question", SHORT);
        match handle.wait(PATIENT).await {
            ReplyOutcome::Delivered(reply) => assert!(reply.contains("Billing")),
            other => panic!("expected delivery, got {other:?}"),
        }
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_reply_is_never_delivered() {
        let mut handle = schedule_reply("hello", Duration::from_millis(50));
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(handle.wait(PATIENT).await, ReplyOutcome::Cancelled);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(handle.wait(PATIENT).await, ReplyOutcome::Cancelled);
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let mut handle = schedule_reply("hello", SHORT);
        handle.cancel();
        handle.cancel();
        assert_eq!(handle.wait(PATIENT).await, ReplyOutcome::Cancelled);
        handle.cancel();
    }

    #[tokio::test]
    async fn wait_times_out_then_delivers() {
        let mut handle = schedule_reply("lab test", Duration::from_millis(100));
        assert_eq!(handle.wait(Duration::from_millis(5)).await, ReplyOutcome::TimedOut);
        assert!(matches!(handle.wait(PATIENT).await, ReplyOutcome::Delivered(_)));
    }

    #[tokio::test]
    async fn cancel_after_delivery_keeps_delivery() {
        let mut handle = schedule_reply("hello", SHORT);
        let first = handle.wait(PATIENT).await;
        handle.cancel();
        assert_eq!(handle.wait(PATIENT).await, first);
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels_the_task() {
        let handle = schedule_reply("hello", Duration::from_secs(30));
        let task = handle.abort_handle().unwrap();
        assert!(!task.is_finished());

        drop(handle);
        tokio::time::sleep(SHORT).await;
        assert!(task.is_finished());
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_value(ReplyOutcome::Delivered("hi".into())).unwrap();
        assert_eq!(json["outcome"], "delivered");
        assert_eq!(json["reply"], "hi");
        let json = serde_json::to_value(ReplyOutcome::TimedOut).unwrap();
        assert_eq!(json["outcome"], "timed_out");
    }
}
