//! Lifecycle of a contact form submission.
//!
//! ```text
//! Idle    --submit()--> Sending
//! Sending --success-->  Succeeded --(reset)--> Idle
//! Sending --failure-->  Failed    --(reset)--> Idle
//! Sending --submit()--> Sending   (ignored)
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::relay::{ContactPayload, EmailRelay};

pub const SUCCESS_NOTICE: &str = "Message sent. Thanks for reaching out!";
pub const FAILURE_NOTICE: &str = "Failed to send message.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded(Option<String>),
    Failed(Option<String>),
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Succeeded(msg) | Self::Failed(msg) => msg.as_deref(),
            _ => None,
        }
    }
}

/// What a single `submit` call amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight; nothing was sent.
    Ignored,
    Succeeded,
    Failed,
}

impl SubmitOutcome {
    /// Clears the form after a delivered message. Failed or ignored
    /// submissions keep what the user typed so they can retry.
    pub fn apply_to(self, draft: &mut ContactPayload) {
        if self == Self::Succeeded {
            draft.clear();
        }
    }
}

type Listener = Arc<dyn Fn(&SubmissionState) + Send + Sync>;

pub struct SubmissionFlow<R> {
    relay: Arc<R>,
    state: Arc<Mutex<SubmissionState>>,
    listener: Option<Listener>,
}

impl<R> Clone for SubmissionFlow<R> {
    fn clone(&self) -> Self {
        Self {
            relay: self.relay.clone(),
            state: self.state.clone(),
            listener: self.listener.clone(),
        }
    }
}

impl<R: EmailRelay> SubmissionFlow<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay: Arc::new(relay),
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
            listener: None,
        }
    }

    /// Calls `listener` after every state change.
    pub fn with_listener(
        mut self,
        listener: impl Fn(&SubmissionState) + Send + Sync + 'static,
    ) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().clone()
    }

    /// Sends `payload` through the relay unless a submission is already in
    /// flight. The flow always leaves `Sending` exactly once per accepted
    /// submission, even if this future is dropped before the relay answers.
    pub async fn submit(&self, payload: &ContactPayload) -> SubmitOutcome {
        let Some(in_flight) = self.begin() else {
            log::debug!("submission already in flight, ignoring");
            return SubmitOutcome::Ignored;
        };
        match self.relay.send(payload).await {
            Ok(()) => {
                in_flight.settle(SubmissionState::Succeeded(Some(
                    SUCCESS_NOTICE.to_string(),
                )));
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                in_flight.settle(SubmissionState::Failed(Some(FAILURE_NOTICE.to_string())));
                SubmitOutcome::Failed
            }
        }
    }

    /// Returns the flow to `Idle`. Ignored while a submission is in flight,
    /// since a fresh submit would otherwise overlap the pending one.
    pub fn reset(&self) -> bool {
        self.transition(|state| match state {
            SubmissionState::Sending => None,
            _ => Some(SubmissionState::Idle),
        })
    }

    fn begin(&self) -> Option<InFlight<'_, R>> {
        let started = self.transition(|state| match state {
            SubmissionState::Sending => None,
            _ => Some(SubmissionState::Sending),
        });
        started.then_some(InFlight {
            flow: self,
            settled: false,
        })
    }
}

impl<R> SubmissionFlow<R> {
    fn lock(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transition(&self, next: impl FnOnce(&SubmissionState) -> Option<SubmissionState>) -> bool {
        let next = {
            let mut state = self.lock();
            let Some(next) = next(&state) else {
                return false;
            };
            *state = next.clone();
            next
        };
        if let Some(listener) = &self.listener {
            listener(&next);
        }
        true
    }
}

/// Marks one accepted submission. Settling consumes it; dropping it unsettled
/// settles as a failure so the flow never stays stuck in `Sending`.
struct InFlight<'a, R> {
    flow: &'a SubmissionFlow<R>,
    settled: bool,
}

impl<R> InFlight<'_, R> {
    fn settle(mut self, outcome: SubmissionState) {
        self.settled = true;
        self.flow.transition(|_| Some(outcome));
    }
}

impl<R> Drop for InFlight<'_, R> {
    fn drop(&mut self) {
        if !self.settled {
            log::debug!("submission dropped before the relay answered");
            self.flow.transition(|_| Some(SubmissionState::Failed(None)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayError;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeRelay {
        calls: AtomicUsize,
        reject: bool,
        gate: Option<Arc<Notify>>,
    }

    impl FakeRelay {
        fn rejecting() -> Self {
            Self {
                reject: true,
                ..Default::default()
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Default::default()
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, _payload: &ContactPayload) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.reject {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "bad".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: None,
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let flow = SubmissionFlow::new(FakeRelay::default());
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(flow.state().notice(), None);
    }

    #[tokio::test]
    async fn test_successful_submission_clears_form() {
        let flow = SubmissionFlow::new(FakeRelay::default());
        let mut draft = payload();
        let outcome = flow.submit(&draft).await;
        outcome.apply_to(&mut draft);

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(
            flow.state(),
            SubmissionState::Succeeded(Some(SUCCESS_NOTICE.to_string()))
        );
        assert_eq!(draft, ContactPayload::default());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_form() {
        let flow = SubmissionFlow::new(FakeRelay::rejecting());
        let mut draft = payload();
        let outcome = flow.submit(&draft).await;
        outcome.apply_to(&mut draft);

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(flow.state().notice(), Some(FAILURE_NOTICE));
        assert!(!flow.state().is_sending());
        assert_eq!(draft, payload());
    }

    #[tokio::test]
    async fn test_rapid_double_submit_sends_once() {
        let gate = Arc::new(Notify::new());
        let flow = SubmissionFlow::new(FakeRelay::gated(gate.clone()));
        let draft = payload();

        let (first, second) = tokio::join!(flow.submit(&draft), async {
            assert!(flow.state().is_sending());
            let outcome = flow.submit(&draft).await;
            assert!(flow.state().is_sending());
            gate.notify_one();
            outcome
        });

        assert_eq!(first, SubmitOutcome::Succeeded);
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(flow.relay.calls.load(Ordering::SeqCst), 1);
        assert!(matches!(flow.state(), SubmissionState::Succeeded(_)));
    }

    #[tokio::test]
    async fn test_reset_allows_new_submission() {
        for relay in [FakeRelay::default(), FakeRelay::rejecting()] {
            let flow = SubmissionFlow::new(relay);
            flow.submit(&payload()).await;
            assert!(matches!(
                flow.state(),
                SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
            ));

            assert!(flow.reset());
            assert_eq!(flow.state(), SubmissionState::Idle);
            assert_ne!(flow.submit(&payload()).await, SubmitOutcome::Ignored);
            assert_eq!(flow.relay.calls.load(Ordering::SeqCst), 2);
        }
    }

    #[tokio::test]
    async fn test_reset_ignored_while_sending() {
        let gate = Arc::new(Notify::new());
        let flow = SubmissionFlow::new(FakeRelay::gated(gate.clone()));
        let draft = payload();

        let (outcome, reset) = tokio::join!(flow.submit(&draft), async {
            let reset = flow.reset();
            gate.notify_one();
            reset
        });

        assert!(!reset);
        assert_eq!(outcome, SubmitOutcome::Succeeded);
    }

    #[tokio::test]
    async fn test_dropped_submission_settles_as_failure() {
        let gate = Arc::new(Notify::new());
        let flow = SubmissionFlow::new(FakeRelay::gated(gate));
        let draft = payload();

        let mut pending = Box::pin(flow.submit(&draft));
        // first poll runs until the relay parks on the gate
        assert!(futures_poll_once(pending.as_mut()).await.is_none());
        assert!(flow.state().is_sending());
        drop(pending);

        assert_eq!(flow.state(), SubmissionState::Failed(None));
    }

    #[tokio::test]
    async fn test_listener_sees_every_transition() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let flow = SubmissionFlow::new(FakeRelay::default()).with_listener({
            let seen = seen.clone();
            move |state| seen.lock().unwrap().push(state.clone())
        });

        flow.submit(&payload()).await;
        flow.reset();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                SubmissionState::Sending,
                SubmissionState::Succeeded(Some(SUCCESS_NOTICE.to_string())),
                SubmissionState::Idle,
            ]
        );
    }

    async fn futures_poll_once<F: Future + Unpin>(fut: F) -> Option<F::Output> {
        let mut fut = fut;
        std::future::poll_fn(|cx| {
            std::task::Poll::Ready(match std::pin::Pin::new(&mut fut).poll(cx) {
                std::task::Poll::Ready(v) => Some(v),
                std::task::Poll::Pending => None,
            })
        })
        .await
    }
}
