//! Tokio-backed one-shot timers.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::ports::{TimerEvent, TimerScheduler};

/// Spawns a sleeping task per timer and posts the event on a channel once
/// it wakes. Pending timers are aborted when the scheduler is dropped.
pub struct TokioTimerScheduler {
    tx: mpsc::UnboundedSender<TimerEvent>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioTimerScheduler {
    /// Creates a scheduler and the receiver its timers fire into.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            pending: Mutex::new(Vec::new()),
        };
        (scheduler, rx)
    }

    /// Number of timers that have not fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        let mut pending = self.pending.lock();
        pending.retain(|handle| !handle.is_finished());
        pending.len()
    }
}

impl TimerScheduler for TokioTimerScheduler {
    fn schedule(&self, delay: Duration, event: TimerEvent) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(?event, "No tokio runtime, timer dropped");
            return;
        };

        let tx = self.tx.clone();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(event).is_err() {
                debug!(?event, "Timer receiver closed");
            }
        });

        let mut pending = self.pending.lock();
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }
}

impl Drop for TokioTimerScheduler {
    fn drop(&mut self) {
        for handle in self.pending.get_mut().drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tokio::time::Instant;

    use crate::application::RoundController;
    use crate::domain::entities::{RoundConfig, RoundId};
    use crate::domain::ports::RoundEvent;
    use crate::domain::ports::mock::{RecordingSink, ScriptedDigits};

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (scheduler, mut rx) = TokioTimerScheduler::new();
        let start = Instant::now();

        scheduler.schedule(Duration::from_millis(100), TimerEvent::hide(RoundId(1)));
        let event = rx.recv().await.unwrap();

        assert_eq!(event, TimerEvent::hide(RoundId(1)));
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_in_deadline_order() {
        let (scheduler, mut rx) = TokioTimerScheduler::new();

        scheduler.schedule(Duration::from_millis(500), TimerEvent::hide(RoundId(1)));
        scheduler.schedule(Duration::from_millis(10), TimerEvent::reset(RoundId(2)));

        assert_eq!(rx.recv().await, Some(TimerEvent::reset(RoundId(2))));
        assert_eq!(rx.recv().await, Some(TimerEvent::hide(RoundId(1))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_timers() {
        let (scheduler, mut rx) = TokioTimerScheduler::new();
        scheduler.schedule(Duration::from_secs(1), TimerEvent::hide(RoundId(1)));
        assert_eq!(scheduler.pending_count(), 1);

        drop(scheduler);

        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_schedule_without_runtime_is_dropped() {
        let (scheduler, mut rx) = TokioTimerScheduler::new();
        scheduler.schedule(Duration::ZERO, TimerEvent::hide(RoundId(1)));
        assert_eq!(scheduler.pending_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_controller_hides_target_exactly_once() {
        let (scheduler, mut rx) = TokioTimerScheduler::new();
        let sink = RecordingSink::new();
        let mut controller = RoundController::new(
            RoundConfig::default(),
            Box::new(ScriptedDigits::new(["3920"])),
            Arc::new(scheduler),
            Arc::new(sink.clone()),
        );

        let start = Instant::now();
        controller.start_new_round(RoundConfig::new(4, 0.1).unwrap());
        assert!(controller.view().revealed);

        let event = rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert!(controller.handle_timer(event));
        assert!(!controller.view().revealed);

        let nothing_else = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(nothing_else.is_err());

        let hidden = sink
            .take()
            .into_iter()
            .filter(|e| matches!(e, RoundEvent::Hidden { .. }))
            .count();
        assert_eq!(hidden, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_before_hide_ignores_first_timer() {
        let (scheduler, mut rx) = TokioTimerScheduler::new();
        let mut controller = RoundController::new(
            RoundConfig::default(),
            Box::new(ScriptedDigits::new(["11", "22"])),
            Arc::new(scheduler),
            Arc::new(RecordingSink::new()),
        );
        let config = RoundConfig::new(2, 0.1).unwrap();

        controller.start_new_round(config);
        tokio::time::advance(Duration::from_millis(50)).await;
        controller.start_new_round(config);

        let first = rx.recv().await.unwrap();
        assert!(!controller.handle_timer(first));
        assert!(controller.view().revealed);
        assert_eq!(controller.view().target, Some("22"));

        let second = rx.recv().await.unwrap();
        assert!(controller.handle_timer(second));
        assert!(!controller.view().revealed);
    }
}
