//! Trigger controller - the single authority on whether a trigger proceeds

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tokio::sync::Notify;

use crate::domain::recording::ClipDuration;
use crate::domain::trigger::{DebounceWindow, Decision, TriggerStatus};

/// Owns the controller state shared between the command loop and the reaper.
///
/// `active` is only ever incremented by [`handle_trigger`](Self::handle_trigger)
/// and only decremented by [`on_child_exit`](Self::on_child_exit) or
/// [`abandon_launch`](Self::abandon_launch); it never goes below zero.
/// The debounce window is written only while evaluating a trigger.
#[derive(Debug)]
pub struct TriggerController {
    default_duration: ClipDuration,
    active: AtomicUsize,
    window: Mutex<DebounceWindow>,
    idle: Notify,
}

impl TriggerController {
    /// Create an idle controller that has never accepted a trigger
    pub fn new(default_duration: ClipDuration, min_gap: Duration) -> Self {
        Self {
            default_duration,
            active: AtomicUsize::new(0),
            window: Mutex::new(DebounceWindow::new(min_gap)),
            idle: Notify::new(),
        }
    }

    /// Evaluate a trigger arriving at `now`.
    ///
    /// On `Proceed` the timestamp has already been recorded and the active
    /// count incremented; the caller must launch or call `abandon_launch`.
    pub fn handle_trigger(&self, requested: Option<ClipDuration>, now: Instant) -> Decision {
        // Held across both gates so two triggers cannot both pass debounce.
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());

        if !window.admits(now) {
            return Decision::Debounced;
        }

        if self
            .active
            .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Decision::Busy;
        }

        window.record(now);
        Decision::Proceed(requested.unwrap_or(self.default_duration))
    }

    /// A tracked recorder terminated.
    ///
    /// Returns false if there was nothing to decrement (spurious notice).
    pub fn on_child_exit(&self) -> bool {
        self.release()
    }

    /// Roll back the increment of a trigger whose launch failed.
    /// The debounce timestamp is left as recorded.
    pub fn abandon_launch(&self) -> bool {
        self.release()
    }

    fn release(&self) -> bool {
        let released = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if self.active.load(Ordering::SeqCst) == 0 {
            self.idle.notify_waiters();
        }

        released
    }

    /// Number of recordings in flight
    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> TriggerStatus {
        TriggerStatus::from_active(self.active_count())
    }

    pub fn min_gap(&self) -> Duration {
        self.window
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .min_gap()
    }

    /// Wait until no recording is in flight
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            // Register before checking so a release in between is not lost.
            notified.as_mut().enable();

            if self.active_count() == 0 {
                return;
            }

            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn clip(n: u64) -> ClipDuration {
        ClipDuration::from_millis(n).unwrap()
    }

    fn controller() -> TriggerController {
        TriggerController::new(clip(10_000), ms(500))
    }

    #[test]
    fn new_controller_is_idle() {
        let c = controller();
        assert_eq!(c.active_count(), 0);
        assert_eq!(c.status(), TriggerStatus::Idle);
    }

    #[test]
    fn second_save_within_gap_is_debounced() {
        let c = controller();
        let t0 = Instant::now();

        assert_eq!(c.handle_trigger(None, t0), Decision::Proceed(clip(10_000)));
        assert_eq!(c.handle_trigger(None, t0 + ms(100)), Decision::Debounced);
    }

    #[test]
    fn burst_within_gap_accepts_only_first() {
        let c = TriggerController::new(clip(10_000), ms(500));
        let t0 = Instant::now();

        assert!(c.handle_trigger(None, t0).is_proceed());
        c.on_child_exit();

        for step in 1..5 {
            assert_eq!(
                c.handle_trigger(None, t0 + ms(step * 100)),
                Decision::Debounced
            );
        }
        assert_eq!(c.active_count(), 0);
    }

    #[test]
    fn override_is_used_and_status_is_recording() {
        let c = controller();
        assert_eq!(
            c.handle_trigger(Some(clip(15_000)), Instant::now()),
            Decision::Proceed(clip(15_000))
        );
        assert_eq!(c.status(), TriggerStatus::Recording);
    }

    #[test]
    fn busy_while_recording_regardless_of_elapsed_time() {
        let c = controller();
        let t0 = Instant::now();
        assert!(c.handle_trigger(None, t0).is_proceed());

        assert_eq!(c.handle_trigger(None, t0 + ms(600)), Decision::Busy);
        assert_eq!(c.handle_trigger(None, t0 + ms(60_000)), Decision::Busy);
        assert_eq!(c.active_count(), 1);
    }

    #[test]
    fn busy_does_not_move_the_timestamp() {
        let c = controller();
        let t0 = Instant::now();
        assert!(c.handle_trigger(None, t0).is_proceed());
        assert_eq!(c.handle_trigger(None, t0 + ms(600)), Decision::Busy);
        c.on_child_exit();

        // Gap is still measured from t0, not from the rejected trigger.
        assert!(c.handle_trigger(None, t0 + ms(700)).is_proceed());
    }

    #[test]
    fn accepted_after_exit_and_gap() {
        let c = controller();
        let t0 = Instant::now();
        assert!(c.handle_trigger(None, t0).is_proceed());
        assert!(c.on_child_exit());

        assert_eq!(c.status(), TriggerStatus::Idle);
        assert!(c.handle_trigger(None, t0 + ms(500)).is_proceed());
    }

    #[test]
    fn exit_decrements_by_exactly_one_and_clamps() {
        let c = controller();
        assert!(c.handle_trigger(None, Instant::now()).is_proceed());

        assert!(c.on_child_exit());
        assert_eq!(c.active_count(), 0);
        assert!(!c.on_child_exit());
        assert_eq!(c.active_count(), 0);
    }

    #[test]
    fn abandoned_launch_keeps_the_timestamp() {
        let c = controller();
        let t0 = Instant::now();
        assert!(c.handle_trigger(None, t0).is_proceed());
        assert!(c.abandon_launch());
        assert_eq!(c.active_count(), 0);

        assert_eq!(c.handle_trigger(None, t0 + ms(100)), Decision::Debounced);
        assert!(c.handle_trigger(None, t0 + ms(500)).is_proceed());
    }

    #[test]
    fn concurrent_duplicate_exits_never_underflow() {
        let c = Arc::new(controller());
        assert!(c.handle_trigger(None, Instant::now()).is_proceed());

        let released: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let c = Arc::clone(&c);
                    s.spawn(move || usize::from(c.on_child_exit()))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(released, 1);
        assert_eq!(c.active_count(), 0);
    }

    #[test]
    fn concurrent_triggers_admit_only_one() {
        let c = Arc::new(TriggerController::new(clip(1000), Duration::ZERO));
        let now = Instant::now();

        let accepted: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let c = Arc::clone(&c);
                    s.spawn(move || usize::from(c.handle_trigger(None, now).is_proceed()))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(accepted, 1);
        assert_eq!(c.active_count(), 1);
    }

    #[tokio::test]
    async fn wait_idle_returns_immediately_when_idle() {
        let c = controller();
        tokio::time::timeout(ms(100), c.wait_idle())
            .await
            .expect("idle controller should not block");
    }

    #[tokio::test]
    async fn wait_idle_blocks_until_exit() {
        let c = Arc::new(controller());
        assert!(c.handle_trigger(None, Instant::now()).is_proceed());

        let waiter = {
            let c = Arc::clone(&c);
            tokio::spawn(async move { c.wait_idle().await })
        };

        tokio::time::sleep(ms(50)).await;
        assert!(!waiter.is_finished());

        c.on_child_exit();
        tokio::time::timeout(ms(1000), waiter)
            .await
            .expect("wait_idle should finish after exit")
            .unwrap();
    }
}
