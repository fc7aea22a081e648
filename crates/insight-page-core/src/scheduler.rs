//! Coalesces scroll events into at most one recompute per animation frame.

use tracing::trace;

#[derive(Debug, Default)]
pub struct ScrollScheduler {
    pending: bool,
}

impl ScrollScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll event. Returns `true` when the caller must request a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            trace!("Frame already pending; coalescing scroll event");
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the start of the frame callback, before the handler runs.
    pub fn on_frame(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drop a pending frame on teardown. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_events_in_one_frame_request_once() {
        let mut scheduler = ScrollScheduler::new();
        let requested = (0..25).filter(|_| scheduler.request()).count();
        assert_eq!(requested, 1);
        assert!(scheduler.is_pending());
    }

    #[test]
    fn event_during_handler_schedules_one_more_frame() {
        let mut scheduler = ScrollScheduler::new();
        assert!(scheduler.request());
        scheduler.on_frame();
        // Handler is running; new events arrive.
        assert!(scheduler.request());
        assert!(!scheduler.request());
        scheduler.on_frame();
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn cancel_clears_pending_frame() {
        let mut scheduler = ScrollScheduler::new();
        assert!(!scheduler.cancel());
        scheduler.request();
        assert!(scheduler.cancel());
        assert!(scheduler.request());
    }
}
