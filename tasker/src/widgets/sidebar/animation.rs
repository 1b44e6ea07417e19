use iced::time::{Duration, Instant};

/// Linear width transition between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WidthAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl WidthAnimation {
    pub(crate) fn new(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    /// Width at `now`, clamped to the endpoints.
    pub(crate) fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}
