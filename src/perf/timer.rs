use std::time::{Duration, Instant};

/// A sink for elapsed-time measurements.
pub trait Monitor {
    /// Accept one measurement.
    fn add_measurement(&mut self, duration: Duration);
}

/// A scoped timer: starts at construction, reports to its monitor on drop.
///
/// Drop order matters.  Values constructed after the timer are dropped
/// before it, so their destructors land inside the measurement.
pub struct Timer<'a> {
    start: Instant,
    monitor: &'a mut dyn Monitor,
}

impl<'a> Timer<'a> {
    /// Start timing.
    pub fn new(monitor: &'a mut dyn Monitor) -> Self {
        Self {
            start: Instant::now(),
            monitor,
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.monitor.add_measurement(self.start.elapsed());
    }
}

/// Time a single closure call.
pub fn measure<F: FnOnce()>(monitor: &mut dyn Monitor, f: F) {
    let _timer = Timer::new(monitor);
    f();
}
