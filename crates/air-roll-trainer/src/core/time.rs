/// Fixed-interval task driven by variable host frame times.
///
/// Runs every `interval` seconds until stopped. Backlog is capped at
/// `max_steps` ticks per frame and the excess is dropped, so a stalled host
/// never triggers a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    interval: f32,
    accumulator: f32,
    max_steps: u32,
    running: bool,
}

impl PeriodicTask {
    /// Create a stopped task. `max_steps` of zero is treated as one.
    pub fn new(interval: f32, max_steps: u32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.accumulator = 0.0;
        self.running = true;
    }

    /// Cancel the task. Later frames run no ticks until restarted.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add frame time. Returns the number of ticks due.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !self.running || !(frame_dt > 0.0) || !(self.interval > 0.0) {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.interval * self.max_steps as f32);
        let steps = (self.accumulator / self.interval) as u32;
        self.accumulator -= steps as f32 * self.interval;
        steps
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(interval: f32, max_steps: u32) -> PeriodicTask {
        let mut task = PeriodicTask::new(interval, max_steps);
        task.start();
        task
    }

    #[test]
    fn one_step_exact() {
        let mut task = running(0.02, 1);
        assert_eq!(task.accumulate(0.02), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut task = running(0.02, 1);
        assert_eq!(task.accumulate(0.008), 0);
        assert_eq!(task.accumulate(0.015), 1);
    }

    #[test]
    fn drops_backlog_beyond_cap() {
        let mut task = running(0.25, 4);
        assert_eq!(task.accumulate(3.0), 4);
        assert_eq!(task.accumulate(0.125), 0);

        let mut task = running(0.02, 1);
        assert_eq!(task.accumulate(1.0), 1);
        assert_eq!(task.accumulate(0.01), 0);
    }

    #[test]
    fn stopped_task_never_ticks() {
        let mut task = PeriodicTask::new(0.02, 1);
        assert!(!task.is_running());
        assert_eq!(task.accumulate(1.0), 0);

        task.start();
        assert_eq!(task.accumulate(0.02), 1);
        task.stop();
        assert_eq!(task.accumulate(0.02), 0);
    }

    #[test]
    fn ignores_bogus_frame_times() {
        let mut task = running(0.02, 1);
        assert_eq!(task.accumulate(-1.0), 0);
        assert_eq!(task.accumulate(f32::NAN), 0);
        assert_eq!(task.accumulate(0.02), 1);
    }
}
