//! Progress notification for import pipeline consumers

/// Receives one notification per pipeline step, fired as the step starts.
///
/// Notification only: the pipeline never waits on or branches by what a
/// sink does. Closures of the matching shape implement the trait, so
/// callers can pass `|name, index, count| ...` directly.
pub trait ProgressSink {
    fn step(&mut self, step_name: &str, step_index: usize, step_count: usize);
}

impl<F> ProgressSink for F
where
    F: FnMut(&str, usize, usize),
{
    fn step(&mut self, step_name: &str, step_index: usize, step_count: usize) {
        self(step_name, step_index, step_count)
    }
}

/// A sink that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn step(&mut self, _step_name: &str, _step_index: usize, _step_count: usize) {}
}
