// src/progress.rs
/// Lightweight progress reporting used by the batch run (load/analyze/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of apps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one pipeline stage completes (e.g. "standardize", "aggregate").
    fn stage_done(&mut self, _stage: &str) {}

    /// Called for every output file written.
    fn file_written(&mut self, _path: &std::path::Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
