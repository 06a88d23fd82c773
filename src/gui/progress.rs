// src/gui/progress.rs
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    files: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, files: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Analyzing {} apps", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn stage_done(&mut self, stage: &str) {
        self.set_status(format!("Done: {} ({} apps)", stage, self.total));
    }
    fn file_written(&mut self, path: &Path) {
        self.files += 1;
        self.set_status(format!("Wrote {} ({} files)", path.display(), self.files));
    }
    fn finish(&mut self) {
        if self.files == 0 {
            self.set_status(format!("Analysis complete ({} apps)", self.total));
        } else {
            self.set_status(format!("Complete: {} files written", self.files));
        }
    }
}
