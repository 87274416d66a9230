use deps_mapper::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter that records every line it is handed
///
/// Clones share the same log, so a test can keep one handle while the use
/// case owns another.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: String) {
        self.log.lock().unwrap().push(line);
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Warnings and errors, without their `Error: ` prefix
    pub fn errors(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Error: ").map(String::from))
            .collect()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(match message {
            Some(group) => format!("Progress: {}/{} - {}", current, total, group),
            None => format!("Progress: {}/{}", current, total),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
