use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Task keys. One slot per purpose: spawning under a live key replaces (and
/// aborts) the previous task, so at most one fetch of each kind is running.
pub const CATALOG: &str = "catalog";
pub const RECOMMEND: &str = "recommend";

#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(key, task) {
            previous.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}
