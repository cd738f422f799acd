use std::sync::{Arc, Mutex};
use vendor_discovery::prelude::*;

/// Mock Navigator recording pushed history entries
#[derive(Default, Clone)]
pub struct MockNavigator {
    pub entries: Arc<Mutex<Vec<NavigationEntry>>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.query.clone())
            .collect()
    }
}

impl Navigator for MockNavigator {
    fn push(&self, entry: NavigationEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    fn current(&self) -> Option<NavigationEntry> {
        self.entries.lock().unwrap().last().cloned()
    }
}
