use std::sync::{Arc, Mutex};
use vendor_discovery::prelude::*;

/// Mock Notifier for testing that captures messages
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix("Error: ").map(str::to_string))
            .collect()
    }
}

impl Notifier for MockNotifier {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("Info: {}", message));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn fetch_started(&self, page: u32) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Fetching page {}", page));
    }

    fn fetch_finished(&self) {
        self.messages.lock().unwrap().push("Fetched".to_string());
    }
}
