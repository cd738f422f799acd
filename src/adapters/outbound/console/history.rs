use crate::ports::outbound::{NavigationEntry, Navigator};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct HistoryStack {
    entries: Vec<NavigationEntry>,
    /// Index of the current entry; meaningless while `entries` is empty
    cursor: usize,
}

/// InMemoryHistory adapter - a browser-like history stack
///
/// Pushing truncates any forward entries. `back` and `forward` move the
/// cursor and return the entry the host should navigate to.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    stack: Mutex<HistoryStack>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History starting at an initial entry
    pub fn starting_at(entry: NavigationEntry) -> Self {
        let history = Self::new();
        history.push(entry);
        history
    }

    pub fn back(&self) -> Option<NavigationEntry> {
        let mut stack = self.stack.lock();
        if stack.entries.is_empty() || stack.cursor == 0 {
            return None;
        }
        stack.cursor -= 1;
        stack.entries.get(stack.cursor).cloned()
    }

    pub fn forward(&self) -> Option<NavigationEntry> {
        let mut stack = self.stack.lock();
        if stack.cursor + 1 >= stack.entries.len() {
            return None;
        }
        stack.cursor += 1;
        stack.entries.get(stack.cursor).cloned()
    }

    pub fn len(&self) -> usize {
        self.stack.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.lock().entries.is_empty()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> Vec<NavigationEntry> {
        self.stack.lock().entries.clone()
    }
}

impl Navigator for InMemoryHistory {
    fn push(&self, entry: NavigationEntry) {
        let mut stack = self.stack.lock();
        if !stack.entries.is_empty() {
            let keep = stack.cursor + 1;
            stack.entries.truncate(keep);
        }
        stack.entries.push(entry);
        stack.cursor = stack.entries.len() - 1;
    }

    fn current(&self) -> Option<NavigationEntry> {
        let stack = self.stack.lock();
        stack.entries.get(stack.cursor).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ScrollBehavior;

    fn entry(query: &str) -> NavigationEntry {
        NavigationEntry::new(query, ScrollBehavior::Preserve)
    }

    #[test]
    fn test_back_and_forward() {
        let history = InMemoryHistory::new();
        history.push(entry("a=1"));
        history.push(entry("a=2"));
        history.push(entry("a=3"));

        assert_eq!(history.back().unwrap().query, "a=2");
        assert_eq!(history.back().unwrap().query, "a=1");
        assert!(history.back().is_none());
        assert_eq!(history.forward().unwrap().query, "a=2");
        assert_eq!(history.current().unwrap().query, "a=2");
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let history = InMemoryHistory::starting_at(entry(""));
        history.push(entry("page=2"));
        history.back();
        history.push(entry("view=map"));

        assert!(history.forward().is_none());
        let queries: Vec<String> = history.entries().into_iter().map(|e| e.query).collect();
        assert_eq!(queries, vec!["", "view=map"]);
    }

    #[test]
    fn test_empty_history() {
        let history = InMemoryHistory::new();
        assert!(history.current().is_none());
        assert!(history.back().is_none());
        assert!(history.forward().is_none());
        assert!(history.is_empty());
    }
}
