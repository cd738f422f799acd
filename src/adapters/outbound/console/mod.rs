/// Console adapters for notifications and navigation history
mod history;
mod stderr_notifier;

pub use history::InMemoryHistory;
pub use stderr_notifier::StderrNotifier;
