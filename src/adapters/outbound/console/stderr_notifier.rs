use crate::ports::outbound::Notifier;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::io::IsTerminal;
use std::time::Duration;

/// StderrNotifier adapter for transient notifications on stderr
///
/// This adapter implements the Notifier port, writing to stderr so it doesn't
/// interfere with the rendered view on stdout. A spinner runs while a catalog
/// fetch is in flight.
pub struct StderrNotifier {
    spinner: Mutex<Option<ProgressBar>>,
    colored: bool,
    quiet: bool,
}

impl StderrNotifier {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            colored: std::io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// Notifier that only reports errors
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for StderrNotifier {
    fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.colored {
            eprintln!("{} {}", "✔".green(), message);
        } else {
            eprintln!("✔ {}", message);
        }
    }

    fn error(&self, message: &str) {
        self.clear_spinner();
        if self.colored {
            eprintln!("{} {}", "✖".red(), message.red());
        } else {
            eprintln!("✖ {}", message);
        }
    }

    fn fetch_started(&self, page: u32) {
        if self.quiet || !self.colored {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Loading vendors (page {})...", page));
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.spinner.lock().replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn fetch_finished(&self) {
        self.clear_spinner();
    }
}
