use crate::application::read_models::DiscoveryView;
use crate::shared::Result;

/// ViewFormatter port for serializing a rendered discovery view
///
/// This port abstracts the output format (Markdown, JSON, ...).
pub trait ViewFormatter {
    /// Formats the view model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &DiscoveryView) -> Result<String>;
}
