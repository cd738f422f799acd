use crate::application::read_models::DiscoveryView;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for emitting the view model as JSON
///
/// The output is the serialized `DiscoveryView`, so hosts that render their
/// own UI can consume it directly.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format(&self, view: &DiscoveryView) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(view)?
        } else {
            serde_json::to_string(view)?
        };
        Ok(json)
    }
}
