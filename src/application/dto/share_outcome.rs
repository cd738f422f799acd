use serde::Serialize;

/// ShareOutcome - what happened when a vendor was shared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ShareOutcome {
    /// The platform share sheet accepted the intent
    Shared,
    /// Sharing is unavailable or failed; the URL should be offered for copying
    Fallback { url: String, message: String },
}

impl ShareOutcome {
    pub fn fallback_url(&self) -> Option<&str> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Fallback { url, .. } => Some(url),
        }
    }
}
