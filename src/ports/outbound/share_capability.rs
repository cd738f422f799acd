use crate::shared::Result;

/// What gets shared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// ShareCapability port for the platform share sheet
///
/// Sharing is best effort: an error means the platform could not share and
/// the caller falls back to showing the URL for manual copy.
pub trait ShareCapability: Send + Sync {
    fn share(&self, target: &ShareTarget) -> Result<()>;
}
