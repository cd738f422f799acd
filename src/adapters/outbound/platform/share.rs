use crate::ports::outbound::{ShareCapability, ShareTarget};
use crate::shared::Result;
use parking_lot::Mutex;

/// Share capability for hosts without a native share sheet
///
/// Always fails, so callers fall back to offering the link for copying.
#[derive(Debug, Default)]
pub struct UnsupportedShare;

impl ShareCapability for UnsupportedShare {
    fn share(&self, _target: &ShareTarget) -> Result<()> {
        anyhow::bail!("Sharing is not supported on this platform")
    }
}

/// Share capability that accepts every intent and keeps it
#[derive(Debug, Default)]
pub struct RecordingShare {
    shared: Mutex<Vec<ShareTarget>>,
}

impl RecordingShare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> Vec<ShareTarget> {
        self.shared.lock().clone()
    }
}

impl ShareCapability for RecordingShare {
    fn share(&self, target: &ShareTarget) -> Result<()> {
        self.shared.lock().push(target.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ShareTarget {
        ShareTarget {
            title: "Lens".to_string(),
            text: "Check out Lens".to_string(),
            url: "https://x.test/vendors/lens".to_string(),
        }
    }

    #[test]
    fn test_unsupported_share_fails() {
        assert!(UnsupportedShare.share(&target()).is_err());
    }

    #[test]
    fn test_recording_share_keeps_targets() {
        let share = RecordingShare::new();
        share.share(&target()).unwrap();
        assert_eq!(share.shared(), vec![target()]);
    }
}
