use crate::application::dto::ShareOutcome;
use crate::application::read_models::VendorLinks;
use crate::discovery::domain::VendorSummary;
use crate::ports::outbound::{ShareCapability, ShareTarget};
use tracing::debug;

/// Shown next to the copyable link when the platform cannot share
const SHARE_FALLBACK_MESSAGE: &str = "Sharing isn't available here. Copy the link instead.";

/// ShareVendor - hands a vendor link to the platform share capability
///
/// Any failure degrades to a fallback carrying the URL, never to an error.
pub struct ShareVendor<'a, SH: ?Sized> {
    capability: &'a SH,
    links: &'a VendorLinks,
}

impl<'a, SH> ShareVendor<'a, SH>
where
    SH: ShareCapability + ?Sized,
{
    pub fn new(capability: &'a SH, links: &'a VendorLinks) -> Self {
        Self { capability, links }
    }

    pub fn share(&self, vendor: &VendorSummary) -> ShareOutcome {
        let target = ShareTarget {
            title: vendor.name.clone(),
            text: format!("Check out {} on our vendor directory", vendor.name),
            url: self.links.share_url(vendor),
        };

        match self.capability.share(&target) {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                debug!(vendor = %vendor.id, error = %e, "Share unavailable, offering link");
                ShareOutcome::Fallback {
                    url: target.url,
                    message: SHARE_FALLBACK_MESSAGE.to_string(),
                }
            }
        }
    }
}
