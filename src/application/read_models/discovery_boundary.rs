use super::discovery_view::{DiscoveryMetadata, DiscoveryView, ViewBody};
use super::discovery_view_builder::DiscoveryViewBuilder;
use crate::discovery::domain::{ListingResult, SavedVendorSet};
use crate::discovery::services::{QueryState, QueryStateCodec};
use crate::shared::error::FetchError;
use tracing::warn;

/// DiscoveryBoundary - turns a fetch outcome into a view
///
/// A failed fetch becomes an error view carrying a retry query instead of
/// propagating to the host.
pub struct DiscoveryBoundary;

impl DiscoveryBoundary {
    pub fn render(
        builder: &DiscoveryViewBuilder,
        state: &QueryState,
        outcome: Result<&ListingResult, &FetchError>,
        saved: &SavedVendorSet,
        metadata: DiscoveryMetadata,
    ) -> DiscoveryView {
        match outcome {
            Ok(result) => builder.build(state, result, saved, metadata),
            Err(error) => {
                warn!(%error, engine = %metadata.engine, "Rendering fetch error");
                let body = ViewBody::Error {
                    message: error.user_message().to_string(),
                    details: error.to_string(),
                    retry_query: QueryStateCodec::encode_to_string(state),
                };
                DiscoveryViewBuilder::assemble(state, body, metadata)
            }
        }
    }
}
