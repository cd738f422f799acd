use super::vendor::VendorId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one mounted discovery engine.
///
/// Hover channels are keyed by this token so that two engines mounted side by
/// side never see each other's signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineToken(Uuid);

impl EngineToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for EngineToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hover intent broadcast from the card list to the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverSignal {
    /// Open this vendor's popup (closing any other)
    Open(VendorId),
    /// Close every popup
    CloseAll,
}

/// Hover state on the list side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Highlighted(VendorId),
}
