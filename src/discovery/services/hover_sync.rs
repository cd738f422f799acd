//! Hover synchronization between the compact card list and the map.
//!
//! The list side owns a [`HoverSynchronizer`] (publisher), the map side a
//! [`MarkerPopups`] (subscriber). Both obtain their channel from a shared
//! [`HoverBus`] using the engine's [`EngineToken`], so each mounted engine
//! talks only to itself.

use crate::discovery::domain::{EngineToken, HoverSignal, HoverState, VendorId};
use dashmap::DashMap;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

/// Buffered hover signals per engine before slow subscribers start lagging
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Registry of hover channels keyed by engine token
pub struct HoverBus {
    channels: DashMap<EngineToken, broadcast::Sender<HoverSignal>>,
    capacity: usize,
}

impl HoverBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    fn sender(&self, token: EngineToken) -> broadcast::Sender<HoverSignal> {
        self.channels
            .entry(token)
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }

    /// Publisher for the card list of engine `token`
    pub fn publisher(&self, token: EngineToken) -> HoverSynchronizer {
        HoverSynchronizer {
            token,
            sender: self.sender(token),
            state: HoverState::Idle,
        }
    }

    /// Subscriber for the map of engine `token`
    pub fn subscribe(&self, token: EngineToken) -> MarkerPopups {
        MarkerPopups {
            token,
            receiver: self.sender(token).subscribe(),
            open: None,
        }
    }

    /// Drops the channel of an unmounted engine
    pub fn release(&self, token: EngineToken) {
        self.channels.remove(&token);
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

impl Default for HoverBus {
    fn default() -> Self {
        Self::new()
    }
}

/// List-side hover state machine (`Idle` / `Highlighted(id)`)
pub struct HoverSynchronizer {
    token: EngineToken,
    sender: broadcast::Sender<HoverSignal>,
    state: HoverState,
}

impl HoverSynchronizer {
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn token(&self) -> EngineToken {
        self.token
    }

    /// Pointer entered a compact card. Returns the published signal, if any.
    pub fn pointer_enter(&mut self, vendor_id: VendorId) -> Option<HoverSignal> {
        if self.state == HoverState::Highlighted(vendor_id.clone()) {
            return None;
        }
        self.state = HoverState::Highlighted(vendor_id.clone());
        Some(self.publish(HoverSignal::Open(vendor_id)))
    }

    /// Pointer left a card. Returns the published signal, if any.
    pub fn pointer_leave(&mut self) -> Option<HoverSignal> {
        if self.state == HoverState::Idle {
            return None;
        }
        self.state = HoverState::Idle;
        Some(self.publish(HoverSignal::CloseAll))
    }

    fn publish(&self, signal: HoverSignal) -> HoverSignal {
        if self.sender.send(signal.clone()).is_err() {
            debug!(token = %self.token, ?signal, "No map subscribed to hover signal");
        }
        signal
    }
}

/// Effect of one hover signal on the map popups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupTransition {
    Opened(VendorId),
    /// The previous popup closed and the new one opened in the same step
    Switched { closed: VendorId, opened: VendorId },
    Closed(VendorId),
    Unchanged,
}

/// Map-side popup controller. At most one popup is open at any time.
pub struct MarkerPopups {
    token: EngineToken,
    receiver: broadcast::Receiver<HoverSignal>,
    open: Option<VendorId>,
}

impl MarkerPopups {
    pub fn open_popup(&self) -> Option<&VendorId> {
        self.open.as_ref()
    }

    pub fn token(&self) -> EngineToken {
        self.token
    }

    pub fn apply(&mut self, signal: HoverSignal) -> PopupTransition {
        match (self.open.take(), signal) {
            (None, HoverSignal::Open(id)) => {
                self.open = Some(id.clone());
                PopupTransition::Opened(id)
            }
            (Some(current), HoverSignal::Open(id)) if current == id => {
                self.open = Some(current);
                PopupTransition::Unchanged
            }
            (Some(current), HoverSignal::Open(id)) => {
                self.open = Some(id.clone());
                PopupTransition::Switched {
                    closed: current,
                    opened: id,
                }
            }
            (Some(current), HoverSignal::CloseAll) => PopupTransition::Closed(current),
            (None, HoverSignal::CloseAll) => PopupTransition::Unchanged,
        }
    }

    /// Applies every queued signal in order
    pub fn drain(&mut self) -> Vec<PopupTransition> {
        let mut transitions = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(signal) => transitions.push(self.apply(signal)),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(token = %self.token, skipped, "Hover subscriber lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        transitions
    }

    /// Waits for the next signal. Returns `None` once the channel is gone.
    pub async fn next(&mut self) -> Option<PopupTransition> {
        loop {
            match self.receiver.recv().await {
                Ok(signal) => return Some(self.apply(signal)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(token = %self.token, skipped, "Hover subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
