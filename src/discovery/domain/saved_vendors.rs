use super::vendor::VendorId;
use std::collections::HashSet;

/// Vendor ids saved by the current viewer.
///
/// Owned by the viewer's session; the engine holds a local copy that the save
/// toggle mutates optimistically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedVendorSet {
    ids: HashSet<VendorId>,
}

impl SavedVendorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &VendorId) -> bool {
        self.ids.contains(id)
    }

    /// Sets the saved state of `id`, returning the previous state
    pub fn set(&mut self, id: &VendorId, saved: bool) -> bool {
        let was_saved = self.ids.contains(id);
        if saved {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
        was_saved
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<VendorId> for SavedVendorSet {
    fn from_iter<I: IntoIterator<Item = VendorId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VendorId {
        VendorId::new(s).unwrap()
    }

    #[test]
    fn test_set_returns_previous_state() {
        let mut saved = SavedVendorSet::new();
        assert!(!saved.set(&id("a"), true));
        assert!(saved.contains(&id("a")));
        assert!(saved.set(&id("a"), false));
        assert!(!saved.contains(&id("a")));
    }

    #[test]
    fn test_from_iterator_deduplicates() {
        let saved: SavedVendorSet = vec![id("a"), id("b"), id("a")].into_iter().collect();
        assert_eq!(saved.len(), 2);
        assert!(!saved.is_empty());
    }
}
