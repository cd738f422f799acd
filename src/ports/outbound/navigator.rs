/// Scroll handling when a new location is pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Keep the viewport where it is
    Preserve,
    /// Jump to the top of the page
    Top,
}

/// One entry of the navigation history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Encoded query string, without the leading `?`
    pub query: String,
    pub scroll: ScrollBehavior,
}

impl NavigationEntry {
    pub fn new(query: impl Into<String>, scroll: ScrollBehavior) -> Self {
        Self {
            query: query.into(),
            scroll,
        }
    }
}

/// Navigator port for the navigable location (URL history)
///
/// Each committed filter change becomes a new entry so that back/forward
/// walks through filter history.
pub trait Navigator: Send + Sync {
    /// Pushes a new location
    fn push(&self, entry: NavigationEntry);

    /// The location currently shown
    fn current(&self) -> Option<NavigationEntry>;
}
