//! Sidebar collapse state machine.
//!
//! DESIGN
//! ======
//! The sidebar's state lives in its CSS classes: `collapsed` marks the
//! terminal collapsed state, `collapsing`/`expanding` mark a transition in
//! progress. A transition's target is treated as the effective state, so a
//! toggle mid-transition reverses it.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

pub const COLLAPSED_CLASS: &str = "collapsed";
pub const COLLAPSING_CLASS: &str = "collapsing";
pub const EXPANDING_CLASS: &str = "expanding";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
    Expanding,
    Collapsing,
}

impl SidebarState {
    /// Decode from the presence of each marker class. Transient markers win.
    #[must_use]
    pub fn from_markers(collapsed: bool, collapsing: bool, expanding: bool) -> Self {
        if collapsing {
            Self::Collapsing
        } else if expanding {
            Self::Expanding
        } else if collapsed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    /// Whether the sidebar is collapsed or heading there.
    #[must_use]
    pub fn target_collapsed(self) -> bool {
        matches!(self, Self::Collapsed | Self::Collapsing)
    }

    /// Transient state entered by a toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.target_collapsed() { Self::Expanding } else { Self::Collapsing }
    }

    /// Terminal state reached when the transition delay elapses.
    #[must_use]
    pub fn finalized(self) -> Self {
        match self {
            Self::Collapsing => Self::Collapsed,
            Self::Expanding => Self::Expanded,
            settled => settled,
        }
    }

    /// Marker class that identifies this transient state.
    #[must_use]
    pub fn transient_class(self) -> Option<&'static str> {
        match self {
            Self::Collapsing => Some(COLLAPSING_CLASS),
            Self::Expanding => Some(EXPANDING_CLASS),
            Self::Expanded | Self::Collapsed => None,
        }
    }
}
