//! Screen size resource.
//!
//! Stores the last viewport dimensions reported through
//! [`StateManager::resize`](crate::state::manager::StateManager::resize).

/// Current screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
