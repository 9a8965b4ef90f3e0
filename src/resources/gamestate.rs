//! Pending state transition request.
//!
//! States and entities cannot reach the
//! [`StateManager`](crate::state::manager::StateManager) while it is stepping
//! them. They record the transition they want in [`NextGameState`] instead;
//! the manager applies it right after the loaded state's step returns.

/// Representation of a requested next state.
///
/// `Pending(None)` asks for the idle state (nothing loaded).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(Option<String>),
}

/// Intent to change to a new state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending. A later
    /// request in the same step replaces an earlier one.
    pub fn set(&mut self, next: Option<&str>) {
        self.next = NextGameStates::Pending(next.map(str::to_string));
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextGameStates::Pending(_))
    }

    /// Take the pending request, leaving [`NextGameStates::Unchanged`].
    pub fn take(&mut self) -> Option<Option<String>> {
        match std::mem::take(&mut self.next) {
            NextGameStates::Pending(next) => Some(next),
            NextGameStates::Unchanged => None,
        }
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_request() {
        let mut next = NextGameState::new();
        assert_eq!(next.take(), None);

        next.set(Some("menu"));
        assert!(next.is_pending());
        assert_eq!(next.take(), Some(Some("menu".to_string())));
        assert_eq!(next.get(), &NextGameStates::Unchanged);
    }

    #[test]
    fn test_idle_request_is_distinct_from_unchanged() {
        let mut next = NextGameState::new();
        next.set(None);
        assert_eq!(next.get(), &NextGameStates::Pending(None));
        assert_eq!(next.take(), Some(None));
    }

    #[test]
    fn test_later_request_wins() {
        let mut next = NextGameState::new();
        next.set(Some("game"));
        next.set(Some("editor"));
        assert_eq!(next.take(), Some(Some("editor".to_string())));
        next.set(Some("game"));
        next.reset();
        assert!(!next.is_pending());
    }
}
