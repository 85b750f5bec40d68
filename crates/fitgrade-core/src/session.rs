//! Session identity and selection staleness guard.
//!
//! The user identity travels as an explicit [`Session`] value into every fetch.
//! [`SelectionGuard`] makes sure a late response for a date or tab the user has
//! already left is dropped instead of overwriting the newer selection.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::debug;

use crate::error::{CoreError, Result};

/// Who is asking. A session without a user id cannot fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<String>,
    /// Passed through as a bearer token when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The user id, or [`CoreError::MissingIdentity`] if unset or blank.
    pub fn require_user(&self) -> Result<&str> {
        match self.user_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(CoreError::MissingIdentity),
        }
    }
}

/// Identifies one selection (a date or tab choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken(u64);

/// Outcome of offering a result to the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
}

struct GuardState<T> {
    generation: u64,
    value: Option<T>,
}

/// Holds the value for the current selection and rejects results for older ones.
pub struct SelectionGuard<T> {
    state: Mutex<GuardState<T>>,
}

impl<T> Default for SelectionGuard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionGuard<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GuardState {
                generation: 0,
                value: None,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GuardState<T>> {
        // Fields are only written by single assignments; a poisoned state is still valid.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a new selection. Any token issued before this one becomes stale
    /// and the previously applied value is cleared.
    pub fn begin(&self) -> SelectionToken {
        let mut state = self.lock();
        state.generation += 1;
        state.value = None;
        SelectionToken(state.generation)
    }

    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.lock().generation == token.0
    }

    /// Store `value` if `token` still names the current selection.
    pub fn apply(&self, token: SelectionToken, value: T) -> ApplyOutcome {
        let mut state = self.lock();
        if state.generation != token.0 {
            debug!(
                token = token.0,
                current = state.generation,
                "discarding result for stale selection"
            );
            return ApplyOutcome::Stale;
        }
        state.value = Some(value);
        ApplyOutcome::Applied
    }

    /// Clone of the value for the current selection, if one has been applied.
    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock().value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_user_rejects_missing_and_blank() {
        assert!(matches!(
            Session::default().require_user(),
            Err(CoreError::MissingIdentity)
        ));
        let blank = Session {
            user_id: Some("   ".to_string()),
            access_token: None,
        };
        assert!(blank.require_user().is_err());
        assert_eq!(Session::new("u-1").require_user().unwrap(), "u-1");
    }

    #[test]
    fn late_response_for_previous_selection_is_dropped() {
        let guard: SelectionGuard<&str> = SelectionGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        assert_eq!(guard.apply(second, "aug-12"), ApplyOutcome::Applied);
        assert_eq!(guard.apply(first, "aug-11"), ApplyOutcome::Stale);
        assert_eq!(guard.current(), Some("aug-12"));
    }

    #[test]
    fn begin_clears_previous_value() {
        let guard = SelectionGuard::new();
        let token = guard.begin();
        guard.apply(token, 1);
        assert_eq!(guard.current(), Some(1));

        let next = guard.begin();
        assert_eq!(guard.current(), None);
        assert!(guard.is_current(next));
        assert!(!guard.is_current(token));
    }

    #[test]
    fn guard_is_shareable_across_threads() {
        let guard = std::sync::Arc::new(SelectionGuard::new());
        let token = guard.begin();
        let worker = {
            let guard = guard.clone();
            std::thread::spawn(move || guard.apply(token, 42))
        };
        assert_eq!(worker.join().unwrap(), ApplyOutcome::Applied);
        assert_eq!(guard.current(), Some(42));
    }
}
