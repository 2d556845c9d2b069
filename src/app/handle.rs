//! Shared, serialized access to a session.
//!
//! Hosts that dispatch user actions from more than one thread wrap the session
//! in a [`SessionHandle`]. The lock is held for the whole transition, so two
//! events never interleave mid-update.

use super::handler::{handle_event, Event};
use super::{Action, SessionState};
use crate::domain::{ConverterError, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to one mutex-guarded [`SessionState`].
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<Mutex<SessionState>>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Applies one event atomically.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::SessionPoisoned`] if a previous holder of the
    /// lock panicked, or any non-validation error from [`handle_event`].
    pub fn dispatch(&self, event: &Event) -> Result<(bool, Vec<Action>)> {
        let mut state = self.lock()?;
        handle_event(&mut state, event)
    }

    /// Returns a copy of the current state.
    ///
    /// # Errors
    ///
    /// Returns [`ConverterError::SessionPoisoned`] if the lock is poisoned.
    pub fn snapshot(&self) -> Result<SessionState> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionState>> {
        self.inner.lock().map_err(|_| ConverterError::SessionPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use std::thread;

    #[test]
    fn concurrent_conversions_are_all_recorded() {
        let handle = SessionHandle::new(SessionState::new());
        handle.dispatch(&Event::SelectCategory(Category::Time)).unwrap();
        handle.dispatch(&Event::SetInputValue("2".to_string())).unwrap();

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let handle = handle.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        handle.dispatch(&Event::Convert).unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let state = handle.snapshot().unwrap();
        assert_eq!(state.history().len(), 200);
        assert!(state
            .history_lines()
            .iter()
            .all(|line| line == "2 Second = 0.0333 Minute"));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let handle = SessionHandle::default();
        let poisoner = handle.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the session");
        })
        .join();

        assert!(matches!(
            handle.dispatch(&Event::Convert),
            Err(ConverterError::SessionPoisoned)
        ));
    }
}
