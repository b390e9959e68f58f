//! Optimistic local changes with rollback.
//!
//! List screens flip a flag, star a row, or remove it locally before the
//! remote call finishes. [`Optimistic`] captures a snapshot first, so a failed
//! call restores exactly what was there.

use log::warn;

use crate::error::OptimisticError;

/// A value that accepts tentative changes.
///
/// # Example
///
/// ```
/// use lectern_lib::optimistic::Optimistic;
///
/// #[derive(Debug)]
/// struct Offline;
/// impl std::fmt::Display for Offline {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("offline")
///     }
/// }
/// impl std::error::Error for Offline {}
///
/// let mut starred = Optimistic::new(vec![1, 2]);
/// let result = starred.apply(|ids| ids.push(3), |_| Err::<(), _>(Offline));
/// assert!(result.is_err());
/// assert_eq!(starred.get(), &vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Optimistic<T> {
    value: T,
}

impl<T: Clone> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Current value, including any unsettled change.
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Replace the value outright, e.g. after a re-fetch.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Apply `change` now and keep it only if `remote` succeeds.
    ///
    /// `remote` sees the tentative value.
    pub fn apply<R, E, F, C>(&mut self, change: F, remote: C) -> Result<R, OptimisticError<E>>
    where
        F: FnOnce(&mut T),
        C: FnOnce(&T) -> Result<R, E>,
        E: std::error::Error + 'static,
    {
        let pending = self.begin(change);
        let result = remote(pending.value());
        pending.settle(result)
    }

    /// Apply `change` now and settle later.
    ///
    /// Use this when the remote call runs elsewhere (another task, a queued
    /// request). Dropping the returned [`Pending`] keeps the change.
    pub fn begin<F>(&mut self, change: F) -> Pending<'_, T>
    where
        F: FnOnce(&mut T),
    {
        let snapshot = self.value.clone();
        change(&mut self.value);
        Pending {
            target: &mut self.value,
            snapshot,
        }
    }
}

/// A tentative change waiting for the remote outcome.
#[must_use = "settle, commit or roll back the pending change"]
pub struct Pending<'a, T> {
    target: &'a mut T,
    snapshot: T,
}

impl<T> Pending<'_, T> {
    /// The tentative value.
    pub fn value(&self) -> &T {
        self.target
    }

    /// The value before the change.
    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// Keep the change.
    pub fn commit(self) {}

    /// Restore the snapshot.
    pub fn rollback(self) {
        *self.target = self.snapshot;
    }

    /// Commit on `Ok`, roll back on `Err`.
    pub fn settle<R, E>(self, result: Result<R, E>) -> Result<R, OptimisticError<E>>
    where
        E: std::error::Error + 'static,
    {
        match result {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("remote call failed, rolling back local change: {}", e);
                self.rollback();
                Err(OptimisticError::new(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[derive(Debug, thiserror::Error)]
    #[error("server said no")]
    struct Rejected;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(1, None).with("is_active", true),
            Category::new(2, None).with("is_active", true),
        ]
    }

    fn deactivate(rows: &mut [Category], id: i64) {
        for row in rows.iter_mut().filter(|r| r.id() == id) {
            *row = row.clone().with("is_active", false);
        }
    }

    #[test]
    fn test_success_keeps_change() {
        let mut rows = Optimistic::new(categories());
        let result = rows.apply(
            |rows| deactivate(rows, 2),
            |rows| Ok::<_, Rejected>(rows.iter().filter(|r| !r.is_active()).count()),
        );
        assert_eq!(result.unwrap(), 1);
        assert!(!rows.get()[1].is_active());
    }

    #[test]
    fn test_failure_restores_snapshot() {
        let mut rows = Optimistic::new(categories());
        let result = rows.apply(|rows| rows.retain(|r| r.id() != 1), |_| Err::<(), _>(Rejected));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "change rolled back: server said no");
        assert_eq!(rows.get(), &categories());
    }

    #[test]
    fn test_two_phase() {
        let mut rows = Optimistic::new(categories());
        {
            let pending = rows.begin(|rows| deactivate(rows, 1));
            assert!(pending.snapshot()[0].is_active());
            assert!(!pending.value()[0].is_active());
            pending.rollback();
        }
        assert!(rows.get()[0].is_active());

        rows.begin(|rows| deactivate(rows, 1)).commit();
        assert!(!rows.get()[0].is_active());
    }
}
