//! Ordered, watchable in-memory store for form definitions

use log::debug;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::{Form, FormName};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// An operation the store intentionally forbids
    #[error("unsupported store operation: {message}")]
    UnsupportedOperation {
        /// Why the operation is forbidden
        message: String,
    },

    /// A watcher rejected a save or delete
    #[error("watcher failed: {message}")]
    Watcher {
        /// Watcher failure message
        message: String,
    },
}

impl StoreError {
    /// Create an unsupported-operation error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Create a watcher error
    pub fn watcher(message: impl Into<String>) -> Self {
        Self::Watcher {
            message: message.into(),
        }
    }
}

/// Token deregistering one watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatcherId(u64);

type SaveWatcher = Box<dyn FnMut(&Form) -> StoreResult<()> + Send>;
type DeleteWatcher = Box<dyn FnMut(&FormName) -> StoreResult<()> + Send>;

/// Total-ordered associative store keyed by form name
///
/// Entries order by the natural order of [`FormName`]. Writes take `&mut
/// self`; the store carries no internal locking, so concurrent callers must
/// serialize access externally. Save and delete watchers run synchronously,
/// in registration order, inside the triggering call; the first failing
/// watcher aborts the remainder and surfaces to the caller.
#[derive(Default)]
pub struct OrderedFormStore {
    forms: BTreeMap<FormName, Form>,
    save_watchers: Vec<(WatcherId, SaveWatcher)>,
    delete_watchers: Vec<(WatcherId, DeleteWatcher)>,
    next_watcher_id: u64,
}

impl OrderedFormStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> WatcherId {
        let id = WatcherId(self.next_watcher_id);
        self.next_watcher_id += 1;
        id
    }

    /// Look up a form by name
    pub fn load(&self, name: &FormName) -> Option<&Form> {
        self.forms.get(name)
    }

    /// Whether a form with `name` exists
    pub fn contains(&self, name: &FormName) -> bool {
        self.forms.contains_key(name)
    }

    /// Number of stored forms
    pub fn count(&self) -> usize {
        self.forms.len()
    }

    /// Whether the store holds no forms
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Insert or replace a form under its own name
    ///
    /// Forms must carry their name; there is no generated-id path, and a
    /// form with an empty name fails loudly instead of being assigned one.
    /// Save watchers run with the saved form before the call returns.
    pub fn save(&mut self, form: Form) -> StoreResult<Form> {
        if form.name().is_empty() {
            return Err(StoreError::unsupported(
                "forms must carry their own name; id generation is not supported",
            ));
        }

        debug!("saving form '{}'", form.name());
        self.forms.insert(form.name().clone(), form.clone());
        for (_, watcher) in &mut self.save_watchers {
            watcher(&form)?;
        }
        Ok(form)
    }

    /// Remove a form by name
    ///
    /// A no-op when no entry exists; delete watchers run with the deleted
    /// name only when an entry was actually removed.
    pub fn delete(&mut self, name: &FormName) -> StoreResult<()> {
        if self.forms.remove(name).is_none() {
            return Ok(());
        }

        debug!("deleted form '{name}'");
        for (_, watcher) in &mut self.delete_watchers {
            watcher(name)?;
        }
        Ok(())
    }

    /// Register a callback invoked on every future save
    pub fn add_save_watcher<F>(&mut self, watcher: F) -> WatcherId
    where
        F: FnMut(&Form) -> StoreResult<()> + Send + 'static,
    {
        let id = self.next_id();
        self.save_watchers.push((id, Box::new(watcher)));
        id
    }

    /// Register a callback invoked on every future delete
    pub fn add_delete_watcher<F>(&mut self, watcher: F) -> WatcherId
    where
        F: FnMut(&FormName) -> StoreResult<()> + Send + 'static,
    {
        let id = self.next_id();
        self.delete_watchers.push((id, Box::new(watcher)));
        id
    }

    /// Deregister a save watcher; repeated removal is a no-op
    pub fn remove_save_watcher(&mut self, id: WatcherId) {
        self.save_watchers.retain(|(watcher_id, _)| *watcher_id != id);
    }

    /// Deregister a delete watcher; repeated removal is a no-op
    pub fn remove_delete_watcher(&mut self, id: WatcherId) {
        self.delete_watchers
            .retain(|(watcher_id, _)| *watcher_id != id);
    }

    /// Up to `count` form names starting at `offset`, in ascending order
    pub fn ids(&self, offset: usize, count: usize) -> Vec<FormName> {
        self.forms.keys().skip(offset).take(count).cloned().collect()
    }

    /// Up to `count` forms starting at `offset`, ordered by name
    pub fn values(&self, offset: usize, count: usize) -> Vec<Form> {
        self.forms
            .values()
            .skip(offset)
            .take(count)
            .cloned()
            .collect()
    }

    /// All forms named within `[from, to]` inclusive, in ascending order
    ///
    /// An inverted interval (`from > to`) contains no names and yields an
    /// empty list.
    pub fn between(&self, from: &FormName, to: &FormName) -> Vec<Form> {
        if from > to {
            return Vec::new();
        }
        self.forms
            .range(from.clone()..=to.clone())
            .map(|(_, form)| form.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: &str) -> Form {
        Form::empty(name)
    }

    #[test]
    fn round_trip() {
        let mut store = OrderedFormStore::new();
        let saved = store.save(form("contact")).unwrap();
        assert_eq!(saved, form("contact"));
        assert_eq!(store.load(&"contact".into()), Some(&form("contact")));

        store.delete(&"contact".into()).unwrap();
        assert_eq!(store.load(&"contact".into()), None);
    }

    #[test]
    fn save_replaces_existing_entry() {
        let mut store = OrderedFormStore::new();
        store.save(form("f")).unwrap();
        let replacement = form("f").with_field(crate::model::FormField::unset("a"));
        store.save(replacement.clone()).unwrap();

        assert_eq!(store.count(), 1);
        assert_eq!(store.load(&"f".into()), Some(&replacement));
    }

    #[test]
    fn unnamed_form_is_rejected_loudly() {
        let mut store = OrderedFormStore::new();
        let err = store.save(form("")).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedOperation { .. }));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn ids_come_back_sorted_without_duplicates() {
        let mut store = OrderedFormStore::new();
        for name in ["delta", "alpha", "charlie", "bravo", "alpha"] {
            store.save(form(name)).unwrap();
        }

        let ids = store.ids(0, store.count());
        assert_eq!(
            ids,
            vec![
                FormName::from("alpha"),
                FormName::from("bravo"),
                FormName::from("charlie"),
                FormName::from("delta"),
            ]
        );
    }

    #[test]
    fn paging_clamps_to_store_size() {
        let mut store = OrderedFormStore::new();
        for name in ["a", "b", "c"] {
            store.save(form(name)).unwrap();
        }

        assert_eq!(store.ids(1, 10), vec![FormName::from("b"), FormName::from("c")]);
        assert_eq!(store.ids(5, 2), Vec::<FormName>::new());
        assert_eq!(store.values(2, 1), vec![form("c")]);
    }

    #[test]
    fn between_is_inclusive_and_ordered() {
        let mut store = OrderedFormStore::new();
        for name in ["a", "b", "c", "d"] {
            store.save(form(name)).unwrap();
        }

        let forms = store.between(&"b".into(), &"c".into());
        assert_eq!(forms, vec![form("b"), form("c")]);
    }

    #[test]
    fn between_with_inverted_bounds_is_empty() {
        let mut store = OrderedFormStore::new();
        for name in ["a", "m", "z"] {
            store.save(form(name)).unwrap();
        }

        assert_eq!(store.between(&"z".into(), &"a".into()), Vec::<Form>::new());
        // Degenerate single-name interval still works.
        assert_eq!(store.between(&"m".into(), &"m".into()), vec![form("m")]);
    }

    #[test]
    fn watcher_ids_are_distinct_across_kinds() {
        let mut store = OrderedFormStore::new();
        let a = store.add_save_watcher(|_| Ok(()));
        let b = store.add_save_watcher(|_| Ok(()));
        let c = store.add_delete_watcher(|_| Ok(()));

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);

        // Removing one id leaves the others registered.
        store.remove_save_watcher(a);
        store.save(form("f")).unwrap();
    }

    #[test]
    fn delete_of_absent_name_is_a_noop() {
        let mut store = OrderedFormStore::new();
        assert_eq!(store.delete(&"ghost".into()), Ok(()));
    }
}
