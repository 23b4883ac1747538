//! The set of files an invocation reconciles
//!
//! A [`FileSet`] maps relative paths to [`Entry`] values and remembers the
//! order in which they were declared. Inserting a path that is already present
//! replaces its entry and keeps its original position.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::engine::{Erased, Reconcile};
use crate::error::Result;
use crate::strategy::text::TextCallback;
use crate::strategy::{FileContext, Strategy, TextStrategy};

/// How one file is reconciled: either a bare text callback or a full strategy
#[derive(Clone)]
pub struct Entry(EntryKind);

#[derive(Clone)]
enum EntryKind {
    Callback(TextCallback),
    Strategy(Arc<dyn Reconcile>),
}

impl Entry {
    /// A text update callback. Becomes a text strategy when the set is run.
    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(Option<String>, &FileContext) -> Result<Option<String>> + Send + Sync + 'static,
    {
        Entry(EntryKind::Callback(Arc::new(callback)))
    }

    /// Any strategy, used as-is.
    pub fn strategy<S: Strategy>(strategy: S) -> Self {
        Entry(EntryKind::Strategy(Arc::new(Erased::new(strategy))))
    }

    pub fn is_callback(&self) -> bool {
        matches!(self.0, EntryKind::Callback(_))
    }

    fn normalize(&self) -> Arc<dyn Reconcile> {
        match &self.0 {
            EntryKind::Callback(callback) => Arc::new(Erased::new(TextStrategy::new(Arc::clone(
                callback,
            )))),
            EntryKind::Strategy(strategy) => Arc::clone(strategy),
        }
    }
}

impl<S: Strategy> From<S> for Entry {
    fn from(strategy: S) -> Self {
        Entry::strategy(strategy)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            EntryKind::Callback(_) => f.write_str("Entry::Callback"),
            EntryKind::Strategy(_) => f.write_str("Entry::Strategy"),
        }
    }
}

/// Ordered mapping of relative path to [`Entry`]
#[derive(Clone, Default)]
pub struct FileSet {
    entries: IndexMap<String, Entry>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a file. A repeated path replaces the earlier entry in place.
    pub fn insert(&mut self, file: impl Into<String>, entry: impl Into<Entry>) -> &mut Self {
        self.entries.insert(file.into(), entry.into());
        self
    }

    /// Declare a file reconciled by a text callback.
    pub fn callback<F>(&mut self, file: impl Into<String>, callback: F) -> &mut Self
    where
        F: Fn(Option<String>, &FileContext) -> Result<Option<String>> + Send + Sync + 'static,
    {
        self.insert(file, Entry::callback(callback))
    }

    /// Builder-style [`FileSet::insert`].
    pub fn with(mut self, file: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.insert(file, entry);
        self
    }

    pub fn get(&self, file: &str) -> Option<&Entry> {
        self.entries.get(file)
    }

    /// Declared paths, in order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry as a strategy, callbacks wrapped as text strategies
    pub(crate) fn normalized(&self) -> Vec<(String, Arc<dyn Reconcile>)> {
        self.entries
            .iter()
            .map(|(file, entry)| (file.clone(), entry.normalize()))
            .collect()
    }
}

impl<K, E> FromIterator<(K, E)> for FileSet
where
    K: Into<String>,
    E: Into<Entry>,
{
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut files = FileSet::new();
        for (file, entry) in iter {
            files.insert(file, entry);
        }
        files
    }
}

impl fmt::Debug for FileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{json, text};

    #[test]
    fn test_insert_keeps_declaration_order() {
        let mut files = FileSet::new();
        files.callback("b.txt", |actual, _| Ok(actual));
        files.insert("a.json", json(|actual, _| Ok(actual)));
        files.callback("c/d.txt", |actual, _| Ok(actual));

        assert_eq!(files.paths().collect::<Vec<_>>(), vec!["b.txt", "a.json", "c/d.txt"]);
    }

    #[test]
    fn test_duplicate_key_last_writer_wins_in_place() {
        let mut files = FileSet::new();
        files.callback("a.txt", |actual, _| Ok(actual));
        files.callback("b.txt", |actual, _| Ok(actual));
        files.insert("a.txt", text(|_, _| Ok(None)));

        assert_eq!(files.len(), 2);
        assert_eq!(files.paths().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
        assert!(!files.get("a.txt").unwrap().is_callback());
    }

    #[test]
    fn test_many_inserts_with_repeats() {
        let mut files = FileSet::new();
        for round in 0..3 {
            for i in 0..1000 {
                files.insert(format!("gen/{}.txt", i), text(move |_, _| Ok(Some(round.to_string()))));
            }
        }

        assert_eq!(files.len(), 1000);
        assert_eq!(files.paths().next(), Some("gen/0.txt"));
        assert_eq!(files.paths().last(), Some("gen/999.txt"));
        assert!(files.get("gen/500.txt").is_some());
        assert!(files.get("gen/1000.txt").is_none());
    }

    #[test]
    fn test_callback_entries_normalize_to_strategies() {
        let files = FileSet::new()
            .with("x.txt", Entry::callback(|_, _| Ok(None)))
            .with("y.txt", text(|_, _| Ok(None)));

        assert!(files.get("x.txt").unwrap().is_callback());
        assert_eq!(files.normalized().len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let files: FileSet = vec![
            ("one.txt", text(|_, _| Ok(Some("1".to_string())))),
            ("two.txt", text(|_, _| Ok(Some("2".to_string())))),
        ]
        .into_iter()
        .collect();

        assert_eq!(files.len(), 2);
        assert!(!files.is_empty());
    }
}
