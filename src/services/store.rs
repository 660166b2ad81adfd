//! In-memory entry store
//!
//! An ordered list of entries. Entries are appended with a fresh id and removed
//! by id; nothing reorders them.

use crate::models::{EntryId, ExpenseEntry, NewEntry};

/// Ordered, in-memory collection of expense entries
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<ExpenseEntry>,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its new id
    ///
    /// Identical entries are kept as separate rows.
    pub fn add(&mut self, new: NewEntry) -> EntryId {
        let entry = ExpenseEntry::from_new(new);
        let id = entry.id;
        tracing::info!(id = %id, item = %entry.item, amount = %entry.amount, "entry added");
        self.entries.push(entry);
        id
    }

    /// Remove the entry with `id`
    ///
    /// Unknown ids are ignored and yield `None`.
    pub fn remove(&mut self, id: EntryId) -> Option<ExpenseEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);
        tracing::info!(id = %id, item = %removed.item, "entry removed");
        Some(removed)
    }

    /// All entries in insertion order
    pub fn list(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&ExpenseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
