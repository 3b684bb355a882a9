// src/application/saved_list.rs
use crate::domain::{DomainError, Drug};

/// Persistent storage for the user's personal drug list.
///
/// Implementations keep the in-memory view and the persisted blob
/// consistent after every call: a mutation either lands in both or in
/// neither.
pub trait DrugStore {
    /// The current list. Unreadable or unparseable storage degrades to an
    /// empty list instead of failing.
    fn load(&mut self) -> Vec<Drug>;

    /// Append `drug` iff no entry shares its id, then re-persist. Returns
    /// `true` when the record was added, `false` when it was already there.
    fn save(&mut self, drug: Drug) -> Result<bool, DomainError>;

    /// Remove the entry with this id, if any, then re-persist. Returns the
    /// removed record; `None` means nothing matched and nothing was
    /// written.
    fn remove(&mut self, id: i64) -> Result<Option<Drug>, DomainError>;
}

pub struct SavedList<S: DrugStore> {
    store: S,
}

impl<S: DrugStore> SavedList<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn all(&mut self) -> Vec<Drug> {
        self.store.load()
    }

    /// The list, optionally narrowed by a case-insensitive name filter.
    pub fn filtered(&mut self, name_filter: Option<&str>) -> Vec<Drug> {
        let drugs = self.store.load();
        match name_filter {
            None => drugs,
            Some(needle) => drugs.into_iter().filter(|d| d.name_contains(needle)).collect(),
        }
    }

    pub fn add(&mut self, drug: Drug) -> Result<bool, DomainError> {
        self.store.save(drug)
    }

    pub fn remove(&mut self, id: i64) -> Result<Option<Drug>, DomainError> {
        self.store.remove(id)
    }
}
