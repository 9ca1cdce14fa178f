//! Insertion-ordered row storage with an id index and an owner index.

use std::collections::HashMap;
use std::hash::Hash;

use siwes_shared::UserId;

/// Rows of one entity type.
///
/// Rows are never removed, so positions recorded in the indexes stay valid
/// for the lifetime of the table.
#[derive(Debug, Clone)]
pub(crate) struct Table<K, T> {
    rows: Vec<T>,
    by_id: HashMap<K, usize>,
    by_owner: HashMap<UserId, Vec<usize>>,
}

impl<K, T> Table<K, T>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            rows: Vec::new(),
            by_id: HashMap::new(),
            by_owner: HashMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn contains(&self, id: &K) -> bool {
        self.by_id.contains_key(id)
    }

    pub(crate) fn get(&self, id: &K) -> Option<&T> {
        self.by_id.get(id).map(|&pos| &self.rows[pos])
    }

    pub(crate) fn get_mut(&mut self, id: &K) -> Option<&mut T> {
        match self.by_id.get(id) {
            Some(&pos) => Some(&mut self.rows[pos]),
            None => None,
        }
    }

    /// Append a row.  The caller has already checked that `id` is free.
    pub(crate) fn insert(&mut self, id: K, owner: UserId, row: T) {
        let pos = self.rows.len();
        self.rows.push(row);
        self.by_id.insert(id, pos);
        self.by_owner.entry(owner).or_default().push(pos);
    }

    /// Rows owned by `owner`, in insertion order.
    pub(crate) fn owned_by<'a>(&'a self, owner: &UserId) -> impl Iterator<Item = &'a T> + 'a {
        self.by_owner
            .get(owner)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&pos| &self.rows[pos])
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }
}
