//! In-memory record model shared by every admin screen.
//!
//! A record is any shape with a numeric identity plus a handful of named text
//! fields. Column and field descriptors are plain data, so the same table and
//! form machinery can drive products, contacts, leads and the rest.

mod descriptor;
mod ids;
mod macros;
mod ops;

pub use descriptor::{ColumnDescriptor, FieldDescriptor, FieldKind};
pub use ids::IdSource;
pub(crate) use macros::record;
pub use ops::{contains_id, filter, prepend, remove_by_id, replace_by_id};

use log::warn;

/// Identity key of a record. Always positive once assigned.
pub type RecordId = u64;

/// A row that can flow through the generic table/form components.
pub trait Record: Clone {
    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Returns the value of a named field, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<&str>;

    /// Writes a named field. Returns `false` when the name is unknown.
    fn set_field(&mut self, name: &str, value: String) -> bool;
}

/// Write access to a collection, limited to wholesale replacement.
///
/// Components read through `rows` and request changes by handing back a
/// complete new sequence; they never patch rows in place.
pub trait CollectionStore<R> {
    fn rows(&self) -> &[R];

    fn replace(&mut self, next: Vec<R>);
}

/// Ordered, exclusively owned sequence of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<R> {
    rows: Vec<R>,
}

impl<R: Record> Collection<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest id currently held, or 0 for an empty collection.
    pub fn max_id(&self) -> RecordId {
        self.rows.iter().map(Record::id).max().unwrap_or(0)
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> CollectionStore<R> for Collection<R> {
    fn rows(&self) -> &[R] {
        &self.rows
    }

    fn replace(&mut self, next: Vec<R>) {
        if has_duplicate_ids(&next) {
            warn!("Rejected collection update containing duplicate ids");
            return;
        }
        self.rows = next;
    }
}

fn has_duplicate_ids<R: Record>(rows: &[R]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(rows.len());
    rows.iter().any(|row| !seen.insert(row.id()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::record;

    record! {
        /// Minimal record used across component tests.
        pub struct Item {
            nome,
            status,
        }
    }

    pub fn item(id: u64, nome: &str, status: &str) -> Item {
        Item {
            id,
            nome: nome.to_string(),
            status: status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{item, Item};
    use super::*;

    #[test]
    fn record_macro_exposes_named_fields() {
        let mut row = item(3, "A", "Ativo");
        assert_eq!(row.field("nome"), Some("A"));
        assert_eq!(row.field("missing"), None);
        assert!(row.set_field("status", "Inativo".into()));
        assert!(!row.set_field("missing", "x".into()));
        assert_eq!(row.status, "Inativo");
        row.set_id(9);
        assert_eq!(row.id(), 9);
    }

    #[test]
    fn replace_rejects_duplicate_ids() {
        let mut collection = Collection::new(vec![item(1, "A", "Ativo")]);
        collection.replace(vec![item(2, "B", ""), item(2, "C", "")]);
        assert_eq!(collection.rows(), &[item(1, "A", "Ativo")]);
    }

    #[test]
    fn max_id_of_empty_collection_is_zero() {
        let collection: Collection<Item> = Collection::default();
        assert_eq!(collection.max_id(), 0);
        assert!(collection.is_empty());
    }
}
