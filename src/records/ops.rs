//! Pure collection operations. Each returns a new sequence (or a borrowed
//! view) and leaves its input untouched.

use super::{Record, RecordId};

/// Rows matching `query` on at least one searchable field, in source order.
///
/// Only the empty query matches everything; whitespace is part of the
/// substring like any other character. An empty `searchable` list also
/// matches everything.
pub fn filter<'a, R: Record>(rows: &'a [R], query: &str, searchable: &[&str]) -> Vec<&'a R> {
    if query.is_empty() || searchable.is_empty() {
        return rows.iter().collect();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| {
            searchable.iter().any(|name| {
                row.field(name)
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .collect()
}

pub fn contains_id<R: Record>(rows: &[R], id: RecordId) -> bool {
    rows.iter().any(|row| row.id() == id)
}

/// New sequence with `entity` placed in front of the existing rows.
pub fn prepend<R: Record>(rows: &[R], entity: R) -> Vec<R> {
    let mut next = Vec::with_capacity(rows.len() + 1);
    next.push(entity);
    next.extend(rows.iter().cloned());
    next
}

/// Swaps in `entity` at the position of the row sharing its id.
/// Rows without a match come back unchanged.
pub fn replace_by_id<R: Record>(rows: &[R], entity: R) -> Vec<R> {
    let id = entity.id();
    let mut replacement = Some(entity);
    rows.iter()
        .map(|row| {
            if row.id() == id {
                replacement.take().unwrap_or_else(|| row.clone())
            } else {
                row.clone()
            }
        })
        .collect()
}

/// Drops the row with the given id, if any.
pub fn remove_by_id<R: Record>(rows: &[R], id: RecordId) -> Vec<R> {
    rows.iter().filter(|row| row.id() != id).cloned().collect()
}
