use super::{Record, RecordId};

/// Hands out record ids that never repeat within the process.
///
/// Seeds from the wall clock in milliseconds. Each id is also pushed past the
/// largest id already present and past the last id it issued.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: RecordId,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_for<R: Record>(&mut self, rows: &[R]) -> RecordId {
        let floor = rows.iter().map(Record::id).max().unwrap_or(0);
        let candidate = now_millis()
            .max(floor.saturating_add(1))
            .max(self.last.saturating_add(1));
        self.last = candidate;
        candidate
    }
}

fn now_millis() -> RecordId {
    RecordId::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::item;
    use crate::records::prepend;
    use std::collections::HashSet;

    #[test]
    fn ids_exceed_existing_rows_even_from_the_future() {
        let far = now_millis() + 1_000_000;
        let rows = vec![item(far, "A", "")];
        let mut ids = IdSource::new();
        assert_eq!(ids.next_for(&rows), far + 1);
    }

    #[test]
    fn burst_of_creates_never_repeats() {
        let mut ids = IdSource::new();
        let mut rows = vec![item(1, "A", ""), item(2, "B", "")];
        let mut seen: HashSet<RecordId> = rows.iter().map(|row| row.id).collect();
        for _ in 0..500 {
            let id = ids.next_for(&rows);
            assert!(seen.insert(id), "id {id} issued twice");
            rows = prepend(&rows, item(id, "N", ""));
        }
    }

    #[test]
    fn deleted_ids_are_not_reissued() {
        let mut ids = IdSource::new();
        let first = ids.next_for::<crate::records::fixtures::Item>(&[]);
        let second = ids.next_for::<crate::records::fixtures::Item>(&[]);
        assert!(second > first);
    }
}
