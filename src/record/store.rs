use serde::Serialize;

use super::PlayerRecord;

/// Ordered, append-only list of records owned by one session.
///
/// Order always matches the order of appends. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<PlayerRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PlayerRecord) {
        self.records.push(record);
    }

    /// Append several records, in iteration order.
    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = PlayerRecord>,
    {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a PlayerRecord;
    type IntoIter = std::slice::Iter<'a, PlayerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PlayerRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
