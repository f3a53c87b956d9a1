use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::DisplayRecord;

/// What a merge did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    Updated,
    /// An equal record was already stored; nothing was written
    Unchanged,
}

impl MergeOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, MergeOutcome::Unchanged)
    }
}

#[derive(Debug, Default)]
struct Entries {
    records: HashMap<String, DisplayRecord>,
    order: Vec<String>,
    revision: u64,
}

/// Owned copy of the store contents at one revision
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub revision: u64,
    pub entries: Vec<(String, DisplayRecord)>,
}

impl StoreSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, city: &str) -> Option<&DisplayRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, record)| record)
    }
}

/// City name to latest record. Clones share the same entries, which keep
/// their first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct DisplayStore {
    inner: Arc<RwLock<Entries>>,
}

impl DisplayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts `record` under `city` unless an equal record is already there.
    /// Other entries are never touched.
    pub async fn merge(&self, city: &str, record: DisplayRecord) -> MergeOutcome {
        let mut guard = self.inner.write().await;
        let entries = &mut *guard;

        let outcome = match entries.records.get(city) {
            Some(existing) if *existing == record => return MergeOutcome::Unchanged,
            Some(_) => MergeOutcome::Updated,
            None => {
                entries.order.push(city.to_string());
                MergeOutcome::Inserted
            }
        };

        entries.records.insert(city.to_string(), record);
        entries.revision += 1;
        outcome
    }

    pub async fn read(&self) -> StoreSnapshot {
        let entries = self.inner.read().await;
        StoreSnapshot {
            revision: entries.revision,
            entries: entries
                .order
                .iter()
                .filter_map(|city| {
                    entries
                        .records
                        .get(city)
                        .map(|record| (city.clone(), record.clone()))
                })
                .collect(),
        }
    }

    pub async fn get(&self, city: &str) -> Option<DisplayRecord> {
        self.inner.read().await.records.get(city).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }

    /// Bumped on every write that changed the mapping
    pub async fn revision(&self) -> u64 {
        self.inner.read().await.revision
    }
}
