use crate::search::types::Tattoo;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

struct StoreState {
    records: Arc<Vec<Tattoo>>,
    positions: HashMap<String, usize>,
    revision: u64,
}

/// Ordered, id-indexed collection of canonical tattoo records.
///
/// Readers get a shared snapshot (`Arc<Vec<Tattoo>>`) and run the engine without
/// holding the lock; writers copy-on-write.
pub struct TattooStore {
    state: RwLock<StoreState>,
}

/// A consistent view of the store.
#[derive(Clone)]
pub struct StoreSnapshot {
    pub revision: u64,
    pub records: Arc<Vec<Tattoo>>,
}

impl TattooStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: Arc::new(Vec::new()),
                positions: HashMap::new(),
                revision: 0,
            }),
        }
    }

    pub async fn with_records(records: Vec<Tattoo>) -> Self {
        let store = Self::new();
        store.replace_all(records).await;
        store
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            revision: state.revision,
            records: state.records.clone(),
        }
    }

    pub async fn get(&self, id: &str) -> Option<Tattoo> {
        let state = self.state.read().await;
        state
            .positions
            .get(id)
            .and_then(|position| state.records.get(*position))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn revision(&self) -> u64 {
        self.state.read().await.revision
    }

    /// Replaces the whole collection. Duplicate ids keep the first position and the
    /// last value. Returns the number of stored records.
    pub async fn replace_all(&self, records: Vec<Tattoo>) -> usize {
        let mut ordered: Vec<Tattoo> = Vec::with_capacity(records.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in records {
            match positions.get(&record.id) {
                Some(&position) => ordered[position] = record,
                None => {
                    positions.insert(record.id.clone(), ordered.len());
                    ordered.push(record);
                }
            }
        }

        let mut state = self.state.write().await;
        state.records = Arc::new(ordered);
        state.positions = positions;
        state.revision += 1;

        tracing::debug!(
            "Store replaced with {} records (revision {})",
            state.records.len(),
            state.revision
        );
        state.records.len()
    }

    /// Inserts new records at the end and updates existing ones in place.
    /// Returns the number of newly inserted records.
    pub async fn upsert_many(&self, records: Vec<Tattoo>) -> usize {
        if records.is_empty() {
            return 0;
        }

        let mut state = self.state.write().await;
        let StoreState {
            records: current,
            positions,
            revision,
        } = &mut *state;
        let current = Arc::make_mut(current);

        let mut inserted = 0;
        for record in records {
            match positions.get(&record.id) {
                Some(&position) => current[position] = record,
                None => {
                    positions.insert(record.id.clone(), current.len());
                    current.push(record);
                    inserted += 1;
                }
            }
        }
        *revision += 1;

        tracing::debug!(
            "Upserted records: {} new, store now {} (revision {})",
            inserted,
            current.len(),
            revision
        );
        inserted
    }
}

impl Default for TattooStore {
    fn default() -> Self {
        Self::new()
    }
}
