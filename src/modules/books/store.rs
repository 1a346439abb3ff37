use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::RwLock;

/// Records the store starts with.
pub fn seed_records() -> Vec<Value> {
    vec![
        json!({ "name": "Harry Potter", "amount": 1 }),
        json!({ "name": "Lord of the Rings", "amount": 12 }),
    ]
}

/// Append-only, process-lifetime collection of posted records.
///
/// Records are kept exactly as received, in insertion order. Clones share the
/// same collection.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    records: Arc<RwLock<Vec<Value>>>,
}

impl BookStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two seed records
    pub fn seeded() -> Self {
        Self::with_records(seed_records())
    }

    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Snapshot of every record in insertion order
    pub async fn list(&self) -> Vec<Value> {
        self.records.read().await.clone()
    }

    /// Append a record and return the new length
    pub async fn append(&self, record: Value) -> usize {
        let mut records = self.records.write().await;
        records.push(record);
        records.len()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
