use std::{collections::HashSet, path::Path, sync::Arc};

use tracing::{info, warn};

use models::housing_location::HousingLocation;

use crate::errors::ServiceError;
use crate::locations::seed;
use crate::storage::json_seed;

/// Read-only holder of every housing location for the process lifetime.
///
/// Populated exactly once at startup; nothing inserts, updates, or deletes
/// records afterwards, so concurrent reads need no locking. Cloning shares
/// the underlying collection.
#[derive(Clone)]
pub struct LocationStore {
    records: Arc<Vec<HousingLocation>>,
}

impl LocationStore {
    /// Build a store from explicit records, insertion order preserved.
    pub fn from_records(records: Vec<HousingLocation>) -> Self {
        warn_on_duplicate_ids(&records);
        Self { records: Arc::new(records) }
    }

    /// Build a store over the builtin seed records.
    pub fn builtin() -> Self {
        Self::from_records(seed::BUILTIN_LOCATIONS.clone())
    }

    /// Build a store from a JSON seed file, falling back to the builtin
    /// records when the file does not exist. A file that exists but cannot
    /// be decoded fails startup instead of silently serving fallback data.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        match json_seed::read_seed_records(path).await? {
            Some(records) => {
                info!(path = %path.display(), count = records.len(), "seeded housing locations from file");
                Ok(Self::from_records(records))
            }
            None => {
                info!(path = %path.display(), "seed file missing; using builtin housing locations");
                Ok(Self::builtin())
            }
        }
    }

    /// Complete collection, insertion order preserved.
    pub fn get_all(&self) -> &[HousingLocation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn warn_on_duplicate_ids(records: &[HousingLocation]) {
    // id 唯一性由种子数据负责；这里只告警，查找时按顺序取第一条
    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.id) {
            warn!(id = r.id, "duplicate housing location id in seed data");
        }
    }
}
