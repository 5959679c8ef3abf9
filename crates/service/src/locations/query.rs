use async_trait::async_trait;

use models::housing_location::HousingLocation;

use crate::locations::directory::LocationDirectory;
use crate::locations::store::LocationStore;

/// Read-side query operations over a [`LocationStore`].
///
/// Both operations are stateless pure reads: repeated calls return identical
/// results for the lifetime of the process.
#[derive(Clone)]
pub struct LocationQueryService {
    store: LocationStore,
}

impl LocationQueryService {
    pub fn new(store: LocationStore) -> Self {
        Self { store }
    }

    /// All records, insertion order preserved. An empty store yields an
    /// empty vec, never an error.
    pub fn list_all(&self) -> Vec<HousingLocation> {
        self.store.get_all().to_vec()
    }

    /// First record whose id matches, scanning in collection order.
    ///
    /// Linear scan: the collection is small and static, so no id index is
    /// kept. Absence is `None`, not an error.
    pub fn find_by_id(&self, id: u32) -> Option<HousingLocation> {
        self.store.get_all().iter().find(|loc| loc.id == id).cloned()
    }
}

#[async_trait]
impl LocationDirectory for LocationQueryService {
    async fn list(&self) -> Vec<HousingLocation> {
        self.list_all()
    }

    async fn get(&self, id: u32) -> Option<HousingLocation> {
        self.find_by_id(id)
    }
}
