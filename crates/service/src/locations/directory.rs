use async_trait::async_trait;

use models::housing_location::HousingLocation;

/// Trait abstraction for read access to the housing directory (list + point lookup).
#[async_trait]
pub trait LocationDirectory: Send + Sync {
    async fn list(&self) -> Vec<HousingLocation>;
    async fn get(&self, id: u32) -> Option<HousingLocation>;
}
