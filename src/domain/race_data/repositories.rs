use super::entities::RaceRecord;
use crate::domain::errors::AppResult;

/// Source of the race dataset
#[allow(async_fn_in_trait)]
pub trait RaceDataRepository {
    /// Fetch and schema-check every record published at `url`.
    async fn fetch_records(&self, url: &str) -> AppResult<Vec<RaceRecord>>;
}
