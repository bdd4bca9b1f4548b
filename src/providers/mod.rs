pub mod file;
pub mod http;
pub mod seed;

use crate::error::Result;
use crate::models::ManagerRecord;
use async_trait::async_trait;

pub use file::FileSource;
pub use http::HttpSource;
pub use seed::SeedSource;

/// Supplies the manager records the dashboard is built from.
#[async_trait]
pub trait ManagerSource: Send + Sync {
    fn name(&self) -> &str;

    async fn load_managers(&self) -> Result<Vec<ManagerRecord>>;
}
