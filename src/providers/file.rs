use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::info;

use crate::error::{Result, SprintboardError};
use crate::models::ManagerRecord;
use crate::providers::ManagerSource;

/// Reads managers from JSON files, each holding an array of managers.
pub struct FileSource {
    paths: Vec<PathBuf>,
}

impl FileSource {
    pub fn new(paths: Vec<PathBuf>) -> Result<Self> {
        if paths.is_empty() {
            return Err(SprintboardError::Config(
                "At least one data file is required".to_string(),
            ));
        }

        Ok(Self { paths })
    }
}

async fn read_managers(path: &Path) -> Result<Vec<ManagerRecord>> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        SprintboardError::Config(format!("Failed to read {}: {e}", path.display()))
    })?;

    let managers: Vec<ManagerRecord> = serde_json::from_str(&contents)?;
    info!("Loaded {} managers from {}", managers.len(), path.display());

    Ok(managers)
}

#[async_trait]
impl ManagerSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load_managers(&self) -> Result<Vec<ManagerRecord>> {
        // Read all files concurrently, keeping argument order
        let loaded =
            futures::future::try_join_all(self.paths.iter().map(|path| read_managers(path)))
                .await?;

        Ok(loaded.into_iter().flatten().collect())
    }
}
