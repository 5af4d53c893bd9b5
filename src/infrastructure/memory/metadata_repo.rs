//! Static Metadata Repository

use async_trait::async_trait;

use crate::application::ports::{MetadataRepositoryPort, RepositoryError};
use crate::domain::Metadata;

/// 启动时确定的元信息
pub struct StaticMetadataRepository {
    metadata: Metadata,
}

impl StaticMetadataRepository {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

#[async_trait]
impl MetadataRepositoryPort for StaticMetadataRepository {
    async fn fetch_metadata(&self) -> Result<Metadata, RepositoryError> {
        Ok(self.metadata.clone())
    }
}
