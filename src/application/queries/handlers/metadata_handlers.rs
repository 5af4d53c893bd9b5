//! Metadata Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MetadataRepositoryPort;
use crate::application::queries::GetMetadata;
use crate::domain::Metadata;

/// GetMetadata Handler
pub struct GetMetadataHandler {
    metadata_repo: Arc<dyn MetadataRepositoryPort>,
}

impl GetMetadataHandler {
    pub fn new(metadata_repo: Arc<dyn MetadataRepositoryPort>) -> Self {
        Self { metadata_repo }
    }

    pub async fn handle(&self, _query: GetMetadata) -> Result<Metadata, ApplicationError> {
        Ok(self.metadata_repo.fetch_metadata().await?)
    }
}
