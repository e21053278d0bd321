use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::get::{GetGroupOrderParams, GetGroupOrderUseCase};
use crate::domain::logger::Logger;

pub struct GetGroupOrderUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetGroupOrderUseCase for GetGroupOrderUseCaseImpl {
    async fn execute(
        &self,
        params: GetGroupOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError> {
        self.logger
            .debug(&format!("Fetching group order: {}", params.id));

        self.repository
            .get_envelope(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroupOrderError::NotFound,
                other => GroupOrderError::Repository(other),
            })
    }
}
