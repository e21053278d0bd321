use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderEnvelope;

pub struct GetGroupOrderParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetGroupOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetGroupOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError>;
}
