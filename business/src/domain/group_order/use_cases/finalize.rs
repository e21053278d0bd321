use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::shared::value_objects::UserId;

pub struct FinalizeOrderParams {
    pub id: Uuid,
    pub caller: UserId,
}

#[async_trait]
pub trait FinalizeOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        params: FinalizeOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError>;
}
