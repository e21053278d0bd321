use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::shared::value_objects::UserId;

/// Manager edit of the draft envelope settings. Absent fields keep their
/// current value.
pub struct UpdateOrderSettingsParams {
    pub id: Uuid,
    pub caller: UserId,
    pub budget: Option<f64>,
    pub team_size: Option<i32>,
    pub deadline: Option<String>,
}

#[async_trait]
pub trait UpdateOrderSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateOrderSettingsParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError>;
}
