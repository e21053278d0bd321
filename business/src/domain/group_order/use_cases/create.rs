use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::group_order::value_objects::DeliveryType;
use crate::domain::shared::value_objects::UserId;

pub struct CreateGroupOrderParams {
    pub budget: f64,
    pub team_size: i32,
    pub deadline: Option<String>,
    pub venue_id: String,
    pub time: DateTime<Utc>,
    pub delivery_type: DeliveryType,
    pub delivery_address: Option<String>,
    pub created_by: Option<UserId>,
}

#[async_trait]
pub trait CreateGroupOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateGroupOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError>;
}
