use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::group_order::value_objects::PaymentMethod;
use crate::domain::shared::value_objects::UserId;

/// Checkout action. `invoice_approved` is caller-side state (it is checked,
/// never persisted).
pub struct CompleteOrderParams {
    pub id: Uuid,
    pub caller: UserId,
    pub payment_method: Option<PaymentMethod>,
    pub invoice_approved: bool,
}

#[async_trait]
pub trait CompleteOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CompleteOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError>;
}
