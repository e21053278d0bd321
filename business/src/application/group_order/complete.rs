use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::lifecycle;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::complete::{CompleteOrderParams, CompleteOrderUseCase};
use crate::domain::logger::Logger;

pub struct CompleteOrderUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CompleteOrderUseCase for CompleteOrderUseCaseImpl {
    async fn execute(
        &self,
        params: CompleteOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError> {
        self.logger
            .info(&format!("Completing group order: {}", params.id));

        let mut envelope = self
            .repository
            .get_envelope(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroupOrderError::NotFound,
                other => GroupOrderError::Repository(other),
            })?;

        if !envelope.is_managed_by(&params.caller) {
            return Err(GroupOrderError::NotAuthorized);
        }

        envelope.status =
            lifecycle::complete(&envelope, params.payment_method, params.invoice_approved)?;
        envelope.payment_method = params.payment_method;
        envelope.updated_at = Utc::now();

        self.repository.save_envelope(&envelope).await?;

        self.logger
            .info(&format!("Group order finalized: {}", envelope.id));
        Ok(envelope)
    }
}
