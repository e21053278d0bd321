use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::aggregate;
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::summary::{
    GetOrderSummaryParams, GetOrderSummaryUseCase, OrderSummary, PersonCartSummary,
};
use crate::domain::logger::Logger;

pub struct GetOrderSummaryUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderSummaryUseCase for GetOrderSummaryUseCaseImpl {
    async fn execute(
        &self,
        params: GetOrderSummaryParams,
    ) -> Result<OrderSummary, GroupOrderError> {
        self.logger
            .debug(&format!("Deriving summary for group order: {}", params.id));

        let envelope = self
            .repository
            .get_envelope(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroupOrderError::NotFound,
                other => GroupOrderError::Repository(other),
            })?;

        let line_items = self.repository.list_line_items(envelope.id).await?;
        let carts = aggregate::aggregate(&line_items);
        let totals = aggregate::group_totals(envelope.budget, envelope.team_size, &carts);

        let carts = carts
            .into_iter()
            .map(|cart| {
                let remaining_budget = aggregate::remaining_budget(envelope.budget, &cart);
                PersonCartSummary {
                    cart,
                    remaining_budget,
                }
            })
            .collect();

        Ok(OrderSummary {
            envelope,
            carts,
            totals,
        })
    }
}
