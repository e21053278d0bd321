use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::group_order::aggregate::{GroupTotals, PersonCart};
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderEnvelope;

pub struct GetOrderSummaryParams {
    pub id: Uuid,
}

/// One participant's derived cart plus their floored remaining budget.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCartSummary {
    pub cart: PersonCart,
    pub remaining_budget: f64,
}

/// The manager dashboard view: per-person carts and group totals, re-derived
/// from the envelope's full line-item set on every call.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub envelope: GroupOrderEnvelope,
    pub carts: Vec<PersonCartSummary>,
    pub totals: GroupTotals,
}

#[async_trait]
pub trait GetOrderSummaryUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderSummaryParams) -> Result<OrderSummary, GroupOrderError>;
}
