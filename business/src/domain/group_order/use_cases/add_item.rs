use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::GroupOrderLineItem;

/// Participant add/remove of a product under a free-text person label.
///
/// `quantity` is a delta: positive adds, negative removes from an existing
/// row (the stored quantity never drops below zero). The budget gate only
/// applies to additions.
pub struct AddLineItemParams {
    pub group_order_id: Uuid,
    pub person_name: String,
    pub product_id: String,
    pub product_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub image: Option<String>,
    pub quantity: i32,
}

#[async_trait]
pub trait AddLineItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddLineItemParams,
    ) -> Result<GroupOrderLineItem, GroupOrderError>;
}
