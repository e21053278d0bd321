use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::aggregate::{self, PersonCart};
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::lifecycle;
use crate::domain::group_order::model::{GroupOrderLineItem, NewLineItemProps};
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::add_item::{AddLineItemParams, AddLineItemUseCase};
use crate::domain::logger::Logger;

pub struct AddLineItemUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddLineItemUseCase for AddLineItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddLineItemParams,
    ) -> Result<GroupOrderLineItem, GroupOrderError> {
        self.logger.info(&format!(
            "Line item write for order {}: {} x{} by '{}'",
            params.group_order_id, params.product_id, params.quantity, params.person_name
        ));

        let envelope = self
            .repository
            .get_envelope(params.group_order_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroupOrderError::NotFound,
                other => GroupOrderError::Repository(other),
            })?;

        if !lifecycle::allows_participant_writes(envelope.status) {
            return Err(GroupOrderError::OrderLocked);
        }

        // Advisory budget gate against the current snapshot. A concurrent
        // writer can pass the same check against stale state; the store
        // accepts both (last-write-wins) and the overspend shows up in the
        // aggregate.
        if params.quantity > 0 {
            let added_cost = params.price * f64::from(params.quantity);
            let line_items = self.repository.list_line_items(envelope.id).await?;
            let carts = aggregate::aggregate(&line_items);
            let empty_cart = PersonCart {
                person_name: params.person_name.clone(),
                items: Vec::new(),
                total_spent: 0.0,
            };
            let cart = carts
                .iter()
                .find(|cart| cart.person_name == params.person_name)
                .unwrap_or(&empty_cart);

            if !aggregate::can_afford(envelope.budget, cart, added_cost) {
                let shortfall = added_cost - (envelope.budget - cart.total_spent);
                self.logger.warn(&format!(
                    "Budget exceeded for '{}' on order {}: short by {:.2}",
                    params.person_name, envelope.id, shortfall
                ));
                return Err(GroupOrderError::BudgetExceeded { shortfall });
            }
        }

        let existing = self
            .repository
            .find_line_item(envelope.id, &params.person_name, &params.product_id)
            .await?;

        let item = match existing {
            Some(existing) => {
                let quantity = (existing.quantity + params.quantity).max(0);
                let updated = existing.with_quantity(quantity);
                self.repository.update_line_item(&updated).await?;
                updated
            }
            None => {
                let item = GroupOrderLineItem::new(NewLineItemProps {
                    group_order_id: envelope.id,
                    person_name: params.person_name,
                    product_id: params.product_id,
                    product_name: params.product_name,
                    description: params.description,
                    price: params.price,
                    category: params.category,
                    image: params.image,
                    quantity: params.quantity,
                })?;
                self.repository.insert_line_item(&item).await?;
                item
            }
        };

        self.logger
            .debug(&format!("Line item saved: {}", item.id));
        Ok(item)
    }
}
