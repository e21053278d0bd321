use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::aggregate;
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::lifecycle;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::finalize::{FinalizeOrderParams, FinalizeOrderUseCase};
use crate::domain::logger::Logger;

pub struct FinalizeOrderUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FinalizeOrderUseCase for FinalizeOrderUseCaseImpl {
    async fn execute(
        &self,
        params: FinalizeOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError> {
        self.logger
            .info(&format!("Finalizing group order: {}", params.id));

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

        let line_items = self.repository.list_line_items(envelope.id).await?;
        let carts = aggregate::aggregate(&line_items);

        envelope.status = lifecycle::finalize(&envelope, &carts)?;
        envelope.updated_at = Utc::now();

        self.repository.save_envelope(&envelope).await?;

        self.logger.info(&format!(
            "Group order {} now waiting for payment",
            envelope.id
        ));
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::group_order::test_support::{
        MockGroupOrderRepo, draft_envelope, envelope_with_status, mock_logger,
    };
    use crate::domain::group_order::model::NewLineItemProps;
    use crate::domain::group_order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
    use uuid::Uuid;

    fn one_item(order_id: Uuid) -> crate::domain::group_order::model::GroupOrderLineItem {
        crate::domain::group_order::model::GroupOrderLineItem::new(NewLineItemProps {
            group_order_id: order_id,
            person_name: "Alice".to_string(),
            product_id: "sandwich-1".to_string(),
            product_name: "Club Sandwich".to_string(),
            description: None,
            price: 10.0,
            category: None,
            image: None,
            quantity: 1,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_move_draft_to_waiting_for_payment() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(draft_envelope(id)));
        mock_repo
            .expect_list_line_items()
            .returning(move |id| Ok(vec![one_item(id)]));
        mock_repo.expect_save_envelope().returning(|_| Ok(()));

        let use_case = FinalizeOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let envelope = use_case
            .execute(FinalizeOrderParams {
                id: order_id,
                caller: UserId::new("manager-1"),
            })
            .await
            .unwrap();

        assert_eq!(envelope.status, OrderStatus::WaitingForPayment);
    }

    #[tokio::test]
    async fn should_fail_with_empty_order_and_not_persist() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(draft_envelope(id)));
        mock_repo.expect_list_line_items().returning(|_| Ok(vec![]));

        let use_case = FinalizeOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FinalizeOrderParams {
                id: order_id,
                caller: UserId::new("manager-1"),
            })
            .await;

        assert!(matches!(result, Err(GroupOrderError::EmptyOrder)));
    }

    #[tokio::test]
    async fn should_reject_non_manager_caller() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(draft_envelope(id)));

        let use_case = FinalizeOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FinalizeOrderParams {
                id: order_id,
                caller: UserId::new("intruder"),
            })
            .await;

        assert!(matches!(result, Err(GroupOrderError::NotAuthorized)));
    }

    #[tokio::test]
    async fn should_reject_finalize_of_already_finalized_order() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(envelope_with_status(id, OrderStatus::Finalized)));
        mock_repo
            .expect_list_line_items()
            .returning(move |id| Ok(vec![one_item(id)]));

        let use_case = FinalizeOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FinalizeOrderParams {
                id: order_id,
                caller: UserId::new("manager-1"),
            })
            .await;

        assert!(matches!(result, Err(GroupOrderError::InvalidTransition)));
    }
}
