use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::model::{GroupOrderEnvelope, NewEnvelopeProps};
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::create::{
    CreateGroupOrderParams, CreateGroupOrderUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateGroupOrderUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateGroupOrderUseCase for CreateGroupOrderUseCaseImpl {
    async fn execute(
        &self,
        params: CreateGroupOrderParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError> {
        self.logger.info(&format!(
            "Creating group order for venue: {}",
            params.venue_id
        ));

        let envelope = GroupOrderEnvelope::new(NewEnvelopeProps {
            budget: params.budget,
            team_size: params.team_size,
            deadline: params.deadline,
            venue_id: params.venue_id,
            time: params.time,
            delivery_type: params.delivery_type,
            delivery_address: params.delivery_address,
            created_by: params.created_by,
        })?;

        self.repository.save_envelope(&envelope).await?;

        self.logger
            .info(&format!("Group order created with id: {}", envelope.id));
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::group_order::test_support::{MockGroupOrderRepo, mock_logger};
    use crate::domain::group_order::value_objects::{DeliveryType, OrderStatus};
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;

    fn params() -> CreateGroupOrderParams {
        CreateGroupOrderParams {
            budget: 25.0,
            team_size: 4,
            deadline: Some("2026-09-01".to_string()),
            venue_id: "shoreditch".to_string(),
            time: Utc::now(),
            delivery_type: DeliveryType::Delivery,
            delivery_address: Some("1 Finsbury Avenue".to_string()),
            created_by: Some(UserId::new("manager-1")),
        }
    }

    #[tokio::test]
    async fn should_create_draft_envelope() {
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo.expect_save_envelope().returning(|_| Ok(()));

        let use_case = CreateGroupOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let envelope = use_case.execute(params()).await.unwrap();

        assert_eq!(envelope.status, OrderStatus::Draft);
        assert_eq!(envelope.team_size, 4);
        assert_eq!(envelope.created_by, Some(UserId::new("manager-1")));
    }

    #[tokio::test]
    async fn should_reject_invalid_team_size_without_saving() {
        let mock_repo = MockGroupOrderRepo::new();

        let use_case = CreateGroupOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut bad = params();
        bad.team_size = 0;
        let result = use_case.execute(bad).await;

        assert!(matches!(result, Err(GroupOrderError::InvalidTeamSize)));
    }
}
