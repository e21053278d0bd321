use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::lifecycle;
use crate::domain::group_order::model::GroupOrderEnvelope;
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::update_settings::{
    UpdateOrderSettingsParams, UpdateOrderSettingsUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateOrderSettingsUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderSettingsUseCase for UpdateOrderSettingsUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateOrderSettingsParams,
    ) -> Result<GroupOrderEnvelope, GroupOrderError> {
        self.logger
            .info(&format!("Updating settings for group order: {}", params.id));

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

        if !lifecycle::allows_settings_edit(envelope.status) {
            return Err(GroupOrderError::OrderLocked);
        }

        if let Some(budget) = params.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(GroupOrderError::InvalidBudget);
            }
            envelope.budget = budget;
        }

        if let Some(team_size) = params.team_size {
            if team_size < 1 {
                return Err(GroupOrderError::InvalidTeamSize);
            }
            envelope.team_size = team_size;
        }

        if let Some(deadline) = params.deadline {
            envelope.deadline = Some(deadline);
        }

        envelope.updated_at = Utc::now();
        self.repository.save_envelope(&envelope).await?;

        self.logger
            .info(&format!("Group order settings updated: {}", envelope.id));
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::group_order::test_support::{
        MockGroupOrderRepo, draft_envelope, envelope_with_status, mock_logger,
    };
    use crate::domain::group_order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
    use uuid::Uuid;

    fn params(id: Uuid) -> UpdateOrderSettingsParams {
        UpdateOrderSettingsParams {
            id,
            caller: UserId::new("manager-1"),
            budget: Some(30.0),
            team_size: Some(6),
            deadline: Some("2026-09-15".to_string()),
        }
    }

    #[tokio::test]
    async fn should_update_budget_team_size_and_deadline() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(draft_envelope(id)));
        mock_repo.expect_save_envelope().returning(|_| Ok(()));

        let use_case = UpdateOrderSettingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let envelope = use_case.execute(params(order_id)).await.unwrap();

        assert_eq!(envelope.budget, 30.0);
        assert_eq!(envelope.team_size, 6);
        assert_eq!(envelope.deadline.as_deref(), Some("2026-09-15"));
    }

    #[tokio::test]
    async fn should_keep_fields_absent_from_the_patch() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(draft_envelope(id)));
        mock_repo.expect_save_envelope().returning(|_| Ok(()));

        let use_case = UpdateOrderSettingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let envelope = use_case
            .execute(UpdateOrderSettingsParams {
                id: order_id,
                caller: UserId::new("manager-1"),
                budget: None,
                team_size: Some(3),
                deadline: None,
            })
            .await
            .unwrap();

        assert_eq!(envelope.budget, 25.0);
        assert_eq!(envelope.team_size, 3);
    }

    #[tokio::test]
    async fn should_block_edits_after_draft() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(envelope_with_status(id, OrderStatus::WaitingForPayment)));

        let use_case = UpdateOrderSettingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(order_id)).await;

        assert!(matches!(result, Err(GroupOrderError::OrderLocked)));
    }

    #[tokio::test]
    async fn should_reject_caller_that_is_not_the_manager() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(draft_envelope(id)));

        let use_case = UpdateOrderSettingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut bad = params(order_id);
        bad.caller = UserId::new("intruder");
        let result = use_case.execute(bad).await;

        assert!(matches!(result, Err(GroupOrderError::NotAuthorized)));
    }
}
