use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::share_link::{
    ShareLinkParams, ShareLinkUseCase, ShareLinks,
};
use crate::domain::logger::Logger;

/// Builds the shareable URLs for an existing envelope:
/// `<origin>/?group-order=<id>` for participants and the same with
/// `&manager=true` for the manager re-entry view.
pub struct ShareLinkUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub origin: Url,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ShareLinkUseCase for ShareLinkUseCaseImpl {
    async fn execute(&self, params: ShareLinkParams) -> Result<ShareLinks, GroupOrderError> {
        // The link is only meaningful for an envelope that exists.
        self.repository
            .get_envelope(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroupOrderError::NotFound,
                other => GroupOrderError::Repository(other),
            })?;

        let mut participant_url = self.origin.clone();
        participant_url
            .query_pairs_mut()
            .append_pair("group-order", &params.id.to_string());

        let mut manager_url = participant_url.clone();
        manager_url.query_pairs_mut().append_pair("manager", "true");

        self.logger
            .debug(&format!("Share links issued for order: {}", params.id));

        Ok(ShareLinks {
            participant_url: participant_url.to_string(),
            manager_url: manager_url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::group_order::test_support::{
        MockGroupOrderRepo, draft_envelope, mock_logger,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn should_build_participant_and_manager_urls() {
        let order_id = Uuid::new_v4();
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(move |id| Ok(draft_envelope(id)));

        let use_case = ShareLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            origin: Url::parse("https://orders.example.com/").unwrap(),
            logger: mock_logger(),
        };

        let links = use_case.execute(ShareLinkParams { id: order_id }).await.unwrap();

        assert_eq!(
            links.participant_url,
            format!("https://orders.example.com/?group-order={}", order_id)
        );
        assert_eq!(
            links.manager_url,
            format!(
                "https://orders.example.com/?group-order={}&manager=true",
                order_id
            )
        );
    }

    #[tokio::test]
    async fn should_not_issue_links_for_unknown_order() {
        let mut mock_repo = MockGroupOrderRepo::new();
        mock_repo
            .expect_get_envelope()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = ShareLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            origin: Url::parse("https://orders.example.com/").unwrap(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ShareLinkParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(GroupOrderError::NotFound)));
    }
}
