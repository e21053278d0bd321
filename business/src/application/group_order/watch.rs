use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::feed::{LineItemEvent, LineItemFeed};
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::use_cases::watch::{WatchOrderParams, WatchOrderUseCase};
use crate::domain::logger::Logger;

pub struct WatchOrderUseCaseImpl {
    pub repository: Arc<dyn GroupOrderRepository>,
    pub feed: Arc<dyn LineItemFeed>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl WatchOrderUseCase for WatchOrderUseCaseImpl {
    async fn execute(
        &self,
        params: WatchOrderParams,
    ) -> Result<broadcast::Receiver<LineItemEvent>, GroupOrderError> {
        self.repository
            .get_envelope(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroupOrderError::NotFound,
                other => GroupOrderError::Repository(other),
            })?;

        self.logger
            .debug(&format!("New watcher for group order: {}", params.id));
        Ok(self.feed.subscribe(params.id))
    }
}
