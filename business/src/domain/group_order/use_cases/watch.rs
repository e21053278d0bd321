use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::group_order::errors::GroupOrderError;
use crate::domain::group_order::feed::LineItemEvent;

pub struct WatchOrderParams {
    pub id: Uuid,
}

/// Subscribes the caller to an envelope's line-item change feed after
/// checking the envelope exists.
#[async_trait]
pub trait WatchOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        params: WatchOrderParams,
    ) -> Result<broadcast::Receiver<LineItemEvent>, GroupOrderError>;
}
