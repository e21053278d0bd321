use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::group_order::errors::GroupOrderError;

pub struct ShareLinkParams {
    pub id: Uuid,
}

/// Shareable entry points for an envelope. Possession of the participant URL
/// is the only access control for writing line items.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLinks {
    pub participant_url: String,
    pub manager_url: String,
}

#[async_trait]
pub trait ShareLinkUseCase: Send + Sync {
    async fn execute(&self, params: ShareLinkParams) -> Result<ShareLinks, GroupOrderError>;
}
