use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{GroupOrderEnvelope, GroupOrderLineItem};

/// The Group Order Store boundary.
///
/// Writes are unconditional upserts; there is no locking and no optimistic
/// concurrency. Line items are never deleted, only written with a new
/// quantity (which may be zero).
#[async_trait]
pub trait GroupOrderRepository: Send + Sync {
    async fn save_envelope(&self, envelope: &GroupOrderEnvelope) -> Result<(), RepositoryError>;
    async fn get_envelope(&self, id: Uuid) -> Result<GroupOrderEnvelope, RepositoryError>;
    /// Line items for one envelope, ordered by creation time ascending
    /// (store-assigned order breaks ties).
    async fn list_line_items(
        &self,
        group_order_id: Uuid,
    ) -> Result<Vec<GroupOrderLineItem>, RepositoryError>;
    async fn find_line_item(
        &self,
        group_order_id: Uuid,
        person_name: &str,
        product_id: &str,
    ) -> Result<Option<GroupOrderLineItem>, RepositoryError>;
    async fn insert_line_item(&self, item: &GroupOrderLineItem) -> Result<(), RepositoryError>;
    /// Rewrites the row matched by (group_order_id, person_name, product_id).
    async fn update_line_item(&self, item: &GroupOrderLineItem) -> Result<(), RepositoryError>;
}
