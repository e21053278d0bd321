use tokio::sync::broadcast;
use uuid::Uuid;

use super::model::GroupOrderLineItem;

/// A line-item change scoped to one envelope.
///
/// Subscribers receive the same event shape whether the change was pushed at
/// write time or discovered by the store's reconciliation poll; the two
/// delivery paths are indistinguishable on purpose.
#[derive(Debug, Clone)]
pub enum LineItemEvent {
    Inserted(GroupOrderLineItem),
    Updated(GroupOrderLineItem),
    Deleted { id: Uuid },
}

/// Change-feed port for one envelope's line items.
///
/// Delivery is best-effort: events may be delayed, coalesced or missed, and
/// a lagging receiver drops the oldest events. Consumers that need the full
/// picture re-fetch the line items on every wakeup rather than replaying
/// event payloads.
pub trait LineItemFeed: Send + Sync {
    fn subscribe(&self, group_order_id: Uuid) -> broadcast::Receiver<LineItemEvent>;
}
