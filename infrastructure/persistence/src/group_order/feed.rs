use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sqlx::PgPool;
use tokio::sync::broadcast;
use tracing::warn;
use uuid::Uuid;

use business::domain::group_order::feed::{LineItemEvent, LineItemFeed};
use business::domain::group_order::model::GroupOrderLineItem;

use super::entity::LineItemEntity;

const CHANNEL_CAPACITY: usize = 1000;
const RECONCILE_INTERVAL: Duration = Duration::from_secs(5);

/// In-process fan-out of line-item changes, one broadcast channel per
/// envelope. Channels are created lazily on first subscribe and dropped once
/// the last receiver is gone.
pub struct BroadcastLineItemFeed {
    channels: Mutex<HashMap<Uuid, broadcast::Sender<LineItemEvent>>>,
}

impl BroadcastLineItemFeed {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Pushes an event to live subscribers of the envelope, if any.
    pub fn publish(&self, group_order_id: Uuid, event: LineItemEvent) {
        let mut channels = match self.channels.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(sender) = channels.get(&group_order_id) {
            if sender.receiver_count() == 0 {
                channels.remove(&group_order_id);
            } else {
                // A send error only means every receiver vanished in between.
                let _ = sender.send(event);
            }
        }
    }

    fn watched_envelopes(&self) -> Vec<Uuid> {
        let mut channels = match self.channels.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        channels.retain(|_, sender| sender.receiver_count() > 0);
        channels.keys().copied().collect()
    }
}

impl Default for BroadcastLineItemFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemFeed for BroadcastLineItemFeed {
    fn subscribe(&self, group_order_id: Uuid) -> broadcast::Receiver<LineItemEvent> {
        let mut channels = match self.channels.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        channels
            .entry(group_order_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }
}

/// Spawns the reconciliation loop: every few seconds the line items of every
/// watched envelope are re-read and diffed against the previous snapshot, and
/// any drift is replayed through the same channels as write-time pushes.
///
/// This catches writes that bypassed the push path (another replica, a manual
/// fix in the database) at the cost of a bounded delay.
pub fn start_reconciliation(pool: PgPool, feed: Arc<BroadcastLineItemFeed>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RECONCILE_INTERVAL);
        let mut snapshots: HashMap<Uuid, HashMap<Uuid, GroupOrderLineItem>> = HashMap::new();

        loop {
            interval.tick().await;

            let watched = feed.watched_envelopes();
            snapshots.retain(|id, _| watched.contains(id));

            for group_order_id in watched {
                let rows = sqlx::query_as::<_, LineItemEntity>(
                    "SELECT id, group_order_id, person_name, product_id, product_name, description, price, category, image, quantity, total_spent, created_at FROM group_order_items WHERE group_order_id = $1 ORDER BY created_at ASC, id ASC",
                )
                .bind(group_order_id)
                .fetch_all(&pool)
                .await;

                let items = match rows {
                    Ok(entities) => entities
                        .into_iter()
                        .map(|e| {
                            let item = e.into_domain();
                            (item.id, item)
                        })
                        .collect::<HashMap<_, _>>(),
                    Err(error) => {
                        warn!(target: "Backend -- ", "feed reconciliation query failed: {error}");
                        continue;
                    }
                };

                if let Some(previous) = snapshots.get(&group_order_id) {
                    for (id, item) in &items {
                        match previous.get(id) {
                            None => feed
                                .publish(group_order_id, LineItemEvent::Inserted(item.clone())),
                            Some(old) if old != item => {
                                feed.publish(group_order_id, LineItemEvent::Updated(item.clone()))
                            }
                            Some(_) => {}
                        }
                    }
                    for id in previous.keys() {
                        if !items.contains_key(id) {
                            feed.publish(group_order_id, LineItemEvent::Deleted { id: *id });
                        }
                    }
                }

                snapshots.insert(group_order_id, items);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(group_order_id: Uuid) -> GroupOrderLineItem {
        GroupOrderLineItem::from_repository(
            Uuid::new_v4(),
            group_order_id,
            "Alice".to_string(),
            "sandwich-1".to_string(),
            "Club Sandwich".to_string(),
            None,
            10.0,
            None,
            None,
            1,
            10.0,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_deliver_published_events_to_subscribers() {
        let feed = BroadcastLineItemFeed::new();
        let group_order_id = Uuid::new_v4();
        let mut receiver = feed.subscribe(group_order_id);

        feed.publish(group_order_id, LineItemEvent::Inserted(item(group_order_id)));

        assert!(matches!(
            receiver.recv().await,
            Ok(LineItemEvent::Inserted(_))
        ));
    }

    #[tokio::test]
    async fn should_scope_events_to_one_envelope() {
        let feed = BroadcastLineItemFeed::new();
        let watched = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut receiver = feed.subscribe(watched);

        feed.publish(other, LineItemEvent::Inserted(item(other)));
        feed.publish(watched, LineItemEvent::Inserted(item(watched)));

        let event = receiver.recv().await.unwrap();
        match event {
            LineItemEvent::Inserted(item) => assert_eq!(item.group_order_id, watched),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_drop_channels_without_receivers() {
        let feed = BroadcastLineItemFeed::new();
        let group_order_id = Uuid::new_v4();

        drop(feed.subscribe(group_order_id));

        assert!(feed.watched_envelopes().is_empty());
    }
}
