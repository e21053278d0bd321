use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::group_order::feed::LineItemEvent;
use business::domain::group_order::model::{GroupOrderEnvelope, GroupOrderLineItem};
use business::domain::group_order::repository::GroupOrderRepository;

use super::entity::{GroupOrderEntity, LineItemEntity, money};
use super::feed::BroadcastLineItemFeed;

pub struct GroupOrderRepositoryPostgres {
    pool: PgPool,
    feed: Arc<BroadcastLineItemFeed>,
}

impl GroupOrderRepositoryPostgres {
    pub fn new(pool: PgPool, feed: Arc<BroadcastLineItemFeed>) -> Self {
        Self { pool, feed }
    }
}

#[async_trait]
impl GroupOrderRepository for GroupOrderRepositoryPostgres {
    async fn save_envelope(&self, envelope: &GroupOrderEnvelope) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO group_orders (id, budget, team_size, deadline, venue_id, time, delivery_type, delivery_address, payment_method, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                budget = EXCLUDED.budget,
                team_size = EXCLUDED.team_size,
                deadline = EXCLUDED.deadline,
                venue_id = EXCLUDED.venue_id,
                time = EXCLUDED.time,
                delivery_type = EXCLUDED.delivery_type,
                delivery_address = EXCLUDED.delivery_address,
                payment_method = EXCLUDED.payment_method,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(envelope.id)
        .bind(money(envelope.budget))
        .bind(envelope.team_size)
        .bind(&envelope.deadline)
        .bind(&envelope.venue_id)
        .bind(envelope.time)
        .bind(envelope.delivery_type.to_string())
        .bind(&envelope.delivery_address)
        .bind(envelope.payment_method.as_ref().map(|m| m.to_string()))
        .bind(envelope.status.to_string())
        .bind(envelope.created_by.as_ref().map(|u| u.to_string()))
        .bind(envelope.created_at)
        .bind(envelope.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn get_envelope(&self, id: Uuid) -> Result<GroupOrderEnvelope, RepositoryError> {
        let entity = sqlx::query_as::<_, GroupOrderEntity>(
            "SELECT id, budget, team_size, deadline, venue_id, time, delivery_type, delivery_address, payment_method, status, created_by, created_at, updated_at FROM group_orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn list_line_items(
        &self,
        group_order_id: Uuid,
    ) -> Result<Vec<GroupOrderLineItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, LineItemEntity>(
            "SELECT id, group_order_id, person_name, product_id, product_name, description, price, category, image, quantity, total_spent, created_at FROM group_order_items WHERE group_order_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(group_order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_line_item(
        &self,
        group_order_id: Uuid,
        person_name: &str,
        product_id: &str,
    ) -> Result<Option<GroupOrderLineItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, LineItemEntity>(
            "SELECT id, group_order_id, person_name, product_id, product_name, description, price, category, image, quantity, total_spent, created_at FROM group_order_items WHERE group_order_id = $1 AND person_name = $2 AND product_id = $3 ORDER BY created_at ASC LIMIT 1",
        )
        .bind(group_order_id)
        .bind(person_name)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert_line_item(&self, item: &GroupOrderLineItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO group_order_items (id, group_order_id, person_name, product_id, product_name, description, price, category, image, quantity, total_spent, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)"#,
        )
        .bind(item.id)
        .bind(item.group_order_id)
        .bind(&item.person_name)
        .bind(&item.product_id)
        .bind(&item.product_name)
        .bind(&item.description)
        .bind(money(item.price))
        .bind(&item.category)
        .bind(&item.image)
        .bind(item.quantity)
        .bind(money(item.total_spent))
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.feed
            .publish(item.group_order_id, LineItemEvent::Inserted(item.clone()));

        Ok(())
    }

    async fn update_line_item(&self, item: &GroupOrderLineItem) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE group_order_items SET quantity = $1, total_spent = $2
            WHERE group_order_id = $3 AND person_name = $4 AND product_id = $5"#,
        )
        .bind(item.quantity)
        .bind(money(item.total_spent))
        .bind(item.group_order_id)
        .bind(&item.person_name)
        .bind(&item.product_id)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        self.feed
            .publish(item.group_order_id, LineItemEvent::Updated(item.clone()));

        Ok(())
    }
}
