use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::group_order::model::{GroupOrderEnvelope, GroupOrderLineItem};
use business::domain::group_order::value_objects::{DeliveryType, OrderStatus, PaymentMethod};
use business::domain::shared::value_objects::UserId;

/// Converts a domain amount into the NUMERIC representation used in Postgres.
pub fn money(value: f64) -> BigDecimal {
    BigDecimal::from_f64(value).unwrap_or_default()
}

#[derive(Debug, FromRow)]
pub struct GroupOrderEntity {
    pub id: Uuid,
    pub budget: BigDecimal,
    pub team_size: i32,
    pub deadline: Option<String>,
    pub venue_id: String,
    pub time: DateTime<Utc>,
    pub delivery_type: String,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    pub status: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GroupOrderEntity {
    pub fn into_domain(self) -> GroupOrderEnvelope {
        GroupOrderEnvelope::from_repository(
            self.id,
            self.budget.to_f64().unwrap_or(0.0),
            self.team_size,
            self.deadline,
            self.venue_id,
            self.time,
            self.delivery_type
                .parse::<DeliveryType>()
                .unwrap_or(DeliveryType::Collection),
            self.delivery_address,
            self.payment_method
                .and_then(|m| m.parse::<PaymentMethod>().ok()),
            self.status.parse::<OrderStatus>().unwrap_or(OrderStatus::Draft),
            self.created_by.map(|u| UserId::new(&u)),
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct LineItemEntity {
    pub id: Uuid,
    pub group_order_id: Uuid,
    pub person_name: String,
    pub product_id: String,
    pub product_name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: Option<String>,
    pub image: Option<String>,
    pub quantity: i32,
    pub total_spent: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl LineItemEntity {
    pub fn into_domain(self) -> GroupOrderLineItem {
        GroupOrderLineItem::from_repository(
            self.id,
            self.group_order_id,
            self.person_name,
            self.product_id,
            self.product_name,
            self.description,
            self.price.to_f64().unwrap_or(0.0),
            self.category,
            self.image,
            self.quantity,
            self.total_spent.to_f64().unwrap_or(0.0),
            self.created_at,
        )
    }
}
