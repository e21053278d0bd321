use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::GroupOrderError;
use super::value_objects::{DeliveryType, OrderStatus, PaymentMethod};
use crate::domain::shared::value_objects::UserId;

/// A shared group order: venue, time, per-person budget and lifecycle status.
///
/// The envelope id doubles as the shareable link token; anyone holding it
/// can write line items under any person label.
#[derive(Debug, Clone)]
pub struct GroupOrderEnvelope {
    pub id: Uuid,
    pub budget: f64,
    pub team_size: i32,
    pub deadline: Option<String>,
    pub venue_id: String,
    pub time: DateTime<Utc>,
    pub delivery_type: DeliveryType,
    pub delivery_address: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub status: OrderStatus,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewEnvelopeProps {
    pub budget: f64,
    pub team_size: i32,
    pub deadline: Option<String>,
    pub venue_id: String,
    pub time: DateTime<Utc>,
    pub delivery_type: DeliveryType,
    pub delivery_address: Option<String>,
    pub created_by: Option<UserId>,
}

impl GroupOrderEnvelope {
    pub fn new(props: NewEnvelopeProps) -> Result<Self, GroupOrderError> {
        if !props.budget.is_finite() || props.budget < 0.0 {
            return Err(GroupOrderError::InvalidBudget);
        }

        if props.team_size < 1 {
            return Err(GroupOrderError::InvalidTeamSize);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            budget: props.budget,
            team_size: props.team_size,
            deadline: props.deadline,
            venue_id: props.venue_id,
            time: props.time,
            delivery_type: props.delivery_type,
            delivery_address: props.delivery_address,
            payment_method: None,
            status: OrderStatus::Draft,
            created_by: props.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        budget: f64,
        team_size: i32,
        deadline: Option<String>,
        venue_id: String,
        time: DateTime<Utc>,
        delivery_type: DeliveryType,
        delivery_address: Option<String>,
        payment_method: Option<PaymentMethod>,
        status: OrderStatus,
        created_by: Option<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            budget,
            team_size,
            deadline,
            venue_id,
            time,
            delivery_type,
            delivery_address,
            payment_method,
            status,
            created_by,
            created_at,
            updated_at,
        }
    }

    /// True when the given caller identity matches the envelope manager.
    pub fn is_managed_by(&self, caller: &UserId) -> bool {
        self.created_by.as_ref() == Some(caller)
    }
}

/// One persisted (person, product, quantity) fact, with a denormalized
/// snapshot of the product it refers to.
///
/// Uniqueness of (group_order_id, person_name, product_id) is a soft
/// expectation only; the store does not enforce it under races, and the
/// aggregator folds duplicate rows by summing quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOrderLineItem {
    pub id: Uuid,
    pub group_order_id: Uuid,
    pub person_name: String,
    pub product_id: String,
    pub product_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub image: Option<String>,
    pub quantity: i32,
    pub total_spent: f64,
    pub created_at: DateTime<Utc>,
}

pub struct NewLineItemProps {
    pub group_order_id: Uuid,
    pub person_name: String,
    pub product_id: String,
    pub product_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub image: Option<String>,
    pub quantity: i32,
}

impl GroupOrderLineItem {
    pub fn new(props: NewLineItemProps) -> Result<Self, GroupOrderError> {
        if props.person_name.trim().is_empty() {
            return Err(GroupOrderError::PersonNameEmpty);
        }

        // Zero is legal (a row whose quantity was decremented back down);
        // negative is not.
        if props.quantity < 0 {
            return Err(GroupOrderError::InvalidQuantity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            group_order_id: props.group_order_id,
            person_name: props.person_name,
            product_id: props.product_id,
            product_name: props.product_name,
            description: props.description,
            price: props.price,
            category: props.category,
            image: props.image,
            quantity: props.quantity,
            total_spent: props.price * f64::from(props.quantity),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        group_order_id: Uuid,
        person_name: String,
        product_id: String,
        product_name: String,
        description: Option<String>,
        price: f64,
        category: Option<String>,
        image: Option<String>,
        quantity: i32,
        total_spent: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            group_order_id,
            person_name,
            product_id,
            product_name,
            description,
            price,
            category,
            image,
            quantity,
            total_spent,
            created_at,
        }
    }

    /// Returns a copy with the quantity replaced and the stored total
    /// recomputed from the snapshot price.
    pub fn with_quantity(&self, quantity: i32) -> Self {
        let mut item = self.clone();
        item.quantity = quantity;
        item.total_spent = item.price * f64::from(quantity);
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_props() -> NewEnvelopeProps {
        NewEnvelopeProps {
            budget: 25.0,
            team_size: 2,
            deadline: Some("2026-09-01".to_string()),
            venue_id: "venue-1".to_string(),
            time: Utc::now(),
            delivery_type: DeliveryType::Delivery,
            delivery_address: Some("12 Market Street".to_string()),
            created_by: Some(UserId::new("manager-1")),
        }
    }

    #[test]
    fn should_create_envelope_in_draft_without_payment_method() {
        let envelope = GroupOrderEnvelope::new(envelope_props()).unwrap();

        assert_eq!(envelope.status, OrderStatus::Draft);
        assert!(envelope.payment_method.is_none());
        assert_eq!(envelope.budget, 25.0);
    }

    #[test]
    fn should_reject_negative_budget() {
        let mut props = envelope_props();
        props.budget = -1.0;

        let result = GroupOrderEnvelope::new(props);

        assert!(matches!(result, Err(GroupOrderError::InvalidBudget)));
    }

    #[test]
    fn should_reject_zero_team_size() {
        let mut props = envelope_props();
        props.team_size = 0;

        let result = GroupOrderEnvelope::new(props);

        assert!(matches!(result, Err(GroupOrderError::InvalidTeamSize)));
    }

    #[test]
    fn should_match_manager_identity() {
        let envelope = GroupOrderEnvelope::new(envelope_props()).unwrap();

        assert!(envelope.is_managed_by(&UserId::new("manager-1")));
        assert!(!envelope.is_managed_by(&UserId::new("someone-else")));
    }

    #[test]
    fn should_compute_line_item_total_from_price_and_quantity() {
        let item = GroupOrderLineItem::new(NewLineItemProps {
            group_order_id: Uuid::new_v4(),
            person_name: "Alice".to_string(),
            product_id: "sandwich-1".to_string(),
            product_name: "Club Sandwich".to_string(),
            description: None,
            price: 10.0,
            category: Some("sandwiches".to_string()),
            image: None,
            quantity: 3,
        })
        .unwrap();

        assert_eq!(item.total_spent, 30.0);
    }

    #[test]
    fn should_allow_zero_quantity_but_reject_negative() {
        let props = |quantity| NewLineItemProps {
            group_order_id: Uuid::new_v4(),
            person_name: "Alice".to_string(),
            product_id: "sandwich-1".to_string(),
            product_name: "Club Sandwich".to_string(),
            description: None,
            price: 10.0,
            category: None,
            image: None,
            quantity,
        };

        assert!(GroupOrderLineItem::new(props(0)).is_ok());
        assert!(matches!(
            GroupOrderLineItem::new(props(-1)),
            Err(GroupOrderError::InvalidQuantity)
        ));
    }

    #[test]
    fn should_reject_blank_person_name() {
        let result = GroupOrderLineItem::new(NewLineItemProps {
            group_order_id: Uuid::new_v4(),
            person_name: "   ".to_string(),
            product_id: "sandwich-1".to_string(),
            product_name: "Club Sandwich".to_string(),
            description: None,
            price: 10.0,
            category: None,
            image: None,
            quantity: 1,
        });

        assert!(matches!(result, Err(GroupOrderError::PersonNameEmpty)));
    }

    #[test]
    fn should_recompute_total_when_quantity_changes() {
        let item = GroupOrderLineItem::new(NewLineItemProps {
            group_order_id: Uuid::new_v4(),
            person_name: "Bob".to_string(),
            product_id: "salad-2".to_string(),
            product_name: "Greek Salad".to_string(),
            description: None,
            price: 8.0,
            category: None,
            image: None,
            quantity: 1,
        })
        .unwrap();

        let updated = item.with_quantity(4);

        assert_eq!(updated.quantity, 4);
        assert_eq!(updated.total_spent, 32.0);
        assert_eq!(updated.id, item.id);
    }
}
