use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::group_order::aggregate::{CartItem, GroupTotals};
use business::domain::group_order::model::{GroupOrderEnvelope, GroupOrderLineItem};
use business::domain::group_order::use_cases::share_link::ShareLinks;
use business::domain::group_order::use_cases::summary::{OrderSummary, PersonCartSummary};
use business::domain::group_order::value_objects::{DeliveryType, OrderStatus, PaymentMethod};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "draft")]
    Draft,
    #[oai(rename = "waiting_for_payment")]
    WaitingForPayment,
    #[oai(rename = "finalized")]
    Finalized,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Draft => OrderStatusDto::Draft,
            OrderStatus::WaitingForPayment => OrderStatusDto::WaitingForPayment,
            OrderStatus::Finalized => OrderStatusDto::Finalized,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum DeliveryTypeDto {
    #[oai(rename = "delivery")]
    Delivery,
    #[oai(rename = "collection")]
    Collection,
}

impl From<DeliveryType> for DeliveryTypeDto {
    fn from(delivery_type: DeliveryType) -> Self {
        match delivery_type {
            DeliveryType::Delivery => DeliveryTypeDto::Delivery,
            DeliveryType::Collection => DeliveryTypeDto::Collection,
        }
    }
}

impl From<DeliveryTypeDto> for DeliveryType {
    fn from(dto: DeliveryTypeDto) -> Self {
        match dto {
            DeliveryTypeDto::Delivery => DeliveryType::Delivery,
            DeliveryTypeDto::Collection => DeliveryType::Collection,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum PaymentMethodDto {
    #[oai(rename = "card")]
    Card,
    #[oai(rename = "invoice")]
    Invoice,
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Card => PaymentMethodDto::Card,
            PaymentMethod::Invoice => PaymentMethodDto::Invoice,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(dto: PaymentMethodDto) -> Self {
        match dto {
            PaymentMethodDto::Card => PaymentMethod::Card,
            PaymentMethodDto::Invoice => PaymentMethod::Invoice,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateGroupOrderRequest {
    /// Per-person budget in currency units (must be >= 0)
    pub budget: f64,
    /// Expected number of participants (must be >= 1)
    pub team_size: i32,
    /// Free-text ordering deadline shown to participants
    #[oai(skip_serializing_if_is_none)]
    pub deadline: Option<String>,
    /// Venue the order will be placed with
    pub venue_id: String,
    /// Requested delivery or collection time
    pub time: DateTime<Utc>,
    /// Fulfilment mode
    pub delivery_type: DeliveryTypeDto,
    /// Delivery address (when delivery_type is 'delivery')
    #[oai(skip_serializing_if_is_none)]
    pub delivery_address: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderSettingsRequest {
    /// New per-person budget
    #[oai(skip_serializing_if_is_none)]
    pub budget: Option<f64>,
    /// New expected team size
    #[oai(skip_serializing_if_is_none)]
    pub team_size: Option<i32>,
    /// New free-text deadline
    #[oai(skip_serializing_if_is_none)]
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct AddLineItemRequest {
    /// Free-text participant label the item is booked under
    pub person_name: String,
    /// Menu product identifier
    pub product_id: String,
    /// Product name snapshot
    pub product_name: String,
    /// Product description snapshot
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price snapshot
    pub price: f64,
    /// Product category snapshot
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Image reference snapshot
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Quantity delta: positive adds, negative removes
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CompleteOrderRequest {
    /// Payment method chosen at checkout
    #[oai(skip_serializing_if_is_none)]
    pub payment_method: Option<PaymentMethodDto>,
    /// Whether invoice payment has been approved for this account
    #[oai(default)]
    pub invoice_approved: bool,
}

#[derive(Debug, Clone, Object)]
pub struct GroupOrderResponse {
    /// Order unique identifier (doubles as the share token)
    pub id: String,
    /// Per-person budget
    pub budget: f64,
    /// Expected number of participants
    pub team_size: i32,
    /// Free-text ordering deadline
    #[oai(skip_serializing_if_is_none)]
    pub deadline: Option<String>,
    /// Venue identifier
    pub venue_id: String,
    /// Requested delivery or collection time
    pub time: DateTime<Utc>,
    /// Fulfilment mode
    pub delivery_type: DeliveryTypeDto,
    /// Delivery address
    #[oai(skip_serializing_if_is_none)]
    pub delivery_address: Option<String>,
    /// Payment method (set at checkout)
    #[oai(skip_serializing_if_is_none)]
    pub payment_method: Option<PaymentMethodDto>,
    /// Lifecycle status
    pub status: OrderStatusDto,
    /// Manager user id
    #[oai(skip_serializing_if_is_none)]
    pub created_by: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<GroupOrderEnvelope> for GroupOrderResponse {
    fn from(envelope: GroupOrderEnvelope) -> Self {
        Self {
            id: envelope.id.to_string(),
            budget: envelope.budget,
            team_size: envelope.team_size,
            deadline: envelope.deadline,
            venue_id: envelope.venue_id,
            time: envelope.time,
            delivery_type: envelope.delivery_type.into(),
            delivery_address: envelope.delivery_address,
            payment_method: envelope.payment_method.map(|m| m.into()),
            status: envelope.status.into(),
            created_by: envelope.created_by.map(|u| u.to_string()),
            created_at: envelope.created_at,
            updated_at: envelope.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LineItemResponse {
    /// Line item unique identifier
    pub id: String,
    /// Owning group order
    pub group_order_id: String,
    /// Participant label
    pub person_name: String,
    /// Menu product identifier
    pub product_id: String,
    /// Product name snapshot
    pub product_name: String,
    /// Unit price snapshot
    pub price: f64,
    /// Stored quantity after applying the delta
    pub quantity: i32,
    /// Price times quantity
    pub total_spent: f64,
}

impl From<GroupOrderLineItem> for LineItemResponse {
    fn from(item: GroupOrderLineItem) -> Self {
        Self {
            id: item.id.to_string(),
            group_order_id: item.group_order_id.to_string(),
            person_name: item.person_name,
            product_id: item.product_id,
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
            total_spent: item.total_spent,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Menu product identifier
    pub product_id: String,
    /// Product name snapshot
    pub name: String,
    /// Product description snapshot
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price snapshot
    pub price: f64,
    /// Product category snapshot
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Image reference snapshot
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Folded quantity (always > 0)
    pub quantity: i32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            image: item.image,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PersonCartResponse {
    /// Participant label
    pub person_name: String,
    /// Items in this person's cart
    pub items: Vec<CartItemResponse>,
    /// Amount this person has spent
    pub total_spent: f64,
    /// Budget left for this person, floored at zero
    pub remaining_budget: f64,
}

impl From<PersonCartSummary> for PersonCartResponse {
    fn from(summary: PersonCartSummary) -> Self {
        Self {
            person_name: summary.cart.person_name.clone(),
            items: summary.cart.items.into_iter().map(|i| i.into()).collect(),
            total_spent: summary.cart.total_spent,
            remaining_budget: summary.remaining_budget,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct GroupTotalsResponse {
    /// Budget times team size
    pub total_budget: f64,
    /// Sum of all carts
    pub spent: f64,
    /// Total budget minus spent (may be negative)
    pub remaining: f64,
}

impl From<GroupTotals> for GroupTotalsResponse {
    fn from(totals: GroupTotals) -> Self {
        Self {
            total_budget: totals.total_budget,
            spent: totals.spent,
            remaining: totals.remaining,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderSummaryResponse {
    /// The order envelope
    pub order: GroupOrderResponse,
    /// One cart per participant, in first-seen order
    pub carts: Vec<PersonCartResponse>,
    /// Group-level totals
    pub totals: GroupTotalsResponse,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            order: summary.envelope.into(),
            carts: summary.carts.into_iter().map(|c| c.into()).collect(),
            totals: summary.totals.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShareLinksResponse {
    /// Link participants use to add items
    pub participant_url: String,
    /// Link opening the manager dashboard
    pub manager_url: String,
}

impl From<ShareLinks> for ShareLinksResponse {
    fn from(links: ShareLinks) -> Self {
        Self {
            participant_url: links.participant_url,
            manager_url: links.manager_url,
        }
    }
}
