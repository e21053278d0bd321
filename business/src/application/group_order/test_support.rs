use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::group_order::model::{GroupOrderEnvelope, GroupOrderLineItem, NewEnvelopeProps};
use crate::domain::group_order::repository::GroupOrderRepository;
use crate::domain::group_order::value_objects::{DeliveryType, OrderStatus};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub GroupOrderRepo {}

    #[async_trait]
    impl GroupOrderRepository for GroupOrderRepo {
        async fn save_envelope(&self, envelope: &GroupOrderEnvelope) -> Result<(), RepositoryError>;
        async fn get_envelope(&self, id: Uuid) -> Result<GroupOrderEnvelope, RepositoryError>;
        async fn list_line_items(&self, group_order_id: Uuid) -> Result<Vec<GroupOrderLineItem>, RepositoryError>;
        async fn find_line_item(&self, group_order_id: Uuid, person_name: &str, product_id: &str) -> Result<Option<GroupOrderLineItem>, RepositoryError>;
        async fn insert_line_item(&self, item: &GroupOrderLineItem) -> Result<(), RepositoryError>;
        async fn update_line_item(&self, item: &GroupOrderLineItem) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Draft envelope owned by "manager-1" with budget 25 and team size 2.
pub fn draft_envelope(id: Uuid) -> GroupOrderEnvelope {
    let mut envelope = GroupOrderEnvelope::new(NewEnvelopeProps {
        budget: 25.0,
        team_size: 2,
        deadline: None,
        venue_id: "shoreditch".to_string(),
        time: chrono::Utc::now(),
        delivery_type: DeliveryType::Delivery,
        delivery_address: None,
        created_by: Some(UserId::new("manager-1")),
    })
    .unwrap();
    envelope.id = id;
    envelope
}

pub fn envelope_with_status(id: Uuid, status: OrderStatus) -> GroupOrderEnvelope {
    let mut envelope = draft_envelope(id);
    envelope.status = status;
    envelope
}
