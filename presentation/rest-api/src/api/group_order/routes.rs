use std::sync::Arc;

use futures::StreamExt;
use futures::stream::BoxStream;
use poem_openapi::{OpenApi, param::Path, payload::EventStream, payload::Json};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use business::domain::group_order::use_cases::add_item::{AddLineItemParams, AddLineItemUseCase};
use business::domain::group_order::use_cases::complete::{
    CompleteOrderParams, CompleteOrderUseCase,
};
use business::domain::group_order::use_cases::create::{
    CreateGroupOrderParams, CreateGroupOrderUseCase,
};
use business::domain::group_order::use_cases::finalize::{
    FinalizeOrderParams, FinalizeOrderUseCase,
};
use business::domain::group_order::use_cases::get::{GetGroupOrderParams, GetGroupOrderUseCase};
use business::domain::group_order::use_cases::share_link::{ShareLinkParams, ShareLinkUseCase};
use business::domain::group_order::use_cases::summary::{
    GetOrderSummaryParams, GetOrderSummaryUseCase,
};
use business::domain::group_order::use_cases::update_settings::{
    UpdateOrderSettingsParams, UpdateOrderSettingsUseCase,
};
use business::domain::group_order::use_cases::watch::{WatchOrderParams, WatchOrderUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::group_order::dto::{
    AddLineItemRequest, CompleteOrderRequest, CreateGroupOrderRequest, GroupOrderResponse,
    LineItemResponse, OrderSummaryResponse, ShareLinksResponse, UpdateOrderSettingsRequest,
};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct GroupOrderApi {
    create_use_case: Arc<dyn CreateGroupOrderUseCase>,
    get_use_case: Arc<dyn GetGroupOrderUseCase>,
    update_settings_use_case: Arc<dyn UpdateOrderSettingsUseCase>,
    add_item_use_case: Arc<dyn AddLineItemUseCase>,
    summary_use_case: Arc<dyn GetOrderSummaryUseCase>,
    finalize_use_case: Arc<dyn FinalizeOrderUseCase>,
    complete_use_case: Arc<dyn CompleteOrderUseCase>,
    share_link_use_case: Arc<dyn ShareLinkUseCase>,
    watch_use_case: Arc<dyn WatchOrderUseCase>,
}

impl GroupOrderApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateGroupOrderUseCase>,
        get_use_case: Arc<dyn GetGroupOrderUseCase>,
        update_settings_use_case: Arc<dyn UpdateOrderSettingsUseCase>,
        add_item_use_case: Arc<dyn AddLineItemUseCase>,
        summary_use_case: Arc<dyn GetOrderSummaryUseCase>,
        finalize_use_case: Arc<dyn FinalizeOrderUseCase>,
        complete_use_case: Arc<dyn CompleteOrderUseCase>,
        share_link_use_case: Arc<dyn ShareLinkUseCase>,
        watch_use_case: Arc<dyn WatchOrderUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            update_settings_use_case,
            add_item_use_case,
            summary_use_case,
            finalize_use_case,
            complete_use_case,
            share_link_use_case,
            watch_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "group_order.invalid_id".to_string(),
    })
}

/// Group order coordination API
///
/// A manager creates an order envelope, shares its link with the team, and
/// participants book items against their per-person budget. Reads of an
/// envelope only require knowing its id; lifecycle actions require the
/// signed-in manager.
#[OpenApi]
impl GroupOrderApi {
    /// Create a group order
    ///
    /// Opens a new draft order owned by the signed-in manager.
    #[oai(path = "/group-orders", method = "post", tag = "ApiTags::GroupOrders")]
    async fn create_group_order(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateGroupOrderRequest>,
    ) -> CreateGroupOrderResponse {
        if !auth.0.is_manager() {
            return CreateGroupOrderResponse::Forbidden(Json(ErrorResponse {
                name: "Forbidden".to_string(),
                message: "group_order.not_authorized".to_string(),
            }));
        }

        let params = CreateGroupOrderParams {
            budget: body.0.budget,
            team_size: body.0.team_size,
            deadline: body.0.deadline,
            venue_id: body.0.venue_id,
            time: body.0.time,
            delivery_type: body.0.delivery_type.into(),
            delivery_address: body.0.delivery_address,
            created_by: Some(UserId::new(&auth.0.uid)),
        };

        match self.create_use_case.execute(params).await {
            Ok(envelope) => CreateGroupOrderResponse::Created(Json(envelope.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateGroupOrderResponse::BadRequest(json),
                    _ => CreateGroupOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a group order
    ///
    /// Public within the team: knowing the id (from the share link) is the
    /// only requirement.
    #[oai(
        path = "/group-orders/:id",
        method = "get",
        tag = "ApiTags::GroupOrders"
    )]
    async fn get_group_order(&self, id: Path<String>) -> GetGroupOrderResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetGroupOrderResponse::BadRequest(invalid_id()),
        };

        match self
            .get_use_case
            .execute(GetGroupOrderParams { id: uuid })
            .await
        {
            Ok(envelope) => GetGroupOrderResponse::Ok(Json(envelope.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetGroupOrderResponse::NotFound(json),
                    _ => GetGroupOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Update order settings
    ///
    /// Manager-only edit of budget, team size and deadline while the order
    /// is still a draft. Absent fields keep their current value.
    #[oai(
        path = "/group-orders/:id",
        method = "patch",
        tag = "ApiTags::GroupOrders"
    )]
    async fn update_order_settings(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateOrderSettingsRequest>,
    ) -> UpdateOrderSettingsResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateOrderSettingsResponse::BadRequest(invalid_id()),
        };

        let params = UpdateOrderSettingsParams {
            id: uuid,
            caller: UserId::new(&auth.0.uid),
            budget: body.0.budget,
            team_size: body.0.team_size,
            deadline: body.0.deadline,
        };

        match self.update_settings_use_case.execute(params).await {
            Ok(envelope) => UpdateOrderSettingsResponse::Ok(Json(envelope.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateOrderSettingsResponse::BadRequest(json),
                    403 => UpdateOrderSettingsResponse::Forbidden(json),
                    404 => UpdateOrderSettingsResponse::NotFound(json),
                    409 => UpdateOrderSettingsResponse::Conflict(json),
                    _ => UpdateOrderSettingsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add or remove a line item
    ///
    /// Books a quantity delta of one product under a free-text person label.
    /// Positive deltas are checked against the person's remaining budget;
    /// negative deltas lower an existing row (never below zero).
    #[oai(
        path = "/group-orders/:id/items",
        method = "post",
        tag = "ApiTags::GroupOrders"
    )]
    async fn add_line_item(
        &self,
        id: Path<String>,
        body: Json<AddLineItemRequest>,
    ) -> AddLineItemResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return AddLineItemResponse::BadRequest(invalid_id()),
        };

        let params = AddLineItemParams {
            group_order_id: uuid,
            person_name: body.0.person_name,
            product_id: body.0.product_id,
            product_name: body.0.product_name,
            description: body.0.description,
            price: body.0.price,
            category: body.0.category,
            image: body.0.image,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => AddLineItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddLineItemResponse::BadRequest(json),
                    404 => AddLineItemResponse::NotFound(json),
                    409 => AddLineItemResponse::Conflict(json),
                    422 => AddLineItemResponse::UnprocessableEntity(json),
                    _ => AddLineItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the order summary
    ///
    /// Per-person carts and group totals, re-derived from the full line-item
    /// set on every call.
    #[oai(
        path = "/group-orders/:id/summary",
        method = "get",
        tag = "ApiTags::GroupOrders"
    )]
    async fn get_order_summary(&self, id: Path<String>) -> GetOrderSummaryResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetOrderSummaryResponse::BadRequest(invalid_id()),
        };

        match self
            .summary_use_case
            .execute(GetOrderSummaryParams { id: uuid })
            .await
        {
            Ok(summary) => GetOrderSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderSummaryResponse::NotFound(json),
                    _ => GetOrderSummaryResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the share links
    ///
    /// Participant and manager entry-point URLs for this order.
    #[oai(
        path = "/group-orders/:id/share-link",
        method = "get",
        tag = "ApiTags::GroupOrders"
    )]
    async fn get_share_link(&self, id: Path<String>) -> GetShareLinkResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetShareLinkResponse::BadRequest(invalid_id()),
        };

        match self
            .share_link_use_case
            .execute(ShareLinkParams { id: uuid })
            .await
        {
            Ok(links) => GetShareLinkResponse::Ok(Json(links.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShareLinkResponse::NotFound(json),
                    _ => GetShareLinkResponse::InternalError(json),
                }
            }
        }
    }

    /// Finalize the order
    ///
    /// Manager action: locks participant edits and moves the order to
    /// waiting_for_payment. Requires at least one non-empty cart.
    #[oai(
        path = "/group-orders/:id/finalize",
        method = "post",
        tag = "ApiTags::GroupOrders"
    )]
    async fn finalize_order(&self, auth: FirebaseBearer, id: Path<String>) -> FinalizeOrderResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return FinalizeOrderResponse::BadRequest(invalid_id()),
        };

        match self
            .finalize_use_case
            .execute(FinalizeOrderParams {
                id: uuid,
                caller: UserId::new(&auth.0.uid),
            })
            .await
        {
            Ok(envelope) => FinalizeOrderResponse::Ok(Json(envelope.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => FinalizeOrderResponse::Forbidden(json),
                    404 => FinalizeOrderResponse::NotFound(json),
                    409 => FinalizeOrderResponse::Conflict(json),
                    _ => FinalizeOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Complete the order
    ///
    /// Manager checkout: records the payment method and moves the order to
    /// finalized. Invoice payment requires prior approval on the account.
    #[oai(
        path = "/group-orders/:id/complete",
        method = "post",
        tag = "ApiTags::GroupOrders"
    )]
    async fn complete_order(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<CompleteOrderRequest>,
    ) -> CompleteOrderResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return CompleteOrderResponse::BadRequest(invalid_id()),
        };

        match self
            .complete_use_case
            .execute(CompleteOrderParams {
                id: uuid,
                caller: UserId::new(&auth.0.uid),
                payment_method: body.0.payment_method.map(|m| m.into()),
                invoice_approved: body.0.invoice_approved,
            })
            .await
        {
            Ok(envelope) => CompleteOrderResponse::Ok(Json(envelope.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => CompleteOrderResponse::Forbidden(json),
                    404 => CompleteOrderResponse::NotFound(json),
                    409 => CompleteOrderResponse::Conflict(json),
                    _ => CompleteOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Watch the order
    ///
    /// Server-sent events: emits a fresh order summary immediately and then
    /// again whenever the line items change. Delivery is best-effort; each
    /// event carries the full summary, so a missed event is healed by the
    /// next one.
    #[oai(
        path = "/group-orders/:id/events",
        method = "get",
        tag = "ApiTags::GroupOrders"
    )]
    async fn watch_order(&self, id: Path<String>) -> WatchOrderResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return WatchOrderResponse::BadRequest(invalid_id()),
        };

        let receiver = match self
            .watch_use_case
            .execute(WatchOrderParams { id: uuid })
            .await
        {
            Ok(receiver) => receiver,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    404 => WatchOrderResponse::NotFound(json),
                    _ => WatchOrderResponse::InternalError(json),
                };
            }
        };

        let summary_use_case = self.summary_use_case.clone();
        let stream = futures::stream::unfold(
            (receiver, summary_use_case, uuid, true),
            |(mut receiver, summary_use_case, id, initial)| async move {
                if !initial {
                    loop {
                        match receiver.recv().await {
                            // Payloads are ignored: the summary is re-read in
                            // full, so a lagged receiver loses nothing.
                            Ok(_) | Err(RecvError::Lagged(_)) => break,
                            Err(RecvError::Closed) => return None,
                        }
                    }
                }

                let snapshot = summary_use_case
                    .execute(GetOrderSummaryParams { id })
                    .await
                    .ok()?;

                Some((
                    OrderSummaryResponse::from(snapshot),
                    (receiver, summary_use_case, id, false),
                ))
            },
        )
        .boxed();

        WatchOrderResponse::Ok(EventStream::new(stream))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateGroupOrderResponse {
    #[oai(status = 201)]
    Created(Json<GroupOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetGroupOrderResponse {
    #[oai(status = 200)]
    Ok(Json<GroupOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<GroupOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddLineItemResponse {
    #[oai(status = 200)]
    Ok(Json<LineItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<OrderSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShareLinkResponse {
    #[oai(status = 200)]
    Ok(Json<ShareLinksResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FinalizeOrderResponse {
    #[oai(status = 200)]
    Ok(Json<GroupOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CompleteOrderResponse {
    #[oai(status = 200)]
    Ok(Json<GroupOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum WatchOrderResponse {
    #[oai(status = 200)]
    Ok(EventStream<BoxStream<'static, OrderSummaryResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
