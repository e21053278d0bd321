use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::group_order::errors::GroupOrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GroupOrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            GroupOrderError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "group_order.not_found".to_string(),
            ),
            GroupOrderError::EmptyOrder => (
                StatusCode::CONFLICT,
                "PreconditionFailed",
                "group_order.empty_order".to_string(),
            ),
            GroupOrderError::InvalidTransition => (
                StatusCode::CONFLICT,
                "PreconditionFailed",
                "group_order.invalid_transition".to_string(),
            ),
            GroupOrderError::PaymentMethodRequired => (
                StatusCode::CONFLICT,
                "PreconditionFailed",
                "group_order.payment_method_required".to_string(),
            ),
            GroupOrderError::InvoiceNotApproved => (
                StatusCode::CONFLICT,
                "PreconditionFailed",
                "group_order.invoice_not_approved".to_string(),
            ),
            GroupOrderError::OrderLocked => (
                StatusCode::CONFLICT,
                "PreconditionFailed",
                "group_order.locked".to_string(),
            ),
            GroupOrderError::BudgetExceeded { shortfall } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "BudgetExceeded",
                format!("group_order.budget_exceeded: {shortfall:.2}"),
            ),
            GroupOrderError::InvalidBudget => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "group_order.invalid_budget".to_string(),
            ),
            GroupOrderError::InvalidTeamSize => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "group_order.invalid_team_size".to_string(),
            ),
            GroupOrderError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "group_order.invalid_quantity".to_string(),
            ),
            GroupOrderError::PersonNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "group_order.person_name_empty".to_string(),
            ),
            GroupOrderError::NotAuthorized => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "group_order.not_authorized".to_string(),
            ),
            GroupOrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = GroupOrderError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "group_order.not_found");
    }

    #[test]
    fn should_map_lifecycle_conflicts_to_409() {
        for error in [
            GroupOrderError::EmptyOrder,
            GroupOrderError::InvalidTransition,
            GroupOrderError::PaymentMethodRequired,
            GroupOrderError::InvoiceNotApproved,
            GroupOrderError::OrderLocked,
        ] {
            let (status, _) = error.into_error_response();
            assert_eq!(status, StatusCode::CONFLICT);
        }
    }

    #[test]
    fn should_report_shortfall_on_budget_exceeded() {
        let (status, json) =
            GroupOrderError::BudgetExceeded { shortfall: 3.5 }.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.name, "BudgetExceeded");
        assert!(json.0.message.contains("3.50"));
    }
}
