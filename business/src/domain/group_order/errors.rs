#[derive(Debug, thiserror::Error)]
pub enum GroupOrderError {
    #[error("group_order.not_found")]
    NotFound,
    #[error("group_order.empty_order")]
    EmptyOrder,
    #[error("group_order.invalid_transition")]
    InvalidTransition,
    #[error("group_order.payment_method_required")]
    PaymentMethodRequired,
    #[error("group_order.invoice_not_approved")]
    InvoiceNotApproved,
    #[error("group_order.locked")]
    OrderLocked,
    #[error("group_order.budget_exceeded")]
    BudgetExceeded { shortfall: f64 },
    #[error("group_order.invalid_budget")]
    InvalidBudget,
    #[error("group_order.invalid_team_size")]
    InvalidTeamSize,
    #[error("group_order.invalid_quantity")]
    InvalidQuantity,
    #[error("group_order.person_name_empty")]
    PersonNameEmpty,
    #[error("group_order.not_authorized")]
    NotAuthorized,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
