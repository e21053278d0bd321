use super::aggregate::PersonCart;
use super::errors::GroupOrderError;
use super::model::GroupOrderEnvelope;
use super::value_objects::{OrderStatus, PaymentMethod};

/// Forward-only lifecycle checks for the order envelope.
///
/// draft -> waiting_for_payment -> finalized. No skips, no way back. Every
/// function here is a pure precondition check; persistence of the resulting
/// status is the caller's job, and nothing is mutated on failure.

/// Manager "finalize" action: draft -> waiting_for_payment.
///
/// Requires at least one person cart with at least one item.
pub fn finalize(
    envelope: &GroupOrderEnvelope,
    carts: &[PersonCart],
) -> Result<OrderStatus, GroupOrderError> {
    if envelope.status != OrderStatus::Draft {
        return Err(GroupOrderError::InvalidTransition);
    }

    if !carts.iter().any(|cart| !cart.is_empty()) {
        return Err(GroupOrderError::EmptyOrder);
    }

    Ok(OrderStatus::WaitingForPayment)
}

/// Manager "complete" / checkout action: waiting_for_payment -> finalized.
///
/// Requires a payment method; invoice payment additionally requires the
/// approval flag, which lives in caller state and is never persisted.
pub fn complete(
    envelope: &GroupOrderEnvelope,
    payment_method: Option<PaymentMethod>,
    invoice_approved: bool,
) -> Result<OrderStatus, GroupOrderError> {
    if envelope.status != OrderStatus::WaitingForPayment {
        return Err(GroupOrderError::InvalidTransition);
    }

    let method = payment_method.ok_or(GroupOrderError::PaymentMethodRequired)?;

    if method == PaymentMethod::Invoice && !invoice_approved {
        return Err(GroupOrderError::InvoiceNotApproved);
    }

    Ok(OrderStatus::Finalized)
}

/// Participant line-item writes are allowed only while the envelope is in
/// draft. The observed surfaces disagreed on whether waiting_for_payment
/// still permits writes; blocking everything once checkout starts is the
/// policy chosen here (see DESIGN.md).
pub fn allows_participant_writes(status: OrderStatus) -> bool {
    status == OrderStatus::Draft
}

/// Manager edits of budget, team size and deadline are draft-only.
pub fn allows_settings_edit(status: OrderStatus) -> bool {
    status == OrderStatus::Draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group_order::aggregate::CartItem;
    use crate::domain::group_order::model::NewEnvelopeProps;
    use crate::domain::group_order::value_objects::DeliveryType;
    use chrono::Utc;

    fn envelope_with_status(status: OrderStatus) -> GroupOrderEnvelope {
        let mut envelope = GroupOrderEnvelope::new(NewEnvelopeProps {
            budget: 25.0,
            team_size: 2,
            deadline: None,
            venue_id: "venue-1".to_string(),
            time: Utc::now(),
            delivery_type: DeliveryType::Collection,
            delivery_address: None,
            created_by: None,
        })
        .unwrap();
        envelope.status = status;
        envelope
    }

    fn cart_with_one_item() -> PersonCart {
        PersonCart {
            person_name: "Alice".to_string(),
            items: vec![CartItem {
                product_id: "sandwich-1".to_string(),
                name: "Club Sandwich".to_string(),
                description: None,
                price: 10.0,
                category: None,
                image: None,
                quantity: 1,
            }],
            total_spent: 10.0,
        }
    }

    #[test]
    fn should_finalize_draft_with_at_least_one_filled_cart() {
        let envelope = envelope_with_status(OrderStatus::Draft);

        let next = finalize(&envelope, &[cart_with_one_item()]).unwrap();

        assert_eq!(next, OrderStatus::WaitingForPayment);
    }

    #[test]
    fn should_reject_finalize_with_no_carts() {
        let envelope = envelope_with_status(OrderStatus::Draft);

        let result = finalize(&envelope, &[]);

        assert!(matches!(result, Err(GroupOrderError::EmptyOrder)));
    }

    #[test]
    fn should_reject_finalize_when_all_carts_are_empty() {
        let envelope = envelope_with_status(OrderStatus::Draft);
        let empty = PersonCart {
            person_name: "Alice".to_string(),
            items: Vec::new(),
            total_spent: 0.0,
        };

        let result = finalize(&envelope, &[empty]);

        assert!(matches!(result, Err(GroupOrderError::EmptyOrder)));
    }

    #[test]
    fn should_not_finalize_from_waiting_or_finalized() {
        for status in [OrderStatus::WaitingForPayment, OrderStatus::Finalized] {
            let envelope = envelope_with_status(status);

            let result = finalize(&envelope, &[cart_with_one_item()]);

            assert!(matches!(result, Err(GroupOrderError::InvalidTransition)));
        }
    }

    #[test]
    fn should_require_payment_method_to_complete() {
        let envelope = envelope_with_status(OrderStatus::WaitingForPayment);

        let result = complete(&envelope, None, false);

        assert!(matches!(
            result,
            Err(GroupOrderError::PaymentMethodRequired)
        ));
    }

    #[test]
    fn should_complete_with_card_payment() {
        let envelope = envelope_with_status(OrderStatus::WaitingForPayment);

        let next = complete(&envelope, Some(PaymentMethod::Card), false).unwrap();

        assert_eq!(next, OrderStatus::Finalized);
    }

    #[test]
    fn should_require_approval_for_invoice_payment() {
        let envelope = envelope_with_status(OrderStatus::WaitingForPayment);

        let rejected = complete(&envelope, Some(PaymentMethod::Invoice), false);
        assert!(matches!(rejected, Err(GroupOrderError::InvoiceNotApproved)));

        let accepted = complete(&envelope, Some(PaymentMethod::Invoice), true).unwrap();
        assert_eq!(accepted, OrderStatus::Finalized);
    }

    #[test]
    fn should_not_complete_directly_from_draft() {
        let envelope = envelope_with_status(OrderStatus::Draft);

        let result = complete(&envelope, Some(PaymentMethod::Card), false);

        assert!(matches!(result, Err(GroupOrderError::InvalidTransition)));
    }

    #[test]
    fn should_allow_no_transition_out_of_finalized() {
        let envelope = envelope_with_status(OrderStatus::Finalized);

        assert!(finalize(&envelope, &[cart_with_one_item()]).is_err());
        assert!(complete(&envelope, Some(PaymentMethod::Card), true).is_err());
    }

    #[test]
    fn should_gate_participant_writes_to_draft_only() {
        assert!(allows_participant_writes(OrderStatus::Draft));
        assert!(!allows_participant_writes(OrderStatus::WaitingForPayment));
        assert!(!allows_participant_writes(OrderStatus::Finalized));
    }

    #[test]
    fn should_gate_settings_edits_to_draft_only() {
        assert!(allows_settings_edit(OrderStatus::Draft));
        assert!(!allows_settings_edit(OrderStatus::WaitingForPayment));
        assert!(!allows_settings_edit(OrderStatus::Finalized));
    }
}
