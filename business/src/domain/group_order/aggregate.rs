use super::model::GroupOrderLineItem;

/// A menu product snapshot plus the quantity a person has added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub image: Option<String>,
    pub quantity: i32,
}

/// Derived per-person cart. Never persisted; recomputed on every read by
/// folding the envelope's line items.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCart {
    pub person_name: String,
    pub items: Vec<CartItem>,
    pub total_spent: f64,
}

impl PersonCart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    pub total_budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

/// Folds an envelope's line items into one cart per distinct person label.
///
/// Items are processed in ascending creation-time order (stable on ties, so
/// store insertion order wins). Duplicate (person, product) rows - possible
/// under concurrent writers - are folded by summing quantities. Entries whose
/// folded quantity is zero are dropped from the output cart. Output carts
/// follow first-seen order of person_name.
///
/// Pure and idempotent: no I/O, same input always yields the same output.
pub fn aggregate(line_items: &[GroupOrderLineItem]) -> Vec<PersonCart> {
    let mut ordered: Vec<&GroupOrderLineItem> = line_items.iter().collect();
    ordered.sort_by_key(|item| item.created_at);

    let mut carts: Vec<PersonCart> = Vec::new();

    for item in ordered {
        let idx = match carts
            .iter()
            .position(|cart| cart.person_name == item.person_name)
        {
            Some(idx) => idx,
            None => {
                carts.push(PersonCart {
                    person_name: item.person_name.clone(),
                    items: Vec::new(),
                    total_spent: 0.0,
                });
                carts.len() - 1
            }
        };
        let cart = &mut carts[idx];

        match cart
            .items
            .iter_mut()
            .find(|entry| entry.product_id == item.product_id)
        {
            Some(entry) => entry.quantity += item.quantity,
            None => cart.items.push(CartItem {
                product_id: item.product_id.clone(),
                name: item.product_name.clone(),
                description: item.description.clone(),
                price: item.price,
                category: item.category.clone(),
                image: item.image.clone(),
                quantity: item.quantity,
            }),
        }
    }

    for cart in &mut carts {
        cart.items.retain(|entry| entry.quantity > 0);
        cart.total_spent = cart
            .items
            .iter()
            .map(|entry| entry.price * f64::from(entry.quantity))
            .sum();
    }

    carts
}

/// Per-person budget left. Floored at zero; overspend is surfaced by the
/// advisory check, never as a negative remainder.
pub fn remaining_budget(per_person_budget: f64, cart: &PersonCart) -> f64 {
    (per_person_budget - cart.total_spent).max(0.0)
}

/// Advisory admission check before a participant adds an item. Enforced at
/// the edge against a snapshot, not in the store: two concurrent adds can
/// both pass against stale state and jointly overspend.
pub fn can_afford(per_person_budget: f64, cart: &PersonCart, added_cost: f64) -> bool {
    per_person_budget - cart.total_spent >= added_cost
}

/// Envelope-wide totals. Group remaining is deliberately NOT floored: unlike
/// the per-person remainder it goes negative when the group overspends.
pub fn group_totals(per_person_budget: f64, team_size: i32, carts: &[PersonCart]) -> GroupTotals {
    let total_budget = per_person_budget * f64::from(team_size);
    let spent: f64 = carts.iter().map(|cart| cart.total_spent).sum();

    GroupTotals {
        total_budget,
        spent,
        remaining: total_budget - spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group_order::model::{GroupOrderLineItem, NewLineItemProps};
    use chrono::{Duration, Utc};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn line_item(
        person: &str,
        product: &str,
        price: f64,
        quantity: i32,
        offset_secs: i64,
    ) -> GroupOrderLineItem {
        let mut item = GroupOrderLineItem::new(NewLineItemProps {
            group_order_id: Uuid::nil(),
            person_name: person.to_string(),
            product_id: product.to_string(),
            product_name: product.to_string(),
            description: None,
            price,
            category: None,
            image: None,
            quantity,
        })
        .unwrap();
        item.created_at = Utc::now() + Duration::seconds(offset_secs);
        item
    }

    #[test]
    fn should_return_empty_output_for_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn should_build_one_cart_per_person_in_first_seen_order() {
        let items = vec![
            line_item("Alice", "sandwich-1", 10.0, 1, 0),
            line_item("Bob", "sandwich-2", 8.0, 2, 1),
            line_item("Alice", "salad-1", 5.0, 1, 2),
        ];

        let carts = aggregate(&items);

        assert_eq!(carts.len(), 2);
        assert_eq!(carts[0].person_name, "Alice");
        assert_eq!(carts[1].person_name, "Bob");
        assert_eq!(carts[0].items.len(), 2);
        assert_eq!(carts[0].total_spent, 15.0);
    }

    #[test]
    fn should_fold_duplicate_person_product_rows_by_summing_quantities() {
        let items = vec![
            line_item("Alice", "sandwich-1", 10.0, 2, 0),
            line_item("Alice", "sandwich-1", 10.0, 3, 1),
        ];

        let carts = aggregate(&items);

        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].items.len(), 1);
        assert_eq!(carts[0].items[0].quantity, 5);
        assert_eq!(carts[0].total_spent, 50.0);
    }

    #[test]
    fn should_be_idempotent() {
        let items = vec![
            line_item("Alice", "sandwich-1", 10.0, 1, 0),
            line_item("Bob", "sandwich-2", 8.0, 2, 1),
        ];

        assert_eq!(aggregate(&items), aggregate(&items));
    }

    #[test]
    fn should_order_people_by_earliest_row_regardless_of_input_order() {
        let first = line_item("Alice", "sandwich-1", 10.0, 1, 0);
        let second = line_item("Bob", "sandwich-2", 8.0, 1, 5);

        let forward = aggregate(&[first.clone(), second.clone()]);
        let reversed = aggregate(&[second, first]);

        assert_eq!(forward, reversed);
        assert_eq!(forward[0].person_name, "Alice");
    }

    #[test]
    fn should_drop_entries_whose_folded_quantity_is_zero() {
        let items = vec![
            line_item("Alice", "sandwich-1", 10.0, 0, 0),
            line_item("Alice", "salad-1", 5.0, 2, 1),
        ];

        let carts = aggregate(&items);

        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].items.len(), 1);
        assert_eq!(carts[0].items[0].product_id, "salad-1");
        assert_eq!(carts[0].total_spent, 10.0);
    }

    #[test]
    fn should_floor_per_person_remaining_at_zero() {
        let carts = aggregate(&[line_item("Alice", "sandwich-1", 30.0, 1, 0)]);

        assert_eq!(remaining_budget(25.0, &carts[0]), 0.0);
    }

    #[test]
    fn should_allow_group_remaining_to_go_negative() {
        let carts = aggregate(&[line_item("Alice", "sandwich-1", 30.0, 2, 0)]);

        let totals = group_totals(25.0, 2, &carts);

        assert_eq!(totals.total_budget, 50.0);
        assert_eq!(totals.spent, 60.0);
        assert_eq!(totals.remaining, -10.0);
    }

    #[test]
    fn should_gate_adds_on_remaining_budget() {
        let carts = aggregate(&[line_item("Alice", "sandwich-1", 20.0, 1, 0)]);

        assert!(can_afford(25.0, &carts[0], 5.0));
        assert!(!can_afford(25.0, &carts[0], 5.01));
    }

    // Scenario: budget=25, team_size=2, Alice one 10.00 sandwich and Bob two
    // 8.00 sandwiches.
    #[test]
    fn should_compute_expected_totals_for_two_participants() {
        let items = vec![
            line_item("Alice", "sandwich-1", 10.0, 1, 0),
            line_item("Bob", "sandwich-2", 8.0, 2, 1),
        ];

        let carts = aggregate(&items);

        assert_eq!(carts[0].total_spent, 10.0);
        assert_eq!(remaining_budget(25.0, &carts[0]), 15.0);
        assert_eq!(carts[1].total_spent, 16.0);
        assert_eq!(remaining_budget(25.0, &carts[1]), 9.0);

        let totals = group_totals(25.0, 2, &carts);
        assert_eq!(totals.total_budget, 50.0);
        assert_eq!(totals.spent, 26.0);
        assert_eq!(totals.remaining, 24.0);
    }

    // Scenario: a racing duplicate row for the same (person, product) pair
    // folds into a single entry instead of showing twice.
    #[test]
    fn should_fold_racing_duplicate_row_into_single_entry() {
        let items = vec![
            line_item("Alice", "sandwich-1", 10.0, 1, 0),
            line_item("Bob", "sandwich-2", 8.0, 2, 1),
            line_item("Alice", "sandwich-1", 10.0, 1, 2),
        ];

        let carts = aggregate(&items);
        let alice = &carts[0];

        assert_eq!(alice.items.len(), 1);
        assert_eq!(alice.items[0].quantity, 2);
        assert_eq!(alice.total_spent, 20.0);
    }

    proptest! {
        // The fold is commutative over addition: any permutation of the
        // input yields the same carts.
        #[test]
        fn aggregate_is_permutation_invariant(
            quantities in proptest::collection::vec(0..5i32, 1..8),
            seed in 0..1000u64,
        ) {
            let items: Vec<GroupOrderLineItem> = quantities
                .iter()
                .enumerate()
                .map(|(i, &q)| {
                    line_item(
                        if i % 2 == 0 { "Alice" } else { "Bob" },
                        &format!("product-{}", i % 3),
                        4.0,
                        q,
                        i as i64,
                    )
                })
                .collect();

            let mut shuffled = items.clone();
            // Cheap deterministic shuffle.
            let len = shuffled.len();
            for i in 0..len {
                let j = ((seed as usize).wrapping_mul(31).wrapping_add(i * 7)) % len;
                shuffled.swap(i, j);
            }

            prop_assert_eq!(aggregate(&items), aggregate(&shuffled));
        }

        // Per-person remaining never goes negative, whatever the spend.
        #[test]
        fn remaining_budget_never_negative(budget in 0.0..500.0f64, spent in 0.0..1000.0f64) {
            let cart = PersonCart {
                person_name: "Alice".to_string(),
                items: Vec::new(),
                total_spent: spent,
            };

            prop_assert!(remaining_budget(budget, &cart) >= 0.0);
        }
    }
}
