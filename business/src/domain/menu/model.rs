/// A purchasable product from the external menu catalog. Read-only within
/// this system; line items carry a denormalized snapshot of these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub image: Option<String>,
}
