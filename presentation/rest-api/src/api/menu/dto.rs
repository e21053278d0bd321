use poem_openapi::Object;

use business::domain::menu::model::MenuItem;

#[derive(Debug, Clone, Object)]
pub struct MenuItemResponse {
    /// Product identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Product category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Image reference
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            image: item.image,
        }
    }
}
