use async_trait::async_trait;
use serde::Deserialize;

use business::domain::menu::model::MenuItem;
use business::domain::menu::services::MenuCatalogService;

use crate::client::MenuApiClient;

/// The catalog API is loosely typed: some deployments wrap the items in an
/// object, older ones return a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMenuResponse {
    Wrapped { items: Vec<RawMenuRecord> },
    Bare(Vec<RawMenuRecord>),
}

impl RawMenuResponse {
    fn into_records(self) -> Vec<RawMenuRecord> {
        match self {
            RawMenuResponse::Wrapped { items } => items,
            RawMenuResponse::Bare(items) => items,
        }
    }
}

/// Known record shapes. Prices arrive as numbers or as strings depending on
/// the upstream version, and older records carry no id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMenuRecord {
    Priced {
        id: Option<String>,
        name: String,
        description: Option<String>,
        price: f64,
        category: Option<String>,
        image: Option<String>,
    },
    StringPriced {
        id: Option<String>,
        name: String,
        description: Option<String>,
        price: String,
        category: Option<String>,
        image: Option<String>,
    },
}

impl RawMenuRecord {
    fn normalize(self) -> Option<MenuItem> {
        let (id, name, description, price, category, image) = match self {
            RawMenuRecord::Priced {
                id,
                name,
                description,
                price,
                category,
                image,
            } => (id, name, description, Some(price), category, image),
            RawMenuRecord::StringPriced {
                id,
                name,
                description,
                price,
                category,
                image,
            } => {
                let parsed = price.trim().parse::<f64>().ok();
                (id, name, description, parsed, category, image)
            }
        };

        let price = price.filter(|p| p.is_finite() && *p >= 0.0)?;

        if name.trim().is_empty() {
            return None;
        }

        let id = id
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| slug(&name));

        Some(MenuItem {
            id,
            name,
            description,
            price,
            category,
            image,
        })
    }
}

fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

pub struct MenuCatalogHttp {
    client: MenuApiClient,
}

impl MenuCatalogHttp {
    pub fn new(client: MenuApiClient) -> Self {
        Self { client }
    }

    /// Parses a raw response body into menu items. None means the body could
    /// not be understood at all; an understood body with no usable records
    /// also yields None so the caller falls back.
    fn parse_body(body: &str) -> Option<Vec<MenuItem>> {
        let response: RawMenuResponse = serde_json::from_str(body).ok()?;

        let items: Vec<MenuItem> = response
            .into_records()
            .into_iter()
            .filter_map(RawMenuRecord::normalize)
            .collect();

        if items.is_empty() { None } else { Some(items) }
    }

    fn fallback_menu() -> Vec<MenuItem> {
        vec![
            MenuItem {
                id: "fallback-club-sandwich".to_string(),
                name: "Club Sandwich".to_string(),
                description: Some("Chicken, bacon and salad on toasted bread".to_string()),
                price: 7.5,
                category: Some("sandwiches".to_string()),
                image: None,
            },
            MenuItem {
                id: "fallback-caesar-salad".to_string(),
                name: "Caesar Salad".to_string(),
                description: Some("Romaine, parmesan and croutons".to_string()),
                price: 8.0,
                category: Some("salads".to_string()),
                image: None,
            },
            MenuItem {
                id: "fallback-margherita-flatbread".to_string(),
                name: "Margherita Flatbread".to_string(),
                description: Some("Tomato, mozzarella and basil".to_string()),
                price: 9.0,
                category: Some("mains".to_string()),
                image: None,
            },
            MenuItem {
                id: "fallback-sparkling-water".to_string(),
                name: "Sparkling Water".to_string(),
                description: None,
                price: 2.0,
                category: Some("drinks".to_string()),
                image: None,
            },
        ]
    }
}

#[async_trait]
impl MenuCatalogService for MenuCatalogHttp {
    async fn fetch_menu(&self) -> Vec<MenuItem> {
        let response = match self
            .client
            .client
            .get(self.client.menu_url())
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => response,
            _ => return Self::fallback_menu(),
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(_) => return Self::fallback_menu(),
        };

        Self::parse_body(&body).unwrap_or_else(Self::fallback_menu)
    }
}
