use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::menu::use_cases::get_menu::GetMenuUseCase;

use crate::api::menu::dto::MenuItemResponse;
use crate::api::tags::ApiTags;

pub struct MenuApi {
    get_menu_use_case: Arc<dyn GetMenuUseCase>,
}

impl MenuApi {
    pub fn new(get_menu_use_case: Arc<dyn GetMenuUseCase>) -> Self {
        Self { get_menu_use_case }
    }
}

/// Menu catalog API
///
/// Exposes the purchasable items participants can add to a group order.
/// Never fails: catalog outages are absorbed by a fallback item list.
#[OpenApi]
impl MenuApi {
    /// List the current menu
    #[oai(path = "/menu", method = "get", tag = "ApiTags::Menu")]
    async fn get_menu(&self) -> Json<Vec<MenuItemResponse>> {
        let items = self.get_menu_use_case.execute().await;
        Json(items.into_iter().map(|i| i.into()).collect())
    }
}
