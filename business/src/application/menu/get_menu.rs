use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::services::MenuCatalogService;
use crate::domain::menu::use_cases::get_menu::GetMenuUseCase;

pub struct GetMenuUseCaseImpl {
    pub catalog: Arc<dyn MenuCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMenuUseCase for GetMenuUseCaseImpl {
    async fn execute(&self) -> Vec<MenuItem> {
        let items = self.catalog.fetch_menu().await;
        self.logger
            .debug(&format!("Menu fetched: {} items", items.len()));
        items
    }
}
