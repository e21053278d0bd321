use async_trait::async_trait;

use crate::domain::menu::model::MenuItem;

#[async_trait]
pub trait GetMenuUseCase: Send + Sync {
    async fn execute(&self) -> Vec<MenuItem>;
}
