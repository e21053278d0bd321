use std::sync::Arc;

use url::Url;

use logger::TracingLogger;
use menu_catalog::{MenuApiClient, MenuCatalogHttp};
use persistence::group_order::feed::{BroadcastLineItemFeed, start_reconciliation};
use persistence::group_order::repository::GroupOrderRepositoryPostgres;

use business::application::group_order::add_item::AddLineItemUseCaseImpl;
use business::application::group_order::complete::CompleteOrderUseCaseImpl;
use business::application::group_order::create::CreateGroupOrderUseCaseImpl;
use business::application::group_order::finalize::FinalizeOrderUseCaseImpl;
use business::application::group_order::get::GetGroupOrderUseCaseImpl;
use business::application::group_order::share_link::ShareLinkUseCaseImpl;
use business::application::group_order::summary::GetOrderSummaryUseCaseImpl;
use business::application::group_order::update_settings::UpdateOrderSettingsUseCaseImpl;
use business::application::group_order::watch::WatchOrderUseCaseImpl;
use business::application::menu::get_menu::GetMenuUseCaseImpl;
use business::domain::venue::model::VenueDirectory;

use crate::config::link_config::LinkConfig;
use crate::config::menu_config::MenuConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub group_order_api: crate::api::group_order::routes::GroupOrderApi,
    pub menu_api: crate::api::menu::routes::MenuApi,
    pub venue_api: crate::api::venue::routes::VenueApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let feed = Arc::new(BroadcastLineItemFeed::new());
        start_reconciliation(pool.clone(), feed.clone());

        let repository = Arc::new(GroupOrderRepositoryPostgres::new(pool, feed.clone()));

        let menu_config = MenuConfig::from_env();
        let catalog = Arc::new(MenuCatalogHttp::new(MenuApiClient::new(
            menu_config.base_url,
        )));

        let venue_directory = Arc::new(VenueDirectory::builtin());

        let link_config = LinkConfig::from_env();
        let origin = Url::parse(&link_config.public_origin)?;

        // Group order use cases
        let create_use_case = Arc::new(CreateGroupOrderUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetGroupOrderUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_settings_use_case = Arc::new(UpdateOrderSettingsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddLineItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let summary_use_case = Arc::new(GetOrderSummaryUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let finalize_use_case = Arc::new(FinalizeOrderUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let complete_use_case = Arc::new(CompleteOrderUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let share_link_use_case = Arc::new(ShareLinkUseCaseImpl {
            repository: repository.clone(),
            origin,
            logger: logger.clone(),
        });
        let watch_use_case = Arc::new(WatchOrderUseCaseImpl {
            repository,
            feed,
            logger: logger.clone(),
        });

        // Menu use cases
        let get_menu_use_case = Arc::new(GetMenuUseCaseImpl { catalog, logger });

        let group_order_api = crate::api::group_order::routes::GroupOrderApi::new(
            create_use_case,
            get_use_case,
            update_settings_use_case,
            add_item_use_case,
            summary_use_case,
            finalize_use_case,
            complete_use_case,
            share_link_use_case,
            watch_use_case,
        );

        let menu_api = crate::api::menu::routes::MenuApi::new(get_menu_use_case);
        let venue_api = crate::api::venue::routes::VenueApi::new(venue_directory);

        Ok(Self {
            health_api,
            group_order_api,
            menu_api,
            venue_api,
        })
    }
}
