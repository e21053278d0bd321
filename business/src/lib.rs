pub mod application {
    pub mod group_order {
        pub mod add_item;
        pub mod complete;
        pub mod create;
        pub mod finalize;
        pub mod get;
        pub mod share_link;
        pub mod summary;
        pub mod update_settings;
        pub mod watch;
        #[cfg(test)]
        pub mod test_support;
    }
    pub mod menu {
        pub mod get_menu;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod group_order {
        pub mod aggregate;
        pub mod errors;
        pub mod feed;
        pub mod lifecycle;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod complete;
            pub mod create;
            pub mod finalize;
            pub mod get;
            pub mod share_link;
            pub mod summary;
            pub mod update_settings;
            pub mod watch;
        }
    }
    pub mod menu {
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_menu;
        }
    }
    pub mod venue {
        pub mod model;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
