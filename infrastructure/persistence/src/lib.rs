pub mod db;
pub mod group_order {
    pub mod entity;
    pub mod feed;
    pub mod repository;
}
