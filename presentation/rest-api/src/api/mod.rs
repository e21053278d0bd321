pub mod error;
pub mod group_order;
pub mod health;
pub mod menu;
pub mod security;
pub mod tags;
pub mod venue;
