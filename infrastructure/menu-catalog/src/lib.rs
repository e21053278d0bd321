pub mod catalog;
pub mod client;

pub use catalog::MenuCatalogHttp;
pub use client::MenuApiClient;
