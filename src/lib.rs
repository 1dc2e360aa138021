pub mod app_state;
pub mod chat;
pub mod config;
pub mod content;
pub mod data_connector;
pub mod inquiry;
pub mod notify;
pub mod server;
pub mod sitemap;
