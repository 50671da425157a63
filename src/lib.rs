pub mod config;
pub mod logger;
pub mod server;
pub mod content;
pub mod post_store;
pub mod navigation;
pub mod scroll;
pub mod navigator;
pub mod projects;
pub mod view;
mod paginator;
pub mod query_string;
mod text_utils;
#[cfg(test)]
mod test_data;
