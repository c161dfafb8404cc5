// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_groups;
pub mod headless;
pub mod http_feed;
