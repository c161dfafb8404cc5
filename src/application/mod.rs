// Application layer - Use cases and ports
pub mod chart_surface;
pub mod controller;
pub mod feed;
pub mod group_store;
