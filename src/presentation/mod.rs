// Presentation layer - Projections consumed by an embedding UI
pub mod controls;
