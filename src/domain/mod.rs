// Domain layer - Pure models and computation
pub mod errors;
pub mod group;
pub mod record;
pub mod scale;
pub mod series;
pub mod stats;
pub mod style;
pub mod visibility;
pub mod window;
