// Dashboard error types

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Feed error: {0}")]
    Fetch(String),

    #[error("Dataset is empty or has no sensor fields")]
    EmptyDataset,

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid group: {0}")]
    InvalidGroup(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
