// Port for persisted group definitions
use crate::domain::errors::DashboardResult;
use crate::domain::group::Group;

/// Storage writes are synchronous and full-overwrite, last writer wins.
pub trait GroupStore: Send + Sync {
    /// Load the persisted list. Missing or corrupt storage yields an empty
    /// list, never an error.
    fn load(&self) -> Vec<Group>;

    /// Overwrite the persisted list with `groups`.
    fn save(&self, groups: &[Group]) -> DashboardResult<()>;
}
