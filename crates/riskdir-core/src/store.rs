use crate::domain::{DepartmentFilter, RiskOwner};
use async_trait::async_trait;

/// Read-only lookup capability backed by the external store.
///
/// The handler takes this as an injected capability so the database can be
/// substituted with a test double.
#[async_trait]
pub trait RiskOwnerStore: Send + Sync {
    /// Return approved risk owners belonging to the given department,
    /// deduplicated by user and ordered by `full_name` ascending.
    async fn risk_owners_in_department(
        &self,
        department: &DepartmentFilter,
    ) -> anyhow::Result<Vec<RiskOwner>>;
}
