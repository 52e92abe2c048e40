use async_trait::async_trait;
use riskdir_core::{DepartmentFilter, RiskOwner, RiskOwnerStore};
use sqlx::Row;
use sqlx::postgres::PgPoolOptions;

/// The one query this service issues.
///
/// The left join exists to resolve the department name/ID ambiguity: a
/// user's `department` column may hold either a department's display name
/// or its ID rendered as text. The join never filters; the WHERE clause
/// accepts a match against either side, case-insensitively. DISTINCT keeps
/// a user from appearing twice when both branches match through the join.
/// The department value is bound, never interpolated.
const RISK_OWNERS_BY_DEPARTMENT_SQL: &str = "\
SELECT DISTINCT u.id, u.full_name, u.department \
FROM users u \
LEFT JOIN departments d \
  ON u.department = d.department_name OR u.department = d.id::text \
WHERE u.role = 'risk_owner' \
  AND u.status = 'approved' \
  AND (LOWER(u.department) = LOWER($1) OR LOWER(d.department_name) = LOWER($1)) \
ORDER BY u.full_name ASC";

/// Postgres-backed implementation of [`RiskOwnerStore`].
pub struct PostgresStore {
    pool: sqlx::PgPool,
}

impl PostgresStore {
    pub async fn new(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool, e.g. one shared with other components.
    pub fn from_pool(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RiskOwnerStore for PostgresStore {
    async fn risk_owners_in_department(
        &self,
        department: &DepartmentFilter,
    ) -> anyhow::Result<Vec<RiskOwner>> {
        let recs = sqlx::query(RISK_OWNERS_BY_DEPARTMENT_SQL)
            .bind(department.as_str())
            .fetch_all(&self.pool)
            .await?;

        let mut rows = Vec::with_capacity(recs.len());
        for r in recs {
            rows.push(RiskOwner {
                id: r.try_get("id")?,
                full_name: r.try_get("full_name")?,
                department: r.try_get("department")?,
            });
        }
        tracing::debug!(
            department = department.as_str(),
            count = rows.len(),
            "risk owner lookup"
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The query semantics live in the statement text, so pin them there.

    #[test]
    fn query_filters_on_role_and_status() {
        assert!(RISK_OWNERS_BY_DEPARTMENT_SQL.contains("u.role = 'risk_owner'"));
        assert!(RISK_OWNERS_BY_DEPARTMENT_SQL.contains("u.status = 'approved'"));
    }

    #[test]
    fn query_matches_department_case_insensitively_on_both_branches() {
        assert!(RISK_OWNERS_BY_DEPARTMENT_SQL.contains("LOWER(u.department) = LOWER($1)"));
        assert!(RISK_OWNERS_BY_DEPARTMENT_SQL.contains("LOWER(d.department_name) = LOWER($1)"));
    }

    #[test]
    fn query_joins_on_name_or_id() {
        assert!(
            RISK_OWNERS_BY_DEPARTMENT_SQL
                .contains("ON u.department = d.department_name OR u.department = d.id::text")
        );
    }

    #[test]
    fn query_deduplicates_and_orders_by_full_name() {
        assert!(RISK_OWNERS_BY_DEPARTMENT_SQL.starts_with("SELECT DISTINCT"));
        assert!(RISK_OWNERS_BY_DEPARTMENT_SQL.ends_with("ORDER BY u.full_name ASC"));
    }

    #[test]
    fn query_binds_a_single_placeholder() {
        assert!(RISK_OWNERS_BY_DEPARTMENT_SQL.contains("$1"));
        assert!(!RISK_OWNERS_BY_DEPARTMENT_SQL.contains("$2"));
    }
}
