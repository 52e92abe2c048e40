use serde::Serialize;

/// A single row of the risk-owner lookup result.
///
/// `department` carries the raw stored value, which may be either a
/// department display name or a department ID rendered as text. Callers
/// receive it as stored, not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskOwner {
    pub id: i64,
    pub full_name: String,
    pub department: String,
}

/// Validated department query parameter.
///
/// Holds the trimmed, non-empty input string. Absent, empty, or
/// whitespace-only input parses to `None` rather than an error: a missing
/// filter is a valid request that yields an empty result without touching
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentFilter(String);

impl DepartmentFilter {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
