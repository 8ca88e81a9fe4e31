use crate::domain::common::{AggregateId, ReferenceItem};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор организации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(pub i64);

impl OrganizationId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for OrganizationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(OrganizationId::new)
    }
}

// ============================================================================
// Entity
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    #[serde(default)]
    pub name: String,
}

impl Organization {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: OrganizationId::new(id),
            name: name.into(),
        }
    }
}

impl ReferenceItem for Organization {
    type Id = OrganizationId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "organizations"
    }

    fn element_name() -> &'static str {
        "Организация"
    }

    fn list_name() -> &'static str {
        "Организации"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let items = vec![Organization::new(1, "ИП Иванов"), Organization::new(2, "ООО Вектор")];
        let found = Organization::find_by_id(&items, OrganizationId::new(2));
        assert_eq!(found.map(|o| o.name.as_str()), Some("ООО Вектор"));
        assert!(Organization::find_by_id(&items, OrganizationId::new(3)).is_none());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Organization::full_name(), "a002_organizations");
    }
}
