use crate::domain::common::{AggregateId, ReferenceItem};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Склад, с которого отгружается товар
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(pub i64);

impl WarehouseId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for WarehouseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(WarehouseId::new)
    }
}

// ============================================================================
// Entity
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    #[serde(default)]
    pub name: String,
}

impl Warehouse {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: WarehouseId::new(id),
            name: name.into(),
        }
    }
}

impl ReferenceItem for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a025"
    }

    fn collection_name() -> &'static str {
        "warehouses"
    }

    fn element_name() -> &'static str {
        "Склад отгрузки"
    }

    fn list_name() -> &'static str {
        "Склады"
    }
}
