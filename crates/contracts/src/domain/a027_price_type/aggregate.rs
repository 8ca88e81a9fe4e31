use crate::domain::common::{AggregateId, ReferenceItem};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Тип цены (прайс-лист)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTypeId(pub i64);

impl PriceTypeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for PriceTypeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(PriceTypeId::new)
    }
}

// ============================================================================
// Entity
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceType {
    pub id: PriceTypeId,
    #[serde(default)]
    pub name: String,
}

impl PriceType {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: PriceTypeId::new(id),
            name: name.into(),
        }
    }
}

impl ReferenceItem for PriceType {
    type Id = PriceTypeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a027"
    }

    fn collection_name() -> &'static str {
        "price_types"
    }

    fn element_name() -> &'static str {
        "Тип цены"
    }

    fn list_name() -> &'static str {
        "Типы цен"
    }
}
