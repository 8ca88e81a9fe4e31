use crate::domain::common::{AggregateId, ReferenceItem};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Касса / счёт поступления денег
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayboxId(pub i64);

impl PayboxId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for PayboxId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(PayboxId::new)
    }
}

// ============================================================================
// Entity
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paybox {
    pub id: PayboxId,
    #[serde(default)]
    pub name: String,
}

impl Paybox {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: PayboxId::new(id),
            name: name.into(),
        }
    }
}

impl ReferenceItem for Paybox {
    type Id = PayboxId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a026"
    }

    fn collection_name() -> &'static str {
        "payboxes"
    }

    fn element_name() -> &'static str {
        "Счёт поступления"
    }

    fn list_name() -> &'static str {
        "Счета"
    }
}
