use crate::domain::common::{AggregateId, ReferenceItem};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterpartyId(pub i64);

impl CounterpartyId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CounterpartyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(CounterpartyId::new)
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Контрагент (покупатель), ищется по номеру телефона
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    pub id: CounterpartyId,

    #[serde(default)]
    pub name: String,

    /// Телефон хранится как пришёл с сервера, без нормализации
    #[serde(default)]
    pub phone: Option<String>,
}

impl Counterparty {
    pub fn new(id: i64, name: impl Into<String>, phone: Option<&str>) -> Self {
        Self {
            id: CounterpartyId::new(id),
            name: name.into(),
            phone: phone.map(str::to_string),
        }
    }

    /// Точное совпадение телефона (с учётом всех символов форматирования)
    pub fn phone_equals(&self, query: &str) -> bool {
        self.phone.as_deref() == Some(query)
    }

    /// Телефон содержит строку запроса (с учётом регистра)
    pub fn phone_contains(&self, query: &str) -> bool {
        self.phone
            .as_deref()
            .map(|phone| phone.contains(query))
            .unwrap_or(false)
    }
}

impl ReferenceItem for Counterparty {
    type Id = CounterpartyId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "contragents"
    }

    fn element_name() -> &'static str {
        "Контрагент"
    }

    fn list_name() -> &'static str {
        "Контрагенты"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"id": 7, "name": "ООО Ромашка", "phone": "+79991234567", "inn": "7700000000"}"#;
        let c: Counterparty = serde_json::from_str(json).unwrap();
        assert_eq!(c, Counterparty::new(7, "ООО Ромашка", Some("+79991234567")));
    }

    #[test]
    fn test_deserialize_missing_phone_and_null_phone() {
        let missing: Counterparty = serde_json::from_str(r#"{"id": 1, "name": "A"}"#).unwrap();
        let null: Counterparty =
            serde_json::from_str(r#"{"id": 2, "name": "B", "phone": null}"#).unwrap();
        assert_eq!(missing.phone, None);
        assert_eq!(null.phone, None);
    }

    #[test]
    fn test_phone_matching_is_literal() {
        let c = Counterparty::new(1, "A", Some("+7 (999) 123-45-67"));
        assert!(c.phone_equals("+7 (999) 123-45-67"));
        assert!(!c.phone_equals("+79991234567"));
        assert!(c.phone_contains("(999)"));
        assert!(!Counterparty::new(2, "B", None).phone_contains(""));
    }
}
