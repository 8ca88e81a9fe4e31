use crate::domain::common::{AggregateId, ReferenceItem};
use crate::shared::money::format_price;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ProductId::new)
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Товар из номенклатуры
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub name: String,

    /// Цена может отсутствовать в ответе сервера
    #[serde(default)]
    pub price: Option<f64>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
        }
    }

    /// Цена для отображения и итогов.
    ///
    /// Отсутствующая, отрицательная или нечисловая цена считается нулём.
    pub fn price_or_zero(&self) -> f64 {
        match self.price {
            Some(p) if p.is_finite() && p > 0.0 => p,
            _ => 0.0,
        }
    }

    /// Наименование совпадает с запросом посимвольно (с учётом регистра)
    pub fn name_equals(&self, query: &str) -> bool {
        self.name == query
    }

    /// Наименование содержит запрос без учёта регистра.
    ///
    /// `query_lower` должен быть уже приведён к нижнему регистру.
    pub fn name_contains_lower(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }

    /// Подпись для списка подсказок: "Молоко 1л - 89.90 ₽"
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, format_price(self.price_or_zero()))
    }
}

impl ReferenceItem for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "nomenclature"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Номенклатура"
    }
}
