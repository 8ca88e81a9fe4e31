use crate::domain::a002_organization::Organization;
use crate::domain::a003_counterparty::Counterparty;
use crate::domain::a004_nomenclature::Product;
use crate::domain::a025_warehouse::Warehouse;
use crate::domain::a026_paybox::Paybox;
use crate::domain::a027_price_type::PriceType;
use crate::domain::common::ReferenceItem;

/// Одна из шести коллекций API справочников
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceEndpoint {
    Counterparties,
    Warehouses,
    Payboxes,
    Organizations,
    PriceTypes,
    Nomenclature,
}

impl ReferenceEndpoint {
    pub const ALL: [ReferenceEndpoint; 6] = [
        ReferenceEndpoint::Counterparties,
        ReferenceEndpoint::Warehouses,
        ReferenceEndpoint::Payboxes,
        ReferenceEndpoint::Organizations,
        ReferenceEndpoint::PriceTypes,
        ReferenceEndpoint::Nomenclature,
    ];

    /// Сегмент пути коллекции в API
    pub fn path(&self) -> &'static str {
        match self {
            ReferenceEndpoint::Counterparties => Counterparty::collection_name(),
            ReferenceEndpoint::Warehouses => Warehouse::collection_name(),
            ReferenceEndpoint::Payboxes => Paybox::collection_name(),
            ReferenceEndpoint::Organizations => Organization::collection_name(),
            ReferenceEndpoint::PriceTypes => PriceType::collection_name(),
            ReferenceEndpoint::Nomenclature => Product::collection_name(),
        }
    }

    /// Полный адрес запроса; токен передаётся параметром `token`
    pub fn url(&self, base_url: &str, token: &str) -> String {
        format!(
            "{}/{}/?token={}",
            base_url.trim_end_matches('/'),
            self.path(),
            urlencoding::encode(token)
        )
    }
}

impl std::fmt::Display for ReferenceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
