use super::{counterparty_matcher, product_selector, ProductSelection, SelectionSet, Totals};
use crate::domain::a002_organization::{Organization, OrganizationId};
use crate::domain::a003_counterparty::Counterparty;
use crate::domain::a004_nomenclature::{Product, ProductId};
use crate::domain::a025_warehouse::{Warehouse, WarehouseId};
use crate::domain::a026_paybox::{Paybox, PayboxId};
use crate::domain::a027_price_type::{PriceType, PriceTypeId};
use crate::domain::common::ReferenceItem;
use crate::usecases::u001_load_references::{
    LoadError, LoadOutcome, LoadTicket, ReferenceBundle, ReferenceStore,
};

/// Текст полей поиска ровно в том виде, в каком его ввёл оператор
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub phone_query: String,
    pub product_query: String,
}

/// Реквизиты шапки документа из выпадающих списков.
///
/// Только хранятся: создание продажи в форму не входит.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentHeader {
    pub paybox_id: Option<PayboxId>,
    pub warehouse_id: Option<WarehouseId>,
    pub organization_id: Option<OrganizationId>,
    pub price_type_id: Option<PriceTypeId>,
}

impl DocumentHeader {
    /// Сбросить реквизиты, которых нет в новом наборе справочников
    fn retain_loaded(&mut self, bundle: &ReferenceBundle) {
        self.paybox_id = self
            .paybox_id
            .filter(|id| Paybox::find_by_id(&bundle.payboxes, *id).is_some());
        self.warehouse_id = self
            .warehouse_id
            .filter(|id| Warehouse::find_by_id(&bundle.warehouses, *id).is_some());
        self.organization_id = self
            .organization_id
            .filter(|id| Organization::find_by_id(&bundle.organizations, *id).is_some());
        self.price_type_id = self
            .price_type_id
            .filter(|id| PriceType::find_by_id(&bundle.price_types, *id).is_some());
    }
}

/// Вся форма продажи как одно значение.
///
/// Хранятся только справочники, текст поиска, выбранные товары и шапка.
/// Выбранный контрагент, подсказки и итоги не хранятся, а вычисляются
/// при каждом обращении, поэтому не могут устареть.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleForm {
    store: ReferenceStore,
    search: SearchState,
    selection: SelectionSet,
    header: DocumentHeader,
}

impl SaleForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================================
    // Справочники
    // ============================================================================

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn references(&self) -> &ReferenceBundle {
        self.store.bundle()
    }

    pub fn begin_load(&mut self, token: &str) -> Result<LoadTicket, LoadError> {
        self.store.begin_load(token)
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ReferenceBundle, LoadError>,
    ) -> LoadOutcome {
        let outcome = self.store.complete_load(ticket, result);
        if matches!(outcome, LoadOutcome::Applied) {
            self.header.retain_loaded(self.store.bundle());
        }
        outcome
    }

    // ============================================================================
    // Контрагент
    // ============================================================================

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn set_phone_query(&mut self, query: &str) {
        self.search.phone_query = query.to_string();
    }

    pub fn selected_counterparty(&self) -> Option<&Counterparty> {
        counterparty_matcher::match_counterparty(
            &self.search.phone_query,
            &self.references().counterparties,
        )
    }

    pub fn counterparty_suggestions(&self) -> Vec<&Counterparty> {
        counterparty_matcher::counterparty_suggestions(
            &self.search.phone_query,
            &self.references().counterparties,
        )
    }

    // ============================================================================
    // Товары
    // ============================================================================

    pub fn set_product_query(&mut self, query: &str) -> ProductSelection {
        product_selector::on_query_change(
            query,
            &self.store.bundle().products,
            &mut self.search.product_query,
            &mut self.selection,
        )
    }

    pub fn confirm_product(&mut self) -> ProductSelection {
        product_selector::on_confirm(
            &self.store.bundle().products,
            &mut self.search.product_query,
            &mut self.selection,
        )
    }

    pub fn filtered_products(&self) -> Vec<&Product> {
        product_selector::filtered_products(
            &self.search.product_query,
            &self.references().products,
        )
    }

    pub fn remove_product(&mut self, id: ProductId) -> bool {
        self.selection.remove(id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.selection)
    }

    // ============================================================================
    // Шапка документа
    // ============================================================================

    pub fn header(&self) -> DocumentHeader {
        self.header
    }

    pub fn set_paybox(&mut self, id: Option<PayboxId>) -> bool {
        let known = id.map_or(true, |id| {
            Paybox::find_by_id(&self.references().payboxes, id).is_some()
        });
        if known {
            self.header.paybox_id = id;
        }
        known
    }

    pub fn set_warehouse(&mut self, id: Option<WarehouseId>) -> bool {
        let known = id.map_or(true, |id| {
            Warehouse::find_by_id(&self.references().warehouses, id).is_some()
        });
        if known {
            self.header.warehouse_id = id;
        }
        known
    }

    pub fn set_organization(&mut self, id: Option<OrganizationId>) -> bool {
        let known = id.map_or(true, |id| {
            Organization::find_by_id(&self.references().organizations, id).is_some()
        });
        if known {
            self.header.organization_id = id;
        }
        known
    }

    pub fn set_price_type(&mut self, id: Option<PriceTypeId>) -> bool {
        let known = id.map_or(true, |id| {
            PriceType::find_by_id(&self.references().price_types, id).is_some()
        });
        if known {
            self.header.price_type_id = id;
        }
        known
    }
}
