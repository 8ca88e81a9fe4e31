//! Поиск и выбор товаров
//!
//! Два пути выбора с разной строгостью:
//! - ввод текста выбирает товар только при точном совпадении наименования
//!   (например, вставка полного названия или выбор из подсказок);
//! - подтверждение (Enter) выбирает первый товар, наименование которого
//!   содержит запрос без учёта регистра.

use super::SelectionSet;
use crate::domain::a004_nomenclature::{Product, ProductId};

/// Результат попытки выбора товара
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSelection {
    /// Товар добавлен, строка поиска очищена
    Inserted(ProductId),
    /// Товар найден, но уже выбран; ничего не изменилось
    AlreadySelected(ProductId),
    /// Подходящего товара нет; строка поиска осталась как была
    NoMatch,
}

/// Первый товар с наименованием, в точности равным запросу
pub fn find_exact<'a>(query: &str, catalog: &'a [Product]) -> Option<&'a Product> {
    catalog.iter().find(|p| p.name_equals(query))
}

/// Первый товар, наименование которого содержит запрос без учёта регистра
pub fn find_first_containing<'a>(query: &str, catalog: &'a [Product]) -> Option<&'a Product> {
    let query = query.to_lowercase();
    catalog.iter().find(|p| p.name_contains_lower(&query))
}

/// Подсказки для поля поиска: все подходящие товары в порядке каталога
pub fn filtered_products<'a>(query: &str, catalog: &'a [Product]) -> Vec<&'a Product> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| p.name_contains_lower(&query))
        .collect()
}

fn select(
    found: Option<&Product>,
    product_query: &mut String,
    selection: &mut SelectionSet,
) -> ProductSelection {
    let Some(product) = found else {
        return ProductSelection::NoMatch;
    };
    if !selection.insert(product.clone()) {
        return ProductSelection::AlreadySelected(product.id);
    }
    log::debug!("Product {} selected", product.id.value());
    product_query.clear();
    ProductSelection::Inserted(product.id)
}

/// Изменение текста поиска товара
pub fn on_query_change(
    query: &str,
    catalog: &[Product],
    product_query: &mut String,
    selection: &mut SelectionSet,
) -> ProductSelection {
    *product_query = query.to_string();
    select(find_exact(query, catalog), product_query, selection)
}

/// Подтверждение ввода (Enter)
pub fn on_confirm(
    catalog: &[Product],
    product_query: &mut String,
    selection: &mut SelectionSet,
) -> ProductSelection {
    let found = find_first_containing(product_query.as_str(), catalog);
    select(found, product_query, selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Milk 1L", Some(80.0)),
            Product::new(2, "Milk 2L", Some(150.0)),
            Product::new(3, "Хлеб белый", None),
        ]
    }

    #[test]
    fn test_confirm_selects_first_case_insensitive_match() {
        let catalog = catalog();
        let mut query = "milk".to_string();
        let mut selection = SelectionSet::new();

        let result = on_confirm(&catalog, &mut query, &mut selection);

        assert_eq!(result, ProductSelection::Inserted(ProductId::new(1)));
        assert_eq!(query, "");
        assert_eq!(selection.list()[0].name, "Milk 1L");
    }

    #[test]
    fn test_confirm_handles_cyrillic_case() {
        let catalog = catalog();
        let mut query = "ХЛЕБ".to_string();
        let mut selection = SelectionSet::new();
        assert_eq!(
            on_confirm(&catalog, &mut query, &mut selection),
            ProductSelection::Inserted(ProductId::new(3))
        );
    }

    #[test]
    fn test_typing_exact_name_selects_without_confirm() {
        let catalog = catalog();
        let mut query = String::new();
        let mut selection = SelectionSet::new();

        let result = on_query_change("Milk 2L", &catalog, &mut query, &mut selection);

        assert_eq!(result, ProductSelection::Inserted(ProductId::new(2)));
        assert_eq!(query, "");
        assert!(selection.contains(ProductId::new(2)));
    }

    #[test]
    fn test_typing_partial_or_wrong_case_only_updates_query() {
        let catalog = catalog();
        let mut query = String::new();
        let mut selection = SelectionSet::new();

        assert_eq!(
            on_query_change("milk 2l", &catalog, &mut query, &mut selection),
            ProductSelection::NoMatch
        );
        assert_eq!(query, "milk 2l");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_confirm_without_match_keeps_query() {
        let catalog = catalog();
        let mut query = "кефир".to_string();
        let mut selection = SelectionSet::new();

        assert_eq!(
            on_confirm(&catalog, &mut query, &mut selection),
            ProductSelection::NoMatch
        );
        assert_eq!(query, "кефир");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_already_selected_is_noop_and_keeps_query() {
        let catalog = catalog();
        let mut selection = SelectionSet::new();
        selection.insert(catalog[0].clone());
        let before = selection.clone();

        let mut query = "milk".to_string();
        assert_eq!(
            on_confirm(&catalog, &mut query, &mut selection),
            ProductSelection::AlreadySelected(ProductId::new(1))
        );
        assert_eq!(query, "milk");

        let mut typed = String::new();
        assert_eq!(
            on_query_change("Milk 1L", &catalog, &mut typed, &mut selection),
            ProductSelection::AlreadySelected(ProductId::new(1))
        );
        assert_eq!(typed, "Milk 1L");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_empty_query_confirm_takes_first_product() {
        let catalog = catalog();
        let mut query = String::new();
        let mut selection = SelectionSet::new();
        assert_eq!(
            on_confirm(&catalog, &mut query, &mut selection),
            ProductSelection::Inserted(ProductId::new(1))
        );
    }

    #[test]
    fn test_filtered_products() {
        let catalog = catalog();
        let names: Vec<&str> = filtered_products("MILK", &catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Milk 1L", "Milk 2L"]);
        assert_eq!(filtered_products("", &catalog).len(), 3);
        assert!(filtered_products("сыр", &catalog).is_empty());
    }
}
