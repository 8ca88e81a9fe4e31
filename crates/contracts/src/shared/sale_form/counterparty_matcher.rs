//! Поиск контрагента по телефону
//!
//! Выбор и подсказки намеренно разной строгости: выбранным контрагент
//! становится только при точном совпадении телефона, а в подсказки
//! попадают все, чей телефон содержит введённую строку.

use crate::domain::a003_counterparty::Counterparty;

/// Контрагент, телефон которого в точности равен запросу.
/// При нескольких совпадениях побеждает первый по порядку списка.
pub fn match_counterparty<'a>(
    phone_query: &str,
    counterparties: &'a [Counterparty],
) -> Option<&'a Counterparty> {
    counterparties.iter().find(|c| c.phone_equals(phone_query))
}

/// Подсказки: контрагенты, телефон которых содержит запрос.
/// Контрагенты без телефона не подсказываются.
pub fn counterparty_suggestions<'a>(
    phone_query: &str,
    counterparties: &'a [Counterparty],
) -> Vec<&'a Counterparty> {
    counterparties
        .iter()
        .filter(|c| c.phone_contains(phone_query))
        .collect()
}
