//! Общие типы и логика формы продажи.
//!
//! Крейт не зависит от браузера: всё, что можно проверить без DOM
//! (справочники, загрузка "всё или ничего", поиск контрагента и товаров,
//! набор выбранных товаров, итоги), живёт здесь и тестируется нативно.

pub mod domain;
pub mod shared;
pub mod usecases;
