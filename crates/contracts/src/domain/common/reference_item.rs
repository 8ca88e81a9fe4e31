use super::AggregateId;

/// Трейт для элемента справочника, загружаемого с сервера
///
/// Все справочники формы (контрагенты, склады, счета, организации,
/// типы цен, номенклатура) имеют серверный ID и наименование.
pub trait ReferenceItem {
    /// Тип идентификатора элемента
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить наименование записи
    fn name(&self) -> &str;

    // ============================================================================
    // Метаданные справочника (статические данные)
    // ============================================================================

    /// Индекс справочника в системе (например, "a003")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции в API (например, "contragents")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Контрагент")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Контрагенты")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя справочника (например, "a003_contragents")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Найти элемент по ID в загруженном списке
    fn find_by_id(items: &[Self], id: Self::Id) -> Option<&Self>
    where
        Self: Sized,
    {
        items.iter().find(|item| item.id() == id)
    }
}
