use crate::domain::a004_nomenclature::{Product, ProductId};

/// Выбранные товары документа: порядок добавления, без повторов по ID
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    entries: Vec<Product>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить товар в конец. Повторное добавление того же ID ничего не меняет.
    pub fn insert(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.entries.push(product);
        true
    }

    /// Удалить товар по ID; порядок остальных сохраняется
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.entries.iter().position(|p| p.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    pub fn list(&self) -> &[Product] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &SelectionSet) -> Vec<i64> {
        set.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_insert_keeps_order_and_rejects_duplicates() {
        let mut set = SelectionSet::new();
        assert!(set.insert(Product::new(3, "C", None)));
        assert!(set.insert(Product::new(1, "A", Some(10.0))));
        assert!(!set.insert(Product::new(3, "C renamed", Some(99.0))));

        assert_eq!(ids(&set), vec![3, 1]);
        assert_eq!(set.list()[0].name, "C");
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut set = SelectionSet::new();
        for id in 1..=4 {
            set.insert(Product::new(id, format!("P{}", id), None));
        }
        assert!(set.remove(ProductId::new(2)));
        assert_eq!(ids(&set), vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut set = SelectionSet::new();
        set.insert(Product::new(1, "A", None));
        let before = set.clone();
        assert!(!set.remove(ProductId::new(42)));
        assert_eq!(set, before);
    }

    #[test]
    fn test_insert_then_remove_restores_sequence() {
        let mut set = SelectionSet::new();
        set.insert(Product::new(1, "A", None));
        set.insert(Product::new(2, "B", None));
        let before = set.clone();

        let p = Product::new(5, "E", Some(1.0));
        set.insert(p.clone());
        set.remove(p.id);
        assert_eq!(set, before);
    }
}
