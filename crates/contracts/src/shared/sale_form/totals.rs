use super::SelectionSet;
use crate::shared::money::format_price;

/// Количество выбранных товаров
pub fn count(selection: &SelectionSet) -> usize {
    selection.len()
}

/// Сумма цен выбранных товаров (нет цены — ноль)
pub fn sum(selection: &SelectionSet) -> f64 {
    selection.iter().map(|p| p.price_or_zero()).sum()
}

/// Итоги для нижней панели формы. Считаются заново при каждом чтении.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub sum: f64,
}

impl Totals {
    pub fn of(selection: &SelectionSet) -> Self {
        Self {
            count: count(selection),
            sum: sum(selection),
        }
    }

    pub fn sum_label(&self) -> String {
        format_price(self.sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_nomenclature::Product;

    #[test]
    fn test_empty_selection() {
        let totals = Totals::of(&SelectionSet::new());
        assert_eq!(totals, Totals { count: 0, sum: 0.0 });
        assert_eq!(totals.sum_label(), "0 ₽");
    }

    #[test]
    fn test_sum_matches_fold_over_prices() {
        let mut set = SelectionSet::new();
        let prices = [Some(10.0), None, Some(2.5), Some(-3.0), Some(100.0)];
        for (i, price) in prices.iter().enumerate() {
            set.insert(Product::new(i as i64, format!("P{}", i), *price));
        }

        let expected: f64 = set.iter().fold(0.0, |acc, p| acc + p.price.filter(|v| *v > 0.0).unwrap_or(0.0));
        assert_eq!(sum(&set), expected);
        assert_eq!(sum(&set), 112.5);
        assert_eq!(count(&set), set.list().len());
    }

    #[test]
    fn test_reflects_mutation_immediately() {
        let mut set = SelectionSet::new();
        set.insert(Product::new(1, "A", Some(10.0)));
        assert_eq!(Totals::of(&set).sum, 10.0);
        set.insert(Product::new(2, "B", Some(20.0)));
        assert_eq!(Totals::of(&set).sum, 30.0);
        set.remove(crate::domain::a004_nomenclature::ProductId::new(1));
        assert_eq!(Totals::of(&set), Totals { count: 1, sum: 20.0 });
    }
}
