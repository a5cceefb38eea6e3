use std::cmp::Ordering;

use crate::inventory::{Category, Item, SortField, SortOrder};

/// Category filter for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

/// Client-side copy of the collection plus the view parameters.
///
/// The collection here is authoritative for rendering only; it is
/// re-fetched in full after every mutation rather than patched locally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub items: Vec<Item>,
    pub filter: CategoryFilter,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub loading: bool,
    pub error: Option<String>,
}

impl ViewState {
    /// The filtered and sorted subset currently displayed, recomputed
    /// from the full collection every time.
    ///
    /// The sort is stable: items with equal sort-field values keep their
    /// relative order from the underlying collection.
    pub fn derived_view(&self) -> Vec<Item> {
        let mut view: Vec<Item> = self
            .items
            .iter()
            .filter(|item| self.filter.matches(item))
            .cloned()
            .collect();

        view.sort_by(|a, b| {
            let ordering = compare_by_field(a, b, self.sort_field);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        view
    }

    /// Sum of price x quantity over the FULL collection, independent of
    /// the active filter and sort.
    pub fn total_value(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum()
    }
}

/// Native ordering per field: strings lexicographic, numbers numeric,
/// categories by their wire label.
fn compare_by_field(a: &Item, b: &Item, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Category => a.category.as_str().cmp(b.category.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, quantity: u32, price: f64, category: Category) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            quantity,
            price,
            category,
        }
    }

    fn sample_state() -> ViewState {
        ViewState {
            items: vec![
                item("a", "Pen", 10, 1.5, Category::OfficeSupplies),
                item("b", "Desk", 2, 120.0, Category::Furniture),
                item("c", "Mouse", 5, 25.0, Category::Electronics),
            ],
            ..ViewState::default()
        }
    }

    #[test]
    fn test_derived_view_filters_by_category() {
        let state = ViewState {
            filter: CategoryFilter::Only(Category::Furniture),
            ..sample_state()
        };

        let view = state.derived_view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Desk");
    }

    #[test]
    fn test_derived_view_sorts_by_selected_field() {
        let state = ViewState {
            sort_field: SortField::Price,
            ..sample_state()
        };

        let names: Vec<_> = state.derived_view().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Pen", "Mouse", "Desk"]);

        let state = ViewState {
            sort_field: SortField::Price,
            sort_order: SortOrder::Desc,
            ..state
        };
        let names: Vec<_> = state.derived_view().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Desk", "Mouse", "Pen"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let state = ViewState {
            items: vec![
                item("1", "Cable", 3, 5.0, Category::Electronics),
                item("2", "Adapter", 7, 5.0, Category::Electronics),
                item("3", "Stand", 1, 5.0, Category::Other),
            ],
            sort_field: SortField::Price,
            ..ViewState::default()
        };

        let ids: Vec<_> = state.derived_view().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_total_value_ignores_filter() {
        let state = ViewState {
            items: vec![item("a", "Pen", 10, 1.5, Category::OfficeSupplies)],
            filter: CategoryFilter::Only(Category::Furniture),
            ..ViewState::default()
        };

        assert!(state.derived_view().is_empty());
        assert_eq!(state.total_value(), 15.0);
    }

    #[test]
    fn test_total_value_sums_full_collection() {
        let state = sample_state();
        assert_eq!(state.total_value(), 10.0 * 1.5 + 2.0 * 120.0 + 5.0 * 25.0);
    }
}
