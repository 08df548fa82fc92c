//! Universal list helpers: search, sort and client-side pagination
use std::cmp::Ordering;

/// Trait for row types that can be sorted by one of their columns
pub trait Sortable {
    type Column: Copy + Eq;

    /// Compares two rows by the given column (ascending order)
    fn compare_by_column(&self, other: &Self, column: Self::Column) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-column sort state
///
/// Header clicks cycle unsorted -> ascending -> descending -> unsorted.
/// Clicking a different column starts over at ascending on that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    current: Option<(C, SortDirection)>,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<C: Copy + Eq> SortState<C> {
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self {
            current: Some((column, direction)),
        }
    }

    pub fn current(&self) -> Option<(C, SortDirection)> {
        self.current
    }

    pub fn direction_of(&self, column: C) -> Option<SortDirection> {
        match self.current {
            Some((c, dir)) if c == column => Some(dir),
            _ => None,
        }
    }

    pub fn toggle(&mut self, column: C) {
        self.current = match self.current {
            Some((c, SortDirection::Ascending)) if c == column => {
                Some((column, SortDirection::Descending))
            }
            Some((c, SortDirection::Descending)) if c == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }
}

/// Sorts in place according to the state; stable, so ties keep their order
pub fn sort_list<T: Sortable>(items: &mut [T], state: &SortState<T::Column>) {
    if let Some((column, direction)) = state.current() {
        items.sort_by(|a, b| {
            let cmp = a.compare_by_column(b, column);
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }
}

/// Case-insensitive text comparison, missing values first
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Numeric comparison, missing values first
pub fn compare_number(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Get the sort indicator for a header
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    }
}

pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

/// Rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Rows(usize),
    All,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(10)
    }
}

impl PageSize {
    pub const OPTIONS: [PageSize; 5] = [
        PageSize::Rows(10),
        PageSize::Rows(20),
        PageSize::Rows(50),
        PageSize::Rows(100),
        PageSize::All,
    ];

    pub fn label(&self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "All".to_string(),
        }
    }

    /// `<option>` value
    pub fn value(&self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "all".to_string(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|size| size.value() == value)
    }
}

/// Number of pages, never less than one
pub fn page_count(total: usize, size: PageSize) -> usize {
    match size {
        PageSize::Rows(0) | PageSize::All => 1,
        PageSize::Rows(n) => total.div_ceil(n).max(1),
    }
}

/// Rows of the given page; out-of-range pages are clamped to the last one
pub fn page_slice<T>(items: &[T], page: usize, size: PageSize) -> &[T] {
    match size {
        PageSize::Rows(0) | PageSize::All => items,
        PageSize::Rows(n) => {
            let page = page.min(page_count(items.len(), size) - 1);
            let start = (page * n).min(items.len());
            let end = (start + n).min(items.len());
            &items[start..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Name,
        Price,
    }

    impl Sortable for Row {
        type Column = Col;

        fn compare_by_column(&self, other: &Self, column: Col) -> Ordering {
            match column {
                Col::Name => compare_text(Some(self.name), Some(other.name)),
                Col::Price => compare_number(self.price, other.price),
            }
        }
    }

    fn prices(rows: &[Row]) -> Vec<Option<f64>> {
        rows.iter().map(|r| r.price).collect()
    }

    #[test]
    fn test_sort_toggle_cycle() {
        let mut state = SortState::default();
        state.toggle(Col::Price);
        assert_eq!(state.current(), Some((Col::Price, SortDirection::Ascending)));
        state.toggle(Col::Price);
        assert_eq!(state.current(), Some((Col::Price, SortDirection::Descending)));
        state.toggle(Col::Price);
        assert_eq!(state.current(), None);

        state.toggle(Col::Price);
        state.toggle(Col::Name);
        assert_eq!(state.current(), Some((Col::Name, SortDirection::Ascending)));
        assert_eq!(state.direction_of(Col::Price), None);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let mut rows = vec![
            Row { name: "a", price: Some(300.0) },
            Row { name: "b", price: Some(100.0) },
            Row { name: "c", price: Some(200.0) },
        ];
        sort_list(&mut rows, &SortState::new(Col::Price, SortDirection::Ascending));
        assert_eq!(prices(&rows), vec![Some(100.0), Some(200.0), Some(300.0)]);
        sort_list(&mut rows, &SortState::new(Col::Price, SortDirection::Descending));
        assert_eq!(prices(&rows), vec![Some(300.0), Some(200.0), Some(100.0)]);
    }

    #[test]
    fn test_unsorted_keeps_order_and_missing_first() {
        let mut rows = vec![
            Row { name: "b", price: Some(1.0) },
            Row { name: "a", price: None },
        ];
        sort_list(&mut rows, &SortState::default());
        assert_eq!(rows[0].name, "b");
        sort_list(&mut rows, &SortState::new(Col::Price, SortDirection::Ascending));
        assert_eq!(rows[0].name, "a");
    }

    #[test]
    fn test_text_compare_is_case_insensitive() {
        assert_eq!(compare_text(Some("apple"), Some("Banana")), Ordering::Less);
        assert_eq!(compare_text(None, Some("a")), Ordering::Less);
    }

    #[test]
    fn test_page_size_options() {
        assert_eq!(PageSize::default(), PageSize::Rows(10));
        assert_eq!(PageSize::from_value("all"), Some(PageSize::All));
        assert_eq!(PageSize::from_value("50"), Some(PageSize::Rows(50)));
        assert_eq!(PageSize::from_value("7"), None);
        assert_eq!(PageSize::All.label(), "All");
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PageSize::Rows(10)), 1);
        assert_eq!(page_count(10, PageSize::Rows(10)), 1);
        assert_eq!(page_count(11, PageSize::Rows(10)), 2);
        assert_eq!(page_count(250, PageSize::All), 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 0, PageSize::Rows(10)), &items[0..10]);
        assert_eq!(page_slice(&items, 2, PageSize::Rows(10)), &items[20..25]);
        assert_eq!(page_slice(&items, 9, PageSize::Rows(10)), &items[20..25]);
        assert_eq!(page_slice(&items, 3, PageSize::All), &items[..]);
        let empty: Vec<u32> = Vec::new();
        assert!(page_slice(&empty, 0, PageSize::Rows(10)).is_empty());
    }

    proptest! {
        #[test]
        fn prop_page_count_is_ceil_min_one(total in 0usize..5000, size in 1usize..200) {
            let expected = ((total + size - 1) / size).max(1);
            prop_assert_eq!(page_count(total, PageSize::Rows(size)), expected);
        }

        #[test]
        fn prop_pages_cover_all_rows_in_order(total in 0usize..500, size in 1usize..60) {
            let items: Vec<usize> = (0..total).collect();
            let pages = page_count(total, PageSize::Rows(size));
            let joined: Vec<usize> = (0..pages)
                .flat_map(|p| page_slice(&items, p, PageSize::Rows(size)).to_vec())
                .collect();
            prop_assert_eq!(joined, items);
        }

        #[test]
        fn prop_all_is_single_full_page(items in proptest::collection::vec(any::<u16>(), 0..300)) {
            prop_assert_eq!(page_count(items.len(), PageSize::All), 1);
            prop_assert_eq!(page_slice(&items, 0, PageSize::All), &items[..]);
        }
    }
}
