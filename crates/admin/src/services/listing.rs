//! In-memory list derivation: search, status filter, sort, pagination.
//!
//! Every list page fetches its full collection from the platform and then
//! derives the visible view here, per request. Nothing is cached between
//! requests - the platform response is always the source of truth.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Query-string value for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Common list query parameters, straight from the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Free-text search term.
    pub q: Option<String>,
    /// Status filter value (entity-specific vocabulary).
    pub status: Option<String>,
    /// Sort key (entity-specific vocabulary).
    pub sort: Option<String>,
    /// Sort direction.
    pub dir: Option<SortDir>,
    /// 1-based page number.
    pub page: Option<usize>,
}

impl ListParams {
    /// The effective search term: trimmed, `None` when empty.
    #[must_use]
    pub fn search_term(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// The effective status filter: `None` when absent or empty.
    #[must_use]
    pub fn status_filter(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// A sortable field value.
///
/// Rows expose their fields through this enum so the sort is stable across
/// heterogeneous column types.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Case-insensitive text.
    Text(String),
    /// Numeric value (prices, quantities).
    Number(Decimal),
    /// The row has no value for this key; sorts last.
    Missing,
}

impl SortValue {
    /// Build a text value, lowercased for case-insensitive ordering.
    #[must_use]
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_lowercase())
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Number(_) => 1,
            Self::Missing => 2,
        }
    }

    fn compare(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// A row that can be searched, filtered by status, and sorted.
pub trait Listable {
    /// Lowercased text the search term is matched against.
    fn search_haystack(&self) -> String;

    /// The row's status value, in the same vocabulary as the filter.
    fn status_key(&self) -> Option<String>;

    /// The row's value for a sort key. Unknown keys return
    /// [`SortValue::Missing`], which keeps the fetch order.
    fn sort_value(&self, key: &str) -> SortValue;
}

/// One page of a derived list.
#[derive(Debug)]
pub struct Page<T> {
    /// Rows on this page.
    pub items: Vec<T>,
    /// Total rows after filtering (all pages).
    pub total: usize,
    /// 1-based page number, clamped into range.
    pub page: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
}

/// Derive the visible page from a fetched collection.
///
/// Filters by search term and status, sorts by the requested key and
/// direction, then slices out the requested page. Out-of-range pages clamp
/// to the last page rather than erroring.
pub fn apply<T: Listable>(items: Vec<T>, params: &ListParams) -> Page<T> {
    let mut rows: Vec<T> = items
        .into_iter()
        .filter(|row| matches_search(row, params))
        .filter(|row| matches_status(row, params))
        .collect();

    if let Some(key) = params.sort.as_deref().filter(|s| !s.is_empty()) {
        let dir = params.dir.unwrap_or_default();
        rows.sort_by(|a, b| {
            let ordering = a.sort_value(key).compare(&b.sort_value(key));
            match dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            }
        });
    }

    paginate(rows, params.page.unwrap_or(1), DEFAULT_PAGE_SIZE)
}

fn matches_search<T: Listable>(row: &T, params: &ListParams) -> bool {
    match params.search_term() {
        Some(term) => row.search_haystack().to_lowercase().contains(&term),
        None => true,
    }
}

fn matches_status<T: Listable>(row: &T, params: &ListParams) -> bool {
    match params.status_filter() {
        Some(wanted) => row.status_key().is_some_and(|status| status == wanted),
        None => true,
    }
}

fn paginate<T>(rows: Vec<T>, requested_page: usize, page_size: usize) -> Page<T> {
    let total = rows.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = requested_page.clamp(1, total_pages);

    let items = rows
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        total,
        page,
        total_pages,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        status: &'static str,
        price: i64,
    }

    impl Listable for Row {
        fn search_haystack(&self) -> String {
            self.name.to_lowercase()
        }

        fn status_key(&self) -> Option<String> {
            Some(self.status.to_string())
        }

        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "name" => SortValue::text(self.name),
                "price" => SortValue::Number(Decimal::new(self.price, 2)),
                _ => SortValue::Missing,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Trail Bottle",
                status: "active",
                price: 1850,
            },
            Row {
                name: "Dry Bag",
                status: "active",
                price: 2700,
            },
            Row {
                name: "Old Lantern",
                status: "archived",
                price: 900,
            },
        ]
    }

    fn params() -> ListParams {
        ListParams::default()
    }

    #[test]
    fn test_no_params_returns_everything_in_fetch_order() {
        let page = apply(rows(), &params());
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].name, "Trail Bottle");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut p = params();
        p.q = Some("TRAIL".to_string());
        let page = apply(rows(), &p);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Trail Bottle");
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let mut p = params();
        p.q = Some("   ".to_string());
        let page = apply(rows(), &p);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_status_filter_exact_match_only() {
        let mut p = params();
        p.status = Some("archived".to_string());
        let page = apply(rows(), &p);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].status, "archived");
    }

    #[test]
    fn test_status_filter_empty_result() {
        let mut p = params();
        p.status = Some("draft".to_string());
        let page = apply(rows(), &p);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_sort_by_name_asc() {
        let mut p = params();
        p.sort = Some("name".to_string());
        let page = apply(rows(), &p);
        let names: Vec<_> = page.items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Dry Bag", "Old Lantern", "Trail Bottle"]);
    }

    #[test]
    fn test_sort_by_price_desc() {
        let mut p = params();
        p.sort = Some("price".to_string());
        p.dir = Some(SortDir::Desc);
        let page = apply(rows(), &p);
        let prices: Vec<_> = page.items.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![2700, 1850, 900]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_fetch_order() {
        let mut p = params();
        p.sort = Some("flavor".to_string());
        let page = apply(rows(), &p);
        assert_eq!(page.items[0].name, "Trail Bottle");
    }

    #[test]
    fn test_search_and_status_combine() {
        let mut p = params();
        p.q = Some("bottle".to_string());
        p.status = Some("archived".to_string());
        let page = apply(rows(), &p);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_pagination_slices_and_counts() {
        let many: Vec<Row> = (0..60)
            .map(|_| Row {
                name: "Widget",
                status: "active",
                price: 100,
            })
            .collect();

        let mut p = params();
        p.page = Some(2);
        let page = apply(many, &p);
        assert_eq!(page.total, 60);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_clamps_out_of_range_page() {
        let mut p = params();
        p.page = Some(99);
        let page = apply(rows(), &p);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_sort_values_compare_across_variants() {
        assert_eq!(
            SortValue::text("a").compare(&SortValue::text("b")),
            std::cmp::Ordering::Less
        );
        assert_eq!(
            SortValue::Missing.compare(&SortValue::text("a")),
            std::cmp::Ordering::Greater
        );
    }
}
