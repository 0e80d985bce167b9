//! # Pagination Engine
//!
//! Pure page derivation: given a results list and a fixed page size, compute
//! the page slice and its metadata. Nothing here is persisted.
//!
//! The requested page is clamped into `1..=max(1, total_pages)`, so a filter
//! or search that narrows the result set can never strand a viewer on an
//! out-of-range page.

/// One page of results plus the metadata navigation controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Clamped, 1-based.
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// `1..=total_pages`, for rendering numbered page controls.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }
}

/// Derive the page `requested_page` of `items`. A `page_size` of zero is
/// treated as one.
pub fn paginate<T: Clone>(items: &[T], requested_page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let current_page = requested_page.clamp(1, total_pages.max(1));
    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let slice = if start < total_items { &items[start..end] } else { &[] as &[T] };

    Page {
        items: slice.to_vec(),
        current_page,
        page_size,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_twelve_items_page_size_five() {
        let all = items(12);

        let first = paginate(&all, 1, 5);
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = paginate(&all, 3, 5);
        assert_eq!(last.items, vec![10, 11]);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_slices_cover_everything_once() {
        let all = items(23);
        let size = 7;
        let total_pages = paginate(&all, 1, size).total_pages;

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            let p = paginate(&all, page, size);
            assert!(p.items.len() <= size);
            seen.extend(p.items);
        }
        assert_eq!(seen, all);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(paginate(&items(10), 1, 5).total_pages, 2);
        assert_eq!(paginate(&items(11), 1, 5).total_pages, 3);
        assert_eq!(paginate(&items(0), 1, 5).total_pages, 0);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let all = items(12);

        let past_end = paginate(&all, 99, 5);
        assert_eq!(past_end.current_page, 3);
        assert_eq!(past_end.items, vec![10, 11]);

        let below_start = paginate(&all, 0, 5);
        assert_eq!(below_start.current_page, 1);
    }

    #[test]
    fn test_empty_list() {
        let page = paginate(&items(0), 4, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let page = paginate(&items(3), 2, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(paginate(&items(12), 1, 5).page_numbers(), vec![1, 2, 3]);
    }
}
