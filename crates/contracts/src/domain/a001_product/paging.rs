/// Items-per-page choices offered by the catalog page.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [24, 48, 96, 192];

pub const DEFAULT_PAGE_SIZE: usize = 48;

/// Number of page buttons shown in the pager.
const PAGER_WINDOW: usize = 7;

/// Total number of pages; an empty list still counts as one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// The 1-based `page` slice `[(page - 1) * size, page * size)`. Pages past
/// the end are empty.
pub fn page_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let start = (page.max(1) - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers for the pager: a window of up to seven pages, pinned to the
/// edges when the current page is near them.
pub fn page_numbers(current: usize, total: usize) -> Vec<usize> {
    let count = PAGER_WINDOW.min(total);
    (0..count)
        .map(|i| {
            if total <= PAGER_WINDOW || current <= 4 {
                i + 1
            } else if current >= total - 3 {
                total - 6 + i
            } else {
                current - 3 + i
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_concatenate_to_the_whole_list() {
        let items: Vec<usize> = (0..103).collect();
        let size = 24;
        let mut collected = Vec::new();
        for page in 1..=total_pages(items.len(), size) {
            collected.extend_from_slice(page_slice(&items, size, page));
        }
        assert_eq!(collected, items);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (0..10).collect();
        assert!(page_slice(&items, 48, 2).is_empty());
        assert!(page_slice(&items, 4, 4).is_empty());
    }

    #[test]
    fn empty_list_still_has_one_page() {
        assert_eq!(total_pages(0, 48), 1);
        assert_eq!(total_pages(48, 48), 1);
        assert_eq!(total_pages(49, 48), 2);
    }

    #[test]
    fn pager_window_pins_to_edges() {
        assert_eq!(page_numbers(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(2, 20), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(10, 20), vec![7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(page_numbers(19, 20), vec![14, 15, 16, 17, 18, 19, 20]);
    }
}
