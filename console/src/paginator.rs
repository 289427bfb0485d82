use shared::config::Config;

pub const LINK_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// Target page, `None` when already on the first page.
    Previous(Option<usize>),
    Number { page: usize, active: bool },
    /// Target page, `None` when already on the last page.
    Next(Option<usize>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number actually shown after clamping.
    pub number: usize,
    pub page_count: usize,
    pub links: Vec<PageLink>,
}

/// Slices `items` into the 1-based page `page_index` and builds the link strip.
///
/// A `page_size` of zero means [`Config::DEFAULT_PAGE_SIZE`]; an out-of-range page
/// index is clamped to the nearest existing page. An empty input still has
/// one (empty) page.
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> Page<'_, T> {
    let page_size = if page_size == 0 {
        Config::DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let page_count = items.len().div_ceil(page_size).max(1);
    let number = page_index.clamp(1, page_count);

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start.min(end)..end],
        number,
        page_count,
        links: page_links(number, page_count),
    }
}

fn page_links(current: usize, page_count: usize) -> Vec<PageLink> {
    let last = (current.saturating_sub(1).max(1) + LINK_WINDOW - 1).min(page_count);
    let first = (last + 1).saturating_sub(LINK_WINDOW).max(1);

    let mut links = Vec::with_capacity(LINK_WINDOW + 2);
    links.push(PageLink::Previous((current > 1).then(|| current - 1)));
    links.extend((first..=last).map(|page| PageLink::Number {
        page,
        active: page == current,
    }));
    links.push(PageLink::Next((current < page_count).then(|| current + 1)));
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<usize> {
        links
            .iter()
            .filter_map(|l| match l {
                PageLink::Number { page, .. } => Some(*page),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_pages_hold_exactly_page_size() {
        let items: Vec<u32> = (0..25).collect();
        let first = paginate(&items, 12, 1);
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.page_count, 3);

        let second = paginate(&items, 12, 2);
        assert_eq!(second.items.first(), Some(&12));
        assert_eq!(second.items.last(), Some(&23));

        let third = paginate(&items, 12, 3);
        assert_eq!(third.items, &[24]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (0..24).collect();
        let page = paginate(&items, 12, 2);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.links.last(), Some(&PageLink::Next(None)));
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(&items, 2, 0).number, 1);
        let page = paginate(&items, 2, 99);
        assert_eq!(page.number, 3);
        assert_eq!(page.items, &[4]);
    }

    #[test]
    fn test_empty_input_has_single_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 12, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(
            page.links,
            vec![
                PageLink::Previous(None),
                PageLink::Number { page: 1, active: true },
                PageLink::Next(None),
            ]
        );
    }

    #[test]
    fn test_zero_page_size_uses_default() {
        let items: Vec<u32> = (0..30).collect();
        assert_eq!(paginate(&items, 0, 1).items.len(), Config::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_link_window_contains_current_page() {
        let items: Vec<u32> = (0..100).collect();
        let count = paginate(&items, 10, 1).page_count;
        for current in 1..=count {
            let page = paginate(&items, 10, current);
            let window = numbers(&page.links);
            assert!(window.len() <= LINK_WINDOW);
            assert!(window.contains(&current));
            assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }

    #[test]
    fn test_link_window_edges() {
        let items: Vec<u32> = (0..50).collect();
        let first = paginate(&items, 10, 1);
        assert_eq!(numbers(&first.links), vec![1, 2, 3]);
        assert_eq!(first.links[0], PageLink::Previous(None));
        assert_eq!(first.links.last(), Some(&PageLink::Next(Some(2))));

        let middle = paginate(&items, 10, 3);
        assert_eq!(numbers(&middle.links), vec![2, 3, 4]);
        assert!(middle.links.contains(&PageLink::Number { page: 3, active: true }));

        let last = paginate(&items, 10, 5);
        assert_eq!(numbers(&last.links), vec![3, 4, 5]);
        assert_eq!(last.links[0], PageLink::Previous(Some(4)));
    }
}
