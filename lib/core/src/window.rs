// Sliding window of page links for a paged listing

/// Maximum number of page links shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 10;

/// 1-based page numbers to offer for direct navigation.
///
/// `current` is the 0-based index of the page being shown. When there are
/// more than [`MAX_VISIBLE_PAGES`] pages, the window starts half a window
/// before `current` and is shifted left when it would run past the last page.
#[must_use]
pub fn page_window(total_pages: u32, current: u32) -> Vec<u32> {
    page_window_with(total_pages, current, MAX_VISIBLE_PAGES)
}

/// [`page_window`] with a custom window width.
#[must_use]
pub fn page_window_with(total_pages: u32, current: u32, max_visible: u32) -> Vec<u32> {
    let (start, end) = if total_pages <= max_visible {
        (0, total_pages)
    } else {
        // integer division: an odd width centers one page further right
        let half = max_visible / 2;
        let mut start = if current > half { current - half } else { 0 };
        let mut end = start.saturating_add(max_visible);
        if end > total_pages {
            start = start.saturating_sub(end - total_pages);
            end = total_pages;
        }
        (start, end)
    };

    (start..end).map(|index| index + 1).collect()
}
