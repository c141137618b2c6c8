//! Page window arithmetic.

use std::ops::Range;

/// Half-open row range of page `page`, or `None` when the page starts at
/// or past `len`. A `page_size` of 0 is treated as 1.
pub fn page_bounds(len: usize, page_size: usize, page: usize) -> Option<Range<usize>> {
    let page_size = page_size.max(1);
    let start = page.checked_mul(page_size)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(page_size).min(len);
    Some(start..end)
}

/// Number of pages needed for `len` rows. An empty table has one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        return 1;
    }
    len.div_ceil(page_size.max(1))
}
