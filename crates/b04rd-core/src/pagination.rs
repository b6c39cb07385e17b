//! Pagination constants and helpers.
//!
//! Pages are 1-based throughout the client.

/// Posts shown per feed page.
pub const POSTS_PER_PAGE: u32 = 10;

/// Characters shown per gallery page on the home screen.
pub const CHARACTERS_PER_PAGE: u32 = 6;

/// First page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Converts a 1-based page number to a listing offset.
pub fn offset_for_page(page: u32, per_page: u32) -> u32 {
    page.saturating_sub(1) * per_page
}

/// Converts a listing offset back to its 1-based page number.
pub fn page_for_offset(offset: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return DEFAULT_PAGE;
    }
    offset / per_page + 1
}

/// Number of pages needed for `total` items (ceiling division).
pub fn total_pages(total: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_page_round_trip() {
        assert_eq!(offset_for_page(1, POSTS_PER_PAGE), 0);
        assert_eq!(offset_for_page(3, POSTS_PER_PAGE), 20);
        assert_eq!(page_for_offset(0, POSTS_PER_PAGE), 1);
        assert_eq!(page_for_offset(20, POSTS_PER_PAGE), 3);
        for page in 1..=7 {
            let offset = offset_for_page(page, CHARACTERS_PER_PAGE);
            assert_eq!(page_for_offset(offset, CHARACTERS_PER_PAGE), page);
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(826, 6), 138);
    }
}
