//! Forgiving page resolution: a page request never fails, it always lands on
//! a page that exists.

use std::num::IntErrorKind;

/// Number of articles shown per page of the public article list.
pub const ARTICLES_PER_PAGE: u32 = 5;

/// Number of rows shown per page of the admin browser.
pub const ADMIN_ROWS_PER_PAGE: u32 = 25;

/// A resolved page: which page number to serve and how to slice the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u32,
    pub num_pages: u32,
    pub per_page: u32,
    pub total_items: i64,
}

impl PageWindow {
    /// Resolve a raw page token against a collection of `total_items` rows.
    ///
    /// - missing or non-integer token: first page
    /// - integer beyond either end of the range: last page
    /// - anything else: that exact page
    ///
    /// An empty collection still has one (empty) page.
    pub fn resolve(token: Option<&str>, total_items: i64, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let num_pages = num_pages(total_items, per_page);

        let number = match token.map(str::trim).map(parse_page) {
            None | Some(PageToken::Invalid) => 1,
            Some(PageToken::OutOfRange) => num_pages,
            Some(PageToken::Number(n)) if n < 1 || n > i64::from(num_pages) => num_pages,
            Some(PageToken::Number(n)) => n as u32,
        };

        Self {
            number,
            num_pages,
            per_page,
            total_items,
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.number - 1) * i64::from(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

enum PageToken {
    Number(i64),
    /// An integer too large in magnitude to represent
    OutOfRange,
    Invalid,
}

fn parse_page(token: &str) -> PageToken {
    match token.parse::<i64>() {
        Ok(n) => PageToken::Number(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PageToken::OutOfRange,
            _ => PageToken::Invalid,
        },
    }
}

fn num_pages(total_items: i64, per_page: u32) -> u32 {
    if total_items <= 0 {
        return 1;
    }
    let per_page = i64::from(per_page);
    let pages = (total_items + per_page - 1) / per_page;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_token_serves_first_page() {
        for token in ["abc", "", "2.5", "1e3", "two"] {
            let page = PageWindow::resolve(Some(token), 12, ARTICLES_PER_PAGE);
            assert_eq!(page.number, 1, "token {token:?}");
            assert_eq!(page.offset(), 0);
        }
    }

    #[test]
    fn missing_token_serves_first_page() {
        let page = PageWindow::resolve(None, 12, ARTICLES_PER_PAGE);
        assert_eq!(page.number, 1);
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn token_past_the_end_serves_last_page() {
        let page = PageWindow::resolve(Some("99"), 12, ARTICLES_PER_PAGE);
        assert_eq!(page.num_pages, 3);
        assert_eq!(page.number, 3);
        assert_eq!(page.offset(), 10);
        assert!(!page.has_next());
    }

    #[test]
    fn token_below_one_serves_last_page() {
        assert_eq!(PageWindow::resolve(Some("0"), 12, 5).number, 3);
        assert_eq!(PageWindow::resolve(Some("-4"), 12, 5).number, 3);
    }

    #[test]
    fn integers_too_large_to_represent_serve_last_page() {
        assert_eq!(PageWindow::resolve(Some("99999999999999999999"), 12, 5).number, 3);
        assert_eq!(PageWindow::resolve(Some("-99999999999999999999"), 12, 5).number, 3);
        assert_eq!(PageWindow::resolve(Some("+2"), 12, 5).number, 2);
    }

    #[test]
    fn exact_page_is_served() {
        let page = PageWindow::resolve(Some(" 2 "), 12, ARTICLES_PER_PAGE);
        assert_eq!(page.number, 2);
        assert_eq!(page.offset(), 5);
        assert_eq!(page.limit(), 5);
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn empty_collection_has_one_page() {
        let page = PageWindow::resolve(Some("7"), 0, ARTICLES_PER_PAGE);
        assert_eq!(page.num_pages, 1);
        assert_eq!(page.number, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        assert_eq!(PageWindow::resolve(None, 10, 5).num_pages, 2);
        assert_eq!(PageWindow::resolve(None, 11, 5).num_pages, 3);
    }
}
