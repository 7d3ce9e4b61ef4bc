use std::fmt;

/// Number of pages offered by the pagination bar.
pub const TOTAL_PAGES: u32 = 10;

/// Articles requested per page.
pub const PER_PAGE: u32 = 6;

/// Fixed page strip shown between Previous and Next.
pub const PAGE_LAYOUT: [PageEntry; 7] = [
    PageEntry::Number(1),
    PageEntry::Number(2),
    PageEntry::Number(3),
    PageEntry::Ellipsis,
    PageEntry::Number(8),
    PageEntry::Number(9),
    PageEntry::Number(10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Number(u32),
    /// Truncation marker; selecting it does nothing.
    Ellipsis,
}

impl PageEntry {
    pub fn page(self) -> Option<u32> {
        match self {
            PageEntry::Number(page) => Some(page),
            PageEntry::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Number(page) => write!(f, "{page}"),
            PageEntry::Ellipsis => write!(f, "..."),
        }
    }
}

pub(crate) fn is_valid_page(page: u32) -> bool {
    (1..=TOTAL_PAGES).contains(&page)
}
