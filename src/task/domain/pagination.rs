//! Page-size preference and pagination arithmetic for the task list.

use serde::{Deserialize, Serialize};

/// Page sizes offered to the user, selected by index.
pub const PER_PAGE_OPTIONS: [u64; 4] = [10, 20, 50, 100];

/// Index used when no valid preference has been stored.
pub const DEFAULT_PER_PAGE_INDEX: usize = 1;

const DEFAULT_LIMIT: u64 = 20;

/// Number of numbered page links shown either side of the current page.
const PAGE_LINK_RADIUS: u64 = 2;

/// Selected entry of [`PER_PAGE_OPTIONS`].
///
/// Construction never fails: an out-of-range index falls back to
/// [`DEFAULT_PER_PAGE_INDEX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct PerPage {
    index: usize,
}

impl PerPage {
    /// Selects an option by index, falling back to the default.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        if index < PER_PAGE_OPTIONS.len() {
            Self { index }
        } else {
            Self {
                index: DEFAULT_PER_PAGE_INDEX,
            }
        }
    }

    /// Parses an option index from a URL path segment.
    #[must_use]
    pub fn from_path_segment(segment: &str) -> Self {
        segment
            .trim()
            .parse::<usize>()
            .map_or_else(|_| Self::default(), Self::from_index)
    }

    /// Returns the option index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Returns the number of rows per page.
    #[must_use]
    pub fn limit(self) -> u64 {
        PER_PAGE_OPTIONS
            .get(self.index)
            .copied()
            .unwrap_or(DEFAULT_LIMIT)
    }
}

impl From<usize> for PerPage {
    fn from(index: usize) -> Self {
        Self::from_index(index)
    }
}

impl From<PerPage> for usize {
    fn from(per_page: PerPage) -> Self {
        per_page.index
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self::from_index(DEFAULT_PER_PAGE_INDEX)
    }
}

/// Parses a 1-based page number; missing, malformed or zero means page 1.
#[must_use]
pub fn parse_page_number(segment: Option<&str>) -> u64 {
    segment
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map_or(1, |page| page.max(1))
}

/// A requested page of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: PerPage,
}

impl PageRequest {
    /// Creates a request for a 1-based page; `0` is treated as page 1.
    #[must_use]
    pub fn new(page: u64, per_page: PerPage) -> Self {
        Self {
            page: page.max(1),
            per_page,
        }
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Returns the maximum number of rows on the page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.per_page.limit()
    }

    /// Returns the number of rows skipped before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }
}

/// Pagination controls computed from a request and the total row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    request: PageRequest,
    total_rows: u64,
}

impl Pagination {
    /// Computes the controls for `request` over `total_rows` records.
    #[must_use]
    pub const fn new(request: PageRequest, total_rows: u64) -> Self {
        Self {
            request,
            total_rows,
        }
    }

    /// Returns the current 1-based page.
    #[must_use]
    pub const fn current_page(&self) -> u64 {
        self.request.page()
    }

    /// Returns the total number of stored records.
    #[must_use]
    pub const fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// Returns the number of pages; an empty table still has one page.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_rows.div_ceil(self.request.limit()).max(1)
    }

    /// Returns the 1-based position of the first row shown, or 0 when the
    /// page is empty.
    #[must_use]
    pub fn showing_from(&self) -> u64 {
        let offset = self.request.offset();
        if offset >= self.total_rows {
            return 0;
        }
        offset.saturating_add(1)
    }

    /// Returns the 1-based position of the last row shown, or 0 when the
    /// page is empty.
    #[must_use]
    pub fn showing_to(&self) -> u64 {
        if self.showing_from() == 0 {
            return 0;
        }
        self.request
            .offset()
            .saturating_add(self.request.limit())
            .min(self.total_rows)
    }

    /// Returns the previous page number, if any.
    #[must_use]
    pub fn previous_page(&self) -> Option<u64> {
        let page = self.current_page();
        (page > 1).then(|| page.saturating_sub(1).min(self.total_pages()))
    }

    /// Returns the next page number, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<u64> {
        let page = self.current_page();
        (page < self.total_pages()).then(|| page.saturating_add(1))
    }

    /// Returns the numbered page links around the current page.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u64> {
        let total_pages = self.total_pages();
        let anchor = self.current_page().min(total_pages);
        let first = anchor.saturating_sub(PAGE_LINK_RADIUS).max(1);
        let last = anchor.saturating_add(PAGE_LINK_RADIUS).min(total_pages);
        (first..=last).collect()
    }
}
