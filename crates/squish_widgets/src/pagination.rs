//! Pagination range calculator
//!
//! Computes the ordered sequence of page markers a pagination control
//! renders: literal page numbers plus up to two ellipsis separators. The
//! first and last pages are always pinned as numbers so jump-to-start/end
//! stays one click away; the window around the current page clamps at the
//! edges and never emits out-of-range numbers.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Pagination input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("pagination requires at least one page")]
    NoPages,
    #[error("page {page} is out of range 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: u32 },
}

/// A rendered pagination slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A literal, clickable page number (1-indexed)
    Page(u32),
    /// A collapsed run of pages; clicking it is a no-op for the consumer
    Ellipsis,
}

impl PageMarker {
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }

    /// The page number, if this marker is one
    pub fn page(&self) -> Option<u32> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }
}

impl Display for PageMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Ellipsis => f.write_str("…"),
        }
    }
}

/// Compute the marker sequence for a pagination control
///
/// `sibling_count` is how many page numbers appear on each side of the
/// current page before collapsing into an ellipsis. With up to
/// `sibling_count*2 + 5` total pages everything fits and the full run is
/// returned; beyond that the result takes one of three shapes, with dots
/// on the left, the right, or both.
///
/// Inputs are validated: `total_pages` must be at least 1 and `page` must
/// fall in `1..=total_pages`.
pub fn compute_page_range(
    page: u32,
    total_pages: u32,
    sibling_count: u32,
) -> Result<Vec<PageMarker>, PaginationError> {
    if total_pages == 0 {
        return Err(PaginationError::NoPages);
    }
    if page == 0 || page > total_pages {
        return Err(PaginationError::PageOutOfRange { page, total_pages });
    }

    // Current page + siblings each side + both edges, then two slots
    // reserved for the ellipses. Saturating: a huge sibling_count means
    // everything fits, never a wrapped block count.
    let total_numbers = sibling_count.saturating_mul(2).saturating_add(3);
    let total_blocks = total_numbers.saturating_add(2);

    if total_pages <= total_blocks {
        return Ok((1..=total_pages).map(PageMarker::Page).collect());
    }

    let left_sibling = page.saturating_sub(sibling_count).max(1);
    let right_sibling = page.saturating_add(sibling_count).min(total_pages);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages - 1;

    let mut markers = Vec::with_capacity(total_blocks as usize);

    if !show_left_dots && show_right_dots {
        // Window hugs the left edge: the run absorbs the page just past
        // the right sibling so the ellipsis never sits next to it.
        markers.extend((1..=right_sibling + 1).map(PageMarker::Page));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    } else if show_left_dots && !show_right_dots {
        // Window hugs the right edge; mirror of the branch above.
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((left_sibling - 1..=total_pages).map(PageMarker::Page));
    } else {
        // Dots on both sides. The no-dots case can't occur here: it would
        // require total_pages <= sibling_count*2 + 3, which the early
        // return above already handled.
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((left_sibling..=right_sibling).map(PageMarker::Page));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    }

    Ok(markers)
}

/// Stateful page controller for a pagination widget
///
/// Holds the current page and recomputes markers on demand. Unlike
/// [`compute_page_range`], navigation is forgiving: selections clamp into
/// range instead of erroring, since they typically come straight from
/// user input.
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    page: u32,
    total_pages: u32,
    sibling_count: u32,
}

impl Pagination {
    /// Create a controller on page 1 with one sibling per side
    ///
    /// `total_pages` is clamped to a minimum of 1.
    pub fn new(total_pages: u32) -> Self {
        Self {
            page: 1,
            total_pages: total_pages.max(1),
            sibling_count: 1,
        }
    }

    /// Set the sibling count
    pub fn with_sibling_count(mut self, sibling_count: u32) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Markers for the current state
    ///
    /// Never empty: the controller keeps `page` in `1..=total_pages` by
    /// construction.
    pub fn markers(&self) -> Vec<PageMarker> {
        match compute_page_range(self.page, self.total_pages, self.sibling_count) {
            Ok(markers) => markers,
            Err(err) => {
                debug_assert!(false, "pagination controller state invalid: {err}");
                Vec::new()
            }
        }
    }

    /// Jump to a page, clamping into range
    pub fn select(&mut self, page: u32) {
        self.page = page.clamp(1, self.total_pages);
    }

    /// Advance one page, saturating at the end
    pub fn next(&mut self) {
        self.select(self.page.saturating_add(1));
    }

    /// Go back one page, saturating at the start
    pub fn prev(&mut self) {
        self.select(self.page.saturating_sub(1));
    }

    /// Replace the page count, re-clamping the current page
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.page = self.page.clamp(1, self.total_pages);
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
