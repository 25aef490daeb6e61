//! # Client-Side Pagination
//!
//! The list screen fetches every user at once and pages through them locally.
//!
//! ## Page Window
//!
//! Pagination controls show a bounded set of page numbers. Up to
//! [`MAX_UNCOMPRESSED_PAGES`] pages are all shown. Past that, the first and last pages are
//! always shown, together with the current page and its immediate neighbours; any gap
//! between those groups collapses into an ellipsis:
//!
//! ```text
//! total = 10, current = 1   →  1 2 … 10
//! total = 10, current = 5   →  1 … 4 5 6 … 10
//! total = 10, current = 10  →  1 … 9 10
//! ```

use crate::error::{Result, RosterError};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

pub const PAGE_SIZE: usize = 12;
pub const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// Number of pages needed for `count` rows. Never less than one.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_UNCOMPRESSED_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// A navigation request from the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Page(usize),
    Next,
    Last,
}

impl FromStr for PageNav {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "f" => Ok(PageNav::First),
            "prev" | "previous" | "p" => Ok(PageNav::Previous),
            "next" | "n" => Ok(PageNav::Next),
            "last" | "l" => Ok(PageNav::Last),
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Ok(PageNav::Page(n)),
                _ => Err(RosterError::Api(format!("Invalid page: {}", s))),
            },
        }
    }
}

/// Current page plus page count for a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_count(count: usize) -> Self {
        let mut pager = Self::new();
        pager.set_count(count);
        pager
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Recomputes the page count after the list changed, clamping the current page.
    pub fn set_count(&mut self, count: usize) {
        self.total = total_pages(count);
        if self.current > self.total {
            self.current = self.total;
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.current < self.total
    }

    /// Controls are only worth showing when there is more than one page.
    pub fn is_paginated(&self) -> bool {
        self.total > 1
    }

    /// Applies a navigation request. Returns whether the current page changed.
    pub fn navigate(&mut self, nav: PageNav) -> bool {
        let target = match nav {
            PageNav::First => 1,
            PageNav::Previous => self.current.saturating_sub(1).max(1),
            PageNav::Page(n) => n.clamp(1, self.total),
            PageNav::Next => (self.current + 1).min(self.total),
            PageNav::Last => self.total,
        };
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Row indexes visible on the current page of a `count`-long list.
    pub fn range(&self, count: usize) -> Range<usize> {
        let start = ((self.current - 1) * PAGE_SIZE).min(count);
        let end = (start + PAGE_SIZE).min(count);
        start..end
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current, self.total)
    }
}
