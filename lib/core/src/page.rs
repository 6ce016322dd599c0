use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::window::page_window;

/// One page of a larger, ordered result set.
///
/// Mirrors the JSON page envelope of the remote API. Unknown fields such as
/// `sort` or `pageable` are ignored on decode. A page is a snapshot: a new
/// fetch produces a new page instead of patching this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// 0-based index of this page
    pub number: u32,
    /// Requested page size
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> ResultPage<T> {
    /// A page with no content and no further pages.
    #[must_use]
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size,
            total_elements: 0,
            total_pages: 0,
            number_of_elements: 0,
            first: true,
            last: true,
        }
    }

    /// Cut page `number` of `size` elements out of the complete, already
    /// ordered result list. An offset beyond the list yields an empty page.
    pub fn from_slice(all: &[T], number: u32, size: u32) -> Result<Self>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(Error::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let total = all.len();
        let start = (number as usize).saturating_mul(size as usize).min(total);
        let end = start.saturating_add(size as usize).min(total);
        let content = all[start..end].to_vec();
        let total_pages = u32::try_from(total.div_ceil(size as usize))
            .map_err(|_| Error::InvalidArgument(format!("too many pages for {total} elements")))?;

        Ok(Self {
            number_of_elements: content.len() as u32,
            content,
            number,
            size,
            total_elements: total as u64,
            total_pages,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check the envelope invariants: the element count matches the content
    /// and fits the page size, the page index lies within the page range, and
    /// `first`/`last` agree with the index.
    pub fn is_consistent(&self) -> bool {
        let count_ok = self.number_of_elements as usize == self.content.len()
            && self.number_of_elements <= self.size;
        let index_ok = self.number < self.total_pages.max(1);
        let first_ok = self.first == (self.number == 0);
        let last_ok = self.last == (self.total_pages == 0 || self.number == self.total_pages - 1);
        count_ok && index_ok && first_ok && last_ok
    }

    /// 1-based page numbers to offer around this page.
    pub fn page_window(&self) -> Vec<u32> {
        page_window(self.total_pages, self.number)
    }

    /// Whether the 1-based page number refers to this page.
    #[inline]
    pub fn is_active(&self, page_one_based: u32) -> bool {
        page_one_based == self.number + 1
    }

    /// Transform the content, keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> ResultPage<U>
    where
        F: FnMut(T) -> U,
    {
        ResultPage {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
        }
    }
}
